use std::path::PathBuf;

use airroute_lib::EdgeWeight;
use anyhow::Result;
use clap::{Parser, Subcommand};

use airroute_cli::commands::airport::{handle_airport, handle_regions, AirportArgs};
use airroute_cli::commands::load_graph;
use airroute_cli::commands::reach::{handle_furthest, handle_reachable, FurthestArgs, ReachableArgs};
use airroute_cli::commands::route::{handle_route, CheapestArgs, RouteArgs};
use airroute_cli::logging::{init_logging, LoggingConfig};
use airroute_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Airport network route and budget queries")]
struct Cli {
    /// Flight dataset file, or a directory containing `flights.csv`.
    /// Defaults to `AIRROUTE_DATA`, then the platform data directory.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cheapest route between two airports by fare.
    Cheapest(CheapestArgs),
    /// Shortest route between two airports by distance.
    Shortest(RouteArgs),
    /// Airports reachable from an origin within a fare budget.
    Reachable(ReachableArgs),
    /// Reachable airport furthest in a compass direction.
    Furthest(FurthestArgs),
    /// Show an airport's city, region and direct connections.
    Airport(AirportArgs),
    /// List the regions and the states they contain.
    Regions,
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();
    let format = cli.format;

    if let Command::Regions = cli.command {
        return handle_regions(format);
    }

    let graph = load_graph(cli.data.as_deref())?;
    match &cli.command {
        Command::Cheapest(args) => handle_route(&graph, &args.route, args.weight(), format),
        Command::Shortest(args) => handle_route(&graph, args, EdgeWeight::Distance, format),
        Command::Reachable(args) => handle_reachable(&graph, args, format),
        Command::Furthest(args) => handle_furthest(&graph, args, format),
        Command::Airport(args) => handle_airport(&graph, args, format),
        Command::Regions => handle_regions(format),
    }
}
