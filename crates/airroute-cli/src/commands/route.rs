//! `cheapest` and `shortest` route queries.

use airroute_lib::{EdgeWeight, FlightGraph, RenderMode, RouteSummary};
use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use super::parse_code;
use crate::output::{emit, OutputFormat, Tone};

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Origin airport code.
    #[arg(value_parser = parse_code)]
    pub from: String,
    /// Destination airport code.
    #[arg(value_parser = parse_code)]
    pub to: String,
    /// Print the route on a single line.
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheapestArgs {
    #[command(flatten)]
    pub route: RouteArgs,
    /// Price legs by their lowest advertised fare instead of the average fare.
    #[arg(long)]
    pub lowest_fare: bool,
}

impl CheapestArgs {
    pub fn weight(&self) -> EdgeWeight {
        if self.lowest_fare {
            EdgeWeight::LowestFare
        } else {
            EdgeWeight::Fare
        }
    }
}

/// Find and print the lowest-weight route between two airports.
pub fn handle_route(
    graph: &FlightGraph,
    args: &RouteArgs,
    weight: EdgeWeight,
    format: OutputFormat,
) -> Result<()> {
    let route = graph
        .shortest_path(&args.from, &args.to, weight)
        .with_context(|| format!("cannot plan a route from {} to {}", args.from, args.to))?;

    let Some(route) = route else {
        let value = json!({
            "origin": args.from,
            "destination": args.to,
            "weight": weight,
            "route": null,
        });
        return emit(format, &value, Tone::Notice, || {
            format!("No route from {} to {}.\n", args.from, args.to)
        });
    };

    let summary = RouteSummary::from_route(graph, &route)?;
    let mode = if args.compact {
        RenderMode::Compact
    } else {
        RenderMode::PlainText
    };
    emit(format, &summary, Tone::Result, || summary.render(mode))
}
