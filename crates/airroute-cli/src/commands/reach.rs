//! `reachable` and `furthest` budget queries.

use airroute_lib::{Direction, FlightGraph, FurthestSummary, ReachSummary, Region};
use anyhow::{Context, Result};
use clap::Args;

use super::{parse_budget, parse_code, reach_mode};
use crate::output::{emit, OutputFormat, Tone};

#[derive(Args, Debug, Clone)]
pub struct ReachableArgs {
    /// Origin airport code.
    #[arg(value_parser = parse_code)]
    pub from: String,
    /// Fare budget in USD; a flight is only taken if money is left afterwards.
    #[arg(long, value_parser = parse_budget)]
    pub budget: f64,
    /// Only report airports in this region (e.g. "New England").
    #[arg(long)]
    pub region: Option<Region>,
    /// Include every airport whose cheapest fare fits the budget, rather than
    /// the first-visit walk.
    #[arg(long)]
    pub exhaustive: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FurthestArgs {
    /// Origin airport code.
    #[arg(value_parser = parse_code)]
    pub from: String,
    /// Fare budget in USD.
    #[arg(long, value_parser = parse_budget)]
    pub budget: f64,
    /// Compass direction: north, south, east or west.
    #[arg(long)]
    pub direction: Direction,
    /// Search every airport whose cheapest fare fits the budget.
    #[arg(long)]
    pub exhaustive: bool,
}

pub fn handle_reachable(
    graph: &FlightGraph,
    args: &ReachableArgs,
    format: OutputFormat,
) -> Result<()> {
    let mode = reach_mode(args.exhaustive);
    let search = graph
        .budget_search(&args.from, args.budget)
        .with_context(|| format!("cannot search from {}", args.from))?
        .with_mode(mode);

    let codes = match args.region {
        Some(region) => search.in_region(region),
        None => search.airports(),
    };
    let summary = ReachSummary::new(graph, &args.from, args.budget, mode, args.region, &codes);
    let tone = if summary.airports.is_empty() {
        Tone::Notice
    } else {
        Tone::Result
    };
    emit(format, &summary, tone, || summary.render())
}

pub fn handle_furthest(
    graph: &FlightGraph,
    args: &FurthestArgs,
    format: OutputFormat,
) -> Result<()> {
    let mode = reach_mode(args.exhaustive);
    let outcome = graph
        .budget_search(&args.from, args.budget)
        .with_context(|| format!("cannot search from {}", args.from))?
        .with_mode(mode)
        .furthest(args.direction);

    let summary = FurthestSummary::new(
        graph,
        &args.from,
        args.budget,
        args.direction,
        mode,
        outcome,
    );
    let tone = if summary.airport.is_some() {
        Tone::Result
    } else {
        Tone::Notice
    };
    emit(format, &summary, tone, || summary.render())
}
