//! `airport` lookup and `regions` listing.

use std::fmt::Write;

use airroute_lib::{AirportSummary, FlightGraph, Region};
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::parse_code;
use crate::output::{emit, OutputFormat, Tone};

#[derive(Args, Debug, Clone)]
pub struct AirportArgs {
    /// Airport code to describe.
    #[arg(value_parser = parse_code)]
    pub code: String,
}

#[derive(Debug, Serialize)]
struct RegionEntry {
    name: Region,
    states: &'static [&'static str],
}

pub fn handle_airport(
    graph: &FlightGraph,
    args: &AirportArgs,
    format: OutputFormat,
) -> Result<()> {
    let summary = AirportSummary::with_neighbours(graph, &args.code)
        .with_context(|| format!("cannot describe airport {}", args.code))?;
    emit(format, &summary, Tone::Result, || summary.render())
}

/// List the regions accepted by `reachable --region`.
pub fn handle_regions(format: OutputFormat) -> Result<()> {
    let entries: Vec<RegionEntry> = Region::ALL
        .iter()
        .map(|&region| RegionEntry {
            name: region,
            states: region.states(),
        })
        .collect();

    emit(format, &entries, Tone::Result, || {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Regions:");
        for entry in &entries {
            let _ = writeln!(buffer, "  {}: {}", entry.name, entry.states.join(", "));
        }
        buffer
    })
}
