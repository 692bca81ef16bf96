//! Subcommand handlers. `main.rs` parses arguments and dispatches here.

pub mod airport;
pub mod reach;
pub mod route;

use std::path::Path;

use airroute_lib::{load_flight_graph, resolve_dataset_path, FlightGraph, ReachMode};
use anyhow::{Context, Result};
use tracing::info;

/// Resolve the dataset location and load the flight graph from it.
pub fn load_graph(data: Option<&Path>) -> Result<FlightGraph> {
    let path = resolve_dataset_path(data).context("failed to locate the flight dataset")?;
    let graph = load_flight_graph(&path)
        .with_context(|| format!("failed to load flight dataset from {}", path.display()))?;
    info!(
        path = %path.display(),
        airports = graph.len(),
        flights = graph.flight_count(),
        "flight graph ready"
    );
    Ok(graph)
}

/// Clap value parser for airport codes: trimmed and upper-cased.
pub fn parse_code(value: &str) -> Result<String, String> {
    let code = value.trim();
    if code.is_empty() {
        return Err("airport code must not be empty".to_string());
    }
    Ok(code.to_ascii_uppercase())
}

/// Clap value parser for budgets, which must be positive and finite.
pub fn parse_budget(value: &str) -> Result<f64, String> {
    let budget: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !budget.is_finite() || budget <= 0.0 {
        return Err("budget must be a positive number".to_string());
    }
    Ok(budget)
}

pub(crate) fn reach_mode(exhaustive: bool) -> ReachMode {
    if exhaustive {
        ReachMode::CheapestFare
    } else {
        ReachMode::FirstVisit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_normalised() {
        assert_eq!(parse_code(" jfk ").unwrap(), "JFK");
        assert!(parse_code("  ").is_err());
    }

    #[test]
    fn budgets_must_be_positive() {
        assert_eq!(parse_budget("250").unwrap(), 250.0);
        assert_eq!(parse_budget("99.5").unwrap(), 99.5);
        assert!(parse_budget("0").is_err());
        assert!(parse_budget("-10").is_err());
        assert!(parse_budget("inf").is_err());
        assert!(parse_budget("NaN").is_err());
        assert!(parse_budget("cheap").is_err());
    }

    #[test]
    fn exhaustive_flag_selects_cheapest_fare() {
        assert_eq!(reach_mode(false), ReachMode::FirstVisit);
        assert_eq!(reach_mode(true), ReachMode::CheapestFare);
    }
}
