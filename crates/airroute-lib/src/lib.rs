//! Airroute library entry points.
//!
//! This crate loads an airport network from a flight dataset and answers
//! trip-planning queries over it: cheapest and shortest routes, airports
//! reachable within a fare budget (optionally restricted to a census region),
//! and the furthest reachable airport in a compass direction. The CLI should
//! only depend on the functions exported here instead of reimplementing
//! behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod ingest;
pub mod output;
pub mod path;
pub mod reach;
pub mod region;

#[cfg(test)]
mod test_helpers;

pub use dataset::{default_dataset_path, resolve_dataset_path, DATASET_ENV_VAR, DATASET_FILENAME};
pub use error::{Error, Result};
pub use geo::{is_in_direction, parse_geocode, Coordinates, Direction};
pub use graph::{Airport, AirportId, Edge, FlightGraph, FlightLeg};
pub use ingest::{load_flight_graph, read_flight_graph, IngestStats};
pub use output::{
    format_amount, AirportSummary, FurthestSummary, ReachSummary, RenderMode, RouteStep,
    RouteSummary,
};
pub use path::{find_route, EdgeWeight, Route};
pub use reach::{BudgetSearch, DirectionOutcome, ReachMode};
pub use region::{region_of_label, region_of_state, state_of, Region};
