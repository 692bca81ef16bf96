#![allow(dead_code)]

use std::path::PathBuf;

use airroute_lib::{load_flight_graph, FlightGraph};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_path() -> PathBuf {
    fixtures_dir().join("flights_sample.csv")
}

pub fn fixture_graph() -> FlightGraph {
    load_flight_graph(&fixture_path()).expect("fixture loads")
}
