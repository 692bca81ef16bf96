// Test-only helpers for `airroute-lib` unit tests
#![allow(dead_code)]

use crate::geo::Coordinates;
use crate::graph::{FlightGraph, FlightLeg};

/// JFK, ORD, ATL and LAX joined by four flights:
///
/// | flight  | fare | distance |
/// |---------|------|----------|
/// | JFK-ORD | 100  | 740      |
/// | ORD-LAX | 150  | 1745     |
/// | JFK-ATL | 80   | 760      |
/// | ATL-LAX | 120  | 1950     |
pub fn four_airport_graph() -> FlightGraph {
    let mut graph = FlightGraph::new();
    graph.add_airport(
        "JFK",
        "New York City, NY (Metropolitan Area)",
        Coordinates::new(40.64, -73.78),
    );
    graph.add_airport(
        "LAX",
        "Los Angeles, CA (Metropolitan Area)",
        Coordinates::new(33.94, -118.41),
    );
    graph.add_airport("ORD", "Chicago, IL", Coordinates::new(41.98, -87.90));
    graph.add_airport("ATL", "Atlanta, GA (Metropolitan Area)", Coordinates::new(33.64, -84.43));

    add(&mut graph, "JFK", "ORD", 740.0, 100.0);
    add(&mut graph, "ORD", "LAX", 1745.0, 150.0);
    add(&mut graph, "JFK", "ATL", 760.0, 80.0);
    add(&mut graph, "ATL", "LAX", 1950.0, 120.0);
    graph
}

pub fn add(graph: &mut FlightGraph, from: &str, to: &str, distance: f64, fare: f64) {
    let leg = FlightLeg::new(distance, fare, fare).expect("valid leg");
    graph.add_flight(from, to, leg).expect("endpoints registered");
}
