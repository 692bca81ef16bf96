mod common;

use std::fs;

use airroute_lib::{read_flight_graph, Coordinates, Region};

use common::{fixture_graph, fixture_path};

#[test]
fn fixture_builds_expected_network() {
    let file = fs::File::open(fixture_path()).expect("fixture opens");
    let (graph, stats) = read_flight_graph(file).expect("fixture parses");

    assert_eq!(stats.records, 12);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.corrected, 1);
    assert_eq!(graph.len(), 10);
    assert_eq!(graph.flight_count(), 11);
    assert!(!graph.contains("MSP"), "row without geocode is skipped");
}

#[test]
fn airports_keep_first_label_and_region() {
    let graph = fixture_graph();

    let jfk = graph.airport("JFK").expect("JFK present");
    assert_eq!(jfk.label(), "New York City, NY (Metropolitan Area)");
    assert_eq!(jfk.state(), Some("NY"));
    assert_eq!(jfk.region(), Some(Region::MidAtlantic));
    assert_eq!(jfk.coordinates(), Coordinates::new(40.64, -73.78));

    assert_eq!(graph.airport("DFW").unwrap().region(), Some(Region::WestSouthCentral));
    assert_eq!(graph.airport("SEA").unwrap().region(), Some(Region::Pacific));
}

#[test]
fn neighbours_follow_record_order() {
    let graph = fixture_graph();
    assert_eq!(graph.neighbours("ATL").unwrap(), vec!["JFK", "LAX", "MIA", "DFW"]);
    assert_eq!(graph.neighbours("MIA").unwrap(), vec!["ATL", "EYW"]);
}

#[test]
fn blank_lowest_fare_uses_average_fare() {
    let graph = fixture_graph();
    let leg = graph.leg("DEN", "ORD").expect("ORD-DEN present");
    assert_eq!(leg.fare, 130.0);
    assert_eq!(leg.lowest_fare, 130.0);
    assert_eq!(graph.leg("JFK", "ORD").unwrap().lowest_fare, 90.0);
}

#[test]
fn key_west_geocode_is_corrected() {
    let graph = fixture_graph();
    assert_eq!(
        graph.airport("EYW").unwrap().coordinates(),
        Coordinates::new(24.5551, -81.7799)
    );
}
