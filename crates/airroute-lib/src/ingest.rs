//! Build a [`FlightGraph`] from a CSV of flight records.
//!
//! Columns are matched by header name, so column order does not matter and
//! extra columns are ignored. The columns read are:
//!
//! | column           | meaning                                  |
//! |------------------|------------------------------------------|
//! | `city1`          | origin city/state label                  |
//! | `city2`          | destination city/state label             |
//! | `airport_1`      | origin airport code                      |
//! | `airport_2`      | destination airport code                 |
//! | `nsmiles`        | distance in miles                        |
//! | `fare`           | average fare                             |
//! | `fare_low`       | lowest fare; blank means `fare`          |
//! | `Geocoded_City1` | origin label followed by `(lat, lon)`    |
//! | `Geocoded_City2` | destination label followed by `(lat, lon)` |

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::geo::{parse_geocode, Coordinates};
use crate::graph::{FlightGraph, FlightLeg};

/// Known-bad coordinates in the published dataset, replaced on load.
const GEOCODE_CORRECTIONS: [(&str, Coordinates, Coordinates); 2] = [
    (
        "Key West, FL",
        Coordinates::new(70.129129, -143.63129),
        Coordinates::new(24.5551, -81.7799),
    ),
    (
        "Tulsa, OK",
        Coordinates::new(61.096484, -160.967455),
        Coordinates::new(36.1539816, -95.992775),
    ),
];

#[derive(Debug, Deserialize)]
struct FlightRecord {
    #[serde(rename = "city1")]
    origin_city: String,
    #[serde(rename = "city2")]
    destination_city: String,
    #[serde(rename = "airport_1")]
    origin_code: String,
    #[serde(rename = "airport_2")]
    destination_code: String,
    #[serde(rename = "nsmiles")]
    distance: f64,
    fare: f64,
    #[serde(rename = "fare_low", default, deserialize_with = "csv::invalid_option")]
    lowest_fare: Option<f64>,
    #[serde(rename = "Geocoded_City1", default)]
    origin_geocode: String,
    #[serde(rename = "Geocoded_City2", default)]
    destination_geocode: String,
}

/// Counters describing one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub records: usize,
    pub skipped: usize,
    pub corrected: usize,
}

/// Load a flight graph from a CSV file.
pub fn load_flight_graph(path: &Path) -> Result<FlightGraph> {
    let file = fs::File::open(path)?;
    let (graph, stats) = read_flight_graph(file)?;
    debug!(
        path = %path.display(),
        airports = graph.len(),
        flights = graph.flight_count(),
        records = stats.records,
        skipped = stats.skipped,
        corrected = stats.corrected,
        "loaded flight graph"
    );
    Ok(graph)
}

impl FlightGraph {
    /// Build a graph from CSV flight records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        read_flight_graph(reader).map(|(graph, _)| graph)
    }
}

/// Build a graph from CSV flight records, also returning ingestion counters.
///
/// The first record mentioning an airport fixes its label and coordinates. A
/// later record for an already-connected pair replaces that flight's
/// attributes. Records with a blank geocode or identical endpoints are
/// skipped.
pub fn read_flight_graph<R: Read>(reader: R) -> Result<(FlightGraph, IngestStats)> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut graph = FlightGraph::new();
    let mut stats = IngestStats::default();
    let mut raw = StringRecord::new();

    while csv_reader.read_record(&mut raw)? {
        let line = raw.position().map_or(0, |position| position.line());
        let record: FlightRecord =
            raw.deserialize(Some(&headers))
                .map_err(|err| Error::InvalidFlightRecord {
                    line,
                    message: err.to_string(),
                })?;
        stats.records += 1;

        if record.origin_code.is_empty() || record.destination_code.is_empty() {
            return Err(Error::InvalidFlightRecord {
                line,
                message: "airport code must not be empty".to_string(),
            });
        }
        if record.origin_geocode.is_empty() || record.destination_geocode.is_empty() {
            warn!(line, "skipping flight record without geocode");
            stats.skipped += 1;
            continue;
        }
        if record.origin_code == record.destination_code {
            warn!(line, code = %record.origin_code, "skipping flight record with identical endpoints");
            stats.skipped += 1;
            continue;
        }

        let origin = located(&record.origin_city, &record.origin_geocode, line, &mut stats)?;
        let destination = located(
            &record.destination_city,
            &record.destination_geocode,
            line,
            &mut stats,
        )?;

        let leg = FlightLeg::new(
            record.distance,
            record.fare,
            record.lowest_fare.unwrap_or(record.fare),
        )
        .map_err(|err| Error::InvalidFlightRecord {
            line,
            message: err.to_string(),
        })?;

        graph.add_airport(
            record.origin_code.as_str(),
            record.origin_city.as_str(),
            origin,
        );
        graph.add_airport(
            record.destination_code.as_str(),
            record.destination_city.as_str(),
            destination,
        );
        graph.add_flight(&record.origin_code, &record.destination_code, leg)?;
    }

    Ok((graph, stats))
}

fn located(city: &str, geocode: &str, line: u64, stats: &mut IngestStats) -> Result<Coordinates> {
    let parsed = parse_geocode(geocode).map_err(|err| Error::InvalidFlightRecord {
        line,
        message: err.to_string(),
    })?;

    match correct_geocode(city, geocode, parsed) {
        Some(corrected) => {
            debug!(line, city, from = %parsed, to = %corrected, "corrected geocode");
            stats.corrected += 1;
            Ok(corrected)
        }
        None => Ok(parsed),
    }
}

fn correct_geocode(city: &str, geocode: &str, parsed: Coordinates) -> Option<Coordinates> {
    GEOCODE_CORRECTIONS
        .iter()
        .find(|(name, bad, _)| (city.contains(*name) || geocode.contains(*name)) && parsed == *bad)
        .map(|(_, _, good)| *good)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "tbl,city1,city2,airport_1,airport_2,nsmiles,fare,fare_low,Geocoded_City1,Geocoded_City2\n";

    fn read(rows: &str) -> Result<(FlightGraph, IngestStats)> {
        read_flight_graph(format!("{HEADER}{rows}").as_bytes())
    }

    #[test]
    fn builds_symmetric_graph_from_records() {
        let (graph, stats) = read(concat!(
            "Table1a,\"Chicago, IL\",\"Atlanta, GA (Metropolitan Area)\",ORD,ATL,606,150.5,120,",
            "\"Chicago, IL\n(41.88, -87.63)\",\"Atlanta, GA (Metropolitan Area)\n(33.75, -84.39)\"\n",
        ))
        .expect("valid csv");

        assert_eq!(stats.records, 1);
        assert_eq!(graph.len(), 2);
        let leg = graph.leg("ATL", "ORD").expect("flight stored on both ends");
        assert_eq!(leg, FlightLeg::new(606.0, 150.5, 120.0).unwrap());
        assert_eq!(graph.city_of("ATL").unwrap(), "Atlanta, GA (Metropolitan Area)");
        assert_eq!(
            graph.airport("ORD").unwrap().coordinates(),
            Coordinates::new(41.88, -87.63)
        );
    }

    #[test]
    fn blank_lowest_fare_defaults_to_fare() {
        let (graph, _) = read(
            "x,\"A, TX\",\"B, TX\",AAA,BBB,100,80,,\"A, TX (30.0, -97.0)\",\"B, TX (31.0, -96.0)\"\n",
        )
        .unwrap();
        assert_eq!(graph.leg("AAA", "BBB").unwrap().lowest_fare, 80.0);
    }

    #[test]
    fn records_without_geocode_are_skipped() {
        let (graph, stats) = read(concat!(
            "x,\"A, TX\",\"B, TX\",AAA,BBB,100,80,70,,\"B, TX (31.0, -96.0)\"\n",
            "x,\"A, TX\",\"C, TX\",AAA,CCC,100,80,70,\"A, TX (30.0, -97.0)\",\"C, TX (32.0, -95.0)\"\n",
        ))
        .unwrap();

        assert_eq!(stats.skipped, 1);
        assert!(!graph.contains("BBB"));
        assert!(graph.adjacent("AAA", "CCC"));
    }

    #[test]
    fn later_records_overwrite_flight_but_not_airport() {
        let (graph, _) = read(concat!(
            "x,\"A, TX\",\"B, TX\",AAA,BBB,100,80,70,\"A, TX (30.0, -97.0)\",\"B, TX (31.0, -96.0)\"\n",
            "x,\"B, OK\",\"A, OK\",BBB,AAA,110,60,50,\"B, OK (1.0, 1.0)\",\"A, OK (2.0, 2.0)\"\n",
        ))
        .unwrap();

        assert_eq!(graph.flight_count(), 1);
        assert_eq!(graph.leg("AAA", "BBB").unwrap().fare, 60.0);
        assert_eq!(graph.city_of("AAA").unwrap(), "A, TX");
        assert_eq!(
            graph.airport("BBB").unwrap().coordinates(),
            Coordinates::new(31.0, -96.0)
        );
    }

    #[test]
    fn known_bad_geocodes_are_corrected() {
        let (graph, stats) = read(concat!(
            "x,\"Key West, FL\",\"Tulsa, OK\",EYW,TUL,1100,300,250,",
            "\"Key West, FL\n(70.129129, -143.63129)\",\"Tulsa, OK\n(61.096484, -160.967455)\"\n",
        ))
        .unwrap();

        assert_eq!(stats.corrected, 2);
        assert_eq!(
            graph.airport("EYW").unwrap().coordinates(),
            Coordinates::new(24.5551, -81.7799)
        );
        assert_eq!(
            graph.airport("TUL").unwrap().coordinates(),
            Coordinates::new(36.1539816, -95.992775)
        );
    }

    #[test]
    fn bad_numbers_report_the_line() {
        let error = read(
            "x,\"A, TX\",\"B, TX\",AAA,BBB,far,80,70,\"A, TX (30.0, -97.0)\",\"B, TX (31.0, -96.0)\"\n",
        )
        .unwrap_err();
        assert!(matches!(error, Error::InvalidFlightRecord { line: 2, .. }));

        let error = read(
            "x,\"A, TX\",\"B, TX\",AAA,BBB,100,-80,70,\"A, TX (30.0, -97.0)\",\"B, TX (31.0, -96.0)\"\n",
        )
        .unwrap_err();
        assert!(error.to_string().contains("fare"));
    }

    #[test]
    fn identical_endpoints_are_skipped() {
        let (graph, stats) = read(
            "x,\"A, TX\",\"A, TX\",AAA,AAA,0,0,0,\"A, TX (30.0, -97.0)\",\"A, TX (30.0, -97.0)\"\n",
        )
        .unwrap();
        assert_eq!(stats.skipped, 1);
        assert!(graph.is_empty());
    }
}
