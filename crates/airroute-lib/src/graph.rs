//! Airport graph: an arena of airports keyed by code, each holding its own
//! adjacency list of flight legs.
//!
//! Edges are logically undirected. [`FlightGraph::add_flight`] stores the same
//! [`FlightLeg`] on both endpoints, and adjacency lists keep insertion order so
//! every traversal over the graph is reproducible.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::Coordinates;
use crate::region::{region_of_label, state_of, Region};

/// Index of an airport within the graph arena.
pub type AirportId = usize;

/// Minimum Jaro-Winkler similarity for an airport code to be offered as a
/// suggestion for an unknown one.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions attached to an unknown-airport error.
const MAX_SUGGESTIONS: usize = 3;

/// Attributes carried by a flight connection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightLeg {
    /// Great-circle distance in miles.
    pub distance: f64,
    /// Average fare in USD.
    pub fare: f64,
    /// Lowest advertised fare in USD.
    pub lowest_fare: f64,
}

impl FlightLeg {
    /// Build a leg, rejecting negative or non-finite attributes.
    pub fn new(distance: f64, fare: f64, lowest_fare: f64) -> Result<Self> {
        let fields = [
            (distance, "distance"),
            (fare, "fare"),
            (lowest_fare, "lowest_fare"),
        ];
        for (value, field) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidFlightLeg {
                    message: format!("{field} must be a finite non-negative number, got {value}"),
                });
            }
        }

        Ok(Self {
            distance,
            fare,
            lowest_fare,
        })
    }
}

/// Directed half of a flight connection, stored on its source airport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: AirportId,
    pub leg: FlightLeg,
}

/// An airport vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    code: String,
    label: String,
    coordinates: Coordinates,
    edges: Vec<Edge>,
}

impl Airport {
    /// Unique airport code, e.g. `JFK`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Free-text city/state label, e.g. `New York City, NY (Metropolitan Area)`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// State abbreviation derived from the label.
    pub fn state(&self) -> Option<&'static str> {
        state_of(&self.label)
    }

    /// Region derived from the label's state abbreviation.
    pub fn region(&self) -> Option<Region> {
        region_of_label(&self.label)
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    fn edge_to_mut(&mut self, target: AirportId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|edge| edge.target == target)
    }

    fn set_edge(&mut self, target: AirportId, leg: FlightLeg) {
        match self.edge_to_mut(target) {
            Some(edge) => edge.leg = leg,
            None => self.edges.push(Edge { target, leg }),
        }
    }
}

/// Airport network built once during ingestion and queried read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    airports: Vec<Airport>,
    index: HashMap<String, AirportId>,
}

impl FlightGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an airport. Adding an already-known code is a no-op and
    /// returns the existing identifier; the first label and coordinates
    /// are kept.
    pub fn add_airport(
        &mut self,
        code: impl Into<String>,
        label: impl Into<String>,
        coordinates: Coordinates,
    ) -> AirportId {
        let code = code.into();
        if let Some(&id) = self.index.get(&code) {
            return id;
        }

        let id = self.airports.len();
        self.index.insert(code.clone(), id);
        self.airports.push(Airport {
            code,
            label: label.into(),
            coordinates,
            edges: Vec::new(),
        });
        id
    }

    /// Connect two registered airports, storing `leg` on both endpoints.
    ///
    /// Any existing connection between the same pair is overwritten in place,
    /// keeping its position in both adjacency lists.
    pub fn add_flight(&mut self, from: &str, to: &str, leg: FlightLeg) -> Result<()> {
        if from == to {
            return Err(Error::SelfLoop {
                code: from.to_string(),
            });
        }

        let a = self.endpoint(from)?;
        let b = self.endpoint(to)?;
        self.airports[a].set_edge(b, leg);
        self.airports[b].set_edge(a, leg);

        debug!(from, to, fare = leg.fare, distance = leg.distance, "added flight");
        Ok(())
    }

    fn endpoint(&self, code: &str) -> Result<AirportId> {
        self.id_of(code).ok_or_else(|| Error::InvalidEndpoint {
            code: code.to_string(),
        })
    }

    /// Whether `to` is a direct neighbour of `from`. Unknown codes yield `false`.
    pub fn adjacent(&self, from: &str, to: &str) -> bool {
        self.leg(from, to).is_some()
    }

    /// Attributes of the direct connection between two airports, if any.
    pub fn leg(&self, from: &str, to: &str) -> Option<FlightLeg> {
        let a = self.id_of(from)?;
        let b = self.id_of(to)?;
        self.airports[a]
            .edges
            .iter()
            .find(|edge| edge.target == b)
            .map(|edge| edge.leg)
    }

    /// Codes of all direct neighbours, in insertion order.
    pub fn neighbours(&self, code: &str) -> Result<Vec<&str>> {
        let airport = self.airport_by_id(self.resolve(code)?);
        Ok(airport
            .edges
            .iter()
            .map(|edge| self.airports[edge.target].code())
            .collect())
    }

    /// City/state label of an airport.
    pub fn city_of(&self, code: &str) -> Result<&str> {
        let id = self.resolve(code)?;
        Ok(self.airports[id].label())
    }

    /// Every registered airport code, sorted.
    pub fn all_codes(&self) -> BTreeSet<&str> {
        self.airports.iter().map(Airport::code).collect()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.id_of(code).map(|id| &self.airports[id])
    }

    pub fn id_of(&self, code: &str) -> Option<AirportId> {
        self.index.get(code).copied()
    }

    /// Airport stored at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this graph.
    pub fn airport_by_id(&self, id: AirportId) -> &Airport {
        &self.airports[id]
    }

    /// Resolve a code to its identifier, or fail with an
    /// [`Error::UnknownAirport`] carrying close matches.
    pub fn resolve(&self, code: &str) -> Result<AirportId> {
        self.id_of(code).ok_or_else(|| Error::UnknownAirport {
            code: code.to_string(),
            suggestions: self.fuzzy_code_matches(code, MAX_SUGGESTIONS),
        })
    }

    /// Registered codes most similar to `code`, best match first.
    pub fn fuzzy_code_matches(&self, code: &str, limit: usize) -> Vec<String> {
        let wanted = code.to_ascii_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .airports
            .iter()
            .map(|airport| {
                (
                    strsim::jaro_winkler(&wanted, &airport.code.to_ascii_uppercase()),
                    airport.code(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }

    /// All airports in registration order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }

    /// Number of registered airports.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Number of undirected flight connections.
    pub fn flight_count(&self) -> usize {
        self.airports.iter().map(Airport::degree).sum::<usize>() / 2
    }
}
