use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{AirportId, FlightGraph, FlightLeg};

/// Edge attribute used as the weight by the shortest-path solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EdgeWeight {
    /// Average fare in USD.
    #[default]
    Fare,
    /// Distance in miles.
    Distance,
    /// Lowest advertised fare in USD.
    LowestFare,
}

impl EdgeWeight {
    /// Read this weight from a flight leg.
    pub fn of(self, leg: &FlightLeg) -> f64 {
        match self {
            EdgeWeight::Fare => leg.fare,
            EdgeWeight::Distance => leg.distance,
            EdgeWeight::LowestFare => leg.lowest_fare,
        }
    }

    /// Unit suffix used when rendering a total.
    pub fn unit(self) -> &'static str {
        match self {
            EdgeWeight::Fare | EdgeWeight::LowestFare => "USD",
            EdgeWeight::Distance => "miles",
        }
    }
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            EdgeWeight::Fare => "fare",
            EdgeWeight::Distance => "distance",
            EdgeWeight::LowestFare => "lowest_fare",
        };
        f.write_str(value)
    }
}

/// A path found by the solver together with its accumulated weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub weight: EdgeWeight,
    pub cost: f64,
    /// Airport codes from origin to destination, both inclusive.
    pub stops: Vec<String>,
}

impl Route {
    /// Number of flights taken.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn origin(&self) -> &str {
        &self.stops[0]
    }

    pub fn destination(&self) -> &str {
        &self.stops[self.stops.len() - 1]
    }
}

/// Lowest-weight path between two airports.
///
/// Entries are finalised lazily: an airport popped a second time is
/// discarded. Equal costs are ordered by airport code, then by push order, so
/// the result is deterministic for a fixed graph. Returns `None` when the
/// destination cannot be reached.
pub fn find_route(
    graph: &FlightGraph,
    origin: AirportId,
    destination: AirportId,
    weight: EdgeWeight,
) -> Option<(f64, Vec<AirportId>)> {
    let mut parents: HashMap<AirportId, Option<AirportId>> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut pushed = 0usize;

    queue.push(QueueEntry {
        cost: FloatOrd(0.0),
        code: graph.airport_by_id(origin).code(),
        node: origin,
        parent: None,
        seq: pushed,
    });

    while let Some(entry) = queue.pop() {
        if parents.contains_key(&entry.node) {
            continue;
        }
        parents.insert(entry.node, entry.parent);

        if entry.node == destination {
            return Some((entry.cost.0, reconstruct_path(&parents, destination)));
        }

        for edge in graph.airport_by_id(entry.node).edges() {
            if parents.contains_key(&edge.target) {
                continue;
            }
            pushed += 1;
            queue.push(QueueEntry {
                cost: FloatOrd(entry.cost.0 + weight.of(&edge.leg)),
                code: graph.airport_by_id(edge.target).code(),
                node: edge.target,
                parent: Some(entry.node),
                seq: pushed,
            });
        }
    }

    None
}

fn reconstruct_path(
    parents: &HashMap<AirportId, Option<AirportId>>,
    goal: AirportId,
) -> Vec<AirportId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

impl FlightGraph {
    /// Cheapest route by fare.
    pub fn shortest_cost_path(&self, origin: &str, destination: &str) -> Result<Option<Route>> {
        self.shortest_path(origin, destination, EdgeWeight::Fare)
    }

    /// Shortest route by distance.
    pub fn shortest_distance_path(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<Route>> {
        self.shortest_path(origin, destination, EdgeWeight::Distance)
    }

    /// Lowest-weight route under the chosen edge weight.
    ///
    /// Unknown codes are reported as [`crate::Error::UnknownAirport`]; an
    /// unreachable destination is `Ok(None)`.
    pub fn shortest_path(
        &self,
        origin: &str,
        destination: &str,
        weight: EdgeWeight,
    ) -> Result<Option<Route>> {
        let start = self.resolve(origin)?;
        let goal = self.resolve(destination)?;

        let route = find_route(self, start, goal, weight).map(|(cost, ids)| Route {
            weight,
            cost,
            stops: ids
                .into_iter()
                .map(|id| self.airport_by_id(id).code().to_string())
                .collect(),
        });

        debug!(
            origin,
            destination,
            %weight,
            found = route.is_some(),
            "computed shortest path"
        );
        Ok(route)
    }
}

/// Total ordering over `f64` for use in priority queues.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FloatOrd(pub(crate) f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    cost: FloatOrd,
    code: &'a str,
    node: AirportId,
    parent: Option<AirportId>,
    seq: usize,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.code.cmp(self.code))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinates;
    use crate::test_helpers::{add, four_airport_graph};

    #[test]
    fn cheapest_route_follows_fares() {
        let graph = four_airport_graph();
        let route = graph.shortest_cost_path("JFK", "LAX").unwrap().unwrap();

        // 80 + 120 via Atlanta beats 100 + 150 via Chicago.
        assert_eq!(route.stops, vec!["JFK", "ATL", "LAX"]);
        assert_eq!(route.cost, 200.0);
        assert_eq!(route.weight, EdgeWeight::Fare);
        assert_eq!(route.hop_count(), 2);
    }

    #[test]
    fn shortest_route_follows_distance() {
        let graph = four_airport_graph();
        let route = graph.shortest_distance_path("JFK", "LAX").unwrap().unwrap();

        assert_eq!(route.stops, vec!["JFK", "ORD", "LAX"]);
        assert_eq!(route.cost, 740.0 + 1745.0);
        assert_eq!(route.weight.unit(), "miles");
    }

    #[test]
    fn route_to_self_is_free() {
        let graph = four_airport_graph();
        for code in graph.all_codes() {
            let route = graph.shortest_cost_path(code, code).unwrap().unwrap();
            assert_eq!(route.cost, 0.0);
            assert_eq!(route.stops, vec![code.to_string()]);
        }
    }

    #[test]
    fn disconnected_destination_has_no_route() {
        let mut graph = four_airport_graph();
        graph.add_airport("HNL", "Honolulu, HI", Coordinates::new(21.32, -157.92));

        assert_eq!(graph.shortest_cost_path("JFK", "HNL").unwrap(), None);
        assert_eq!(graph.shortest_distance_path("HNL", "JFK").unwrap(), None);
    }

    #[test]
    fn unknown_codes_are_errors() {
        let graph = four_airport_graph();
        assert!(graph.shortest_cost_path("XXX", "JFK").is_err());
        assert!(graph.shortest_cost_path("JFK", "XXX").is_err());
    }

    #[test]
    fn equal_costs_break_ties_by_code() {
        let mut graph = FlightGraph::new();
        for code in ["AAA", "MMM", "BBB", "ZZZ"] {
            graph.add_airport(code, "Somewhere, TX", Coordinates::new(30.0, -97.0));
        }
        add(&mut graph, "AAA", "MMM", 10.0, 50.0);
        add(&mut graph, "AAA", "BBB", 10.0, 50.0);
        add(&mut graph, "MMM", "ZZZ", 10.0, 50.0);
        add(&mut graph, "BBB", "ZZZ", 10.0, 50.0);

        for _ in 0..5 {
            let route = graph.shortest_cost_path("AAA", "ZZZ").unwrap().unwrap();
            assert_eq!(route.stops, vec!["AAA", "BBB", "ZZZ"]);
            assert_eq!(route.cost, 100.0);
        }
    }

    #[test]
    fn lowest_fare_weight_reads_lowest_fare() {
        let mut graph = FlightGraph::new();
        graph.add_airport("AAA", "A, TX", Coordinates::new(30.0, -97.0));
        graph.add_airport("BBB", "B, TX", Coordinates::new(31.0, -97.0));
        graph
            .add_flight("AAA", "BBB", FlightLeg::new(100.0, 200.0, 75.0).unwrap())
            .unwrap();

        let route = graph
            .shortest_path("AAA", "BBB", EdgeWeight::LowestFare)
            .unwrap()
            .unwrap();
        assert_eq!(route.cost, 75.0);
    }
}
