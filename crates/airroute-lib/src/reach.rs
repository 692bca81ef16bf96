//! Budget-bounded reachability: which airports can be visited from an origin
//! while spending less than a fare budget, optionally filtered by region or
//! reduced to the single furthest airport in a compass direction.
//!
//! The default [`ReachMode::FirstVisit`] walks the graph depth-first with one
//! visited set shared by the whole search. Each step spends the fare of the
//! flight taken, and an airport is entered only while budget remains
//! (`remaining > 0`). An airport is never re-entered, even if a cheaper route
//! to it is found later, so the result depends on the order in which flights
//! were added to the graph. The search keeps its own frame stack so deep
//! graphs cannot exhaust the call stack.
//!
//! [`ReachMode::CheapestFare`] instead admits every airport whose cheapest
//! fare from the origin leaves budget remaining.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::geo::{is_in_direction, Direction};
use crate::graph::{Airport, AirportId, FlightGraph};
use crate::path::FloatOrd;
use crate::region::Region;

/// Strategy used to decide which airports fall within a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReachMode {
    /// Depth-first walk with a shared visited set, in flight insertion order.
    #[default]
    FirstVisit,
    /// Every airport whose cheapest fare from the origin is under budget.
    CheapestFare,
}

/// Result of a furthest-in-direction query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "code")]
pub enum DirectionOutcome {
    /// Code of the furthest airport found.
    Found(String),
    /// No reachable airport lies in the requested direction.
    NoneInDirection,
}

impl DirectionOutcome {
    pub fn code(&self) -> Option<&str> {
        match self {
            DirectionOutcome::Found(code) => Some(code),
            DirectionOutcome::NoneInDirection => None,
        }
    }
}

/// A budget-bounded search rooted at one airport.
#[derive(Debug, Clone, Copy)]
pub struct BudgetSearch<'g> {
    graph: &'g FlightGraph,
    origin: AirportId,
    budget: f64,
    mode: ReachMode,
}

impl<'g> BudgetSearch<'g> {
    pub fn new(graph: &'g FlightGraph, origin: AirportId, budget: f64) -> Self {
        Self {
            graph,
            origin,
            budget,
            mode: ReachMode::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ReachMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ReachMode {
        self.mode
    }

    /// Call `visit` once for every airport the search enters, in entry order.
    /// Nothing is visited when the budget is not positive.
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&'g Airport),
    {
        if self.budget.is_nan() || self.budget <= 0.0 {
            return;
        }

        match self.mode {
            ReachMode::FirstVisit => self.walk_first_visit(visit),
            ReachMode::CheapestFare => self.walk_cheapest_fare(visit),
        }
    }

    fn walk_first_visit<F>(&self, mut visit: F)
    where
        F: FnMut(&'g Airport),
    {
        let graph = self.graph;
        let mut visited = vec![false; graph.len()];
        let mut stack = vec![Frame {
            node: self.origin,
            remaining: self.budget,
            next_edge: 0,
        }];
        visited[self.origin] = true;
        visit(graph.airport_by_id(self.origin));

        while let Some(frame) = stack.last_mut() {
            let edges = graph.airport_by_id(frame.node).edges();
            let Some(edge) = edges.get(frame.next_edge) else {
                stack.pop();
                continue;
            };
            frame.next_edge += 1;

            if visited[edge.target] {
                continue;
            }
            let remaining = frame.remaining - edge.leg.fare;
            if remaining <= 0.0 {
                continue;
            }

            visited[edge.target] = true;
            visit(graph.airport_by_id(edge.target));
            stack.push(Frame {
                node: edge.target,
                remaining,
                next_edge: 0,
            });
        }
    }

    fn walk_cheapest_fare<F>(&self, mut visit: F)
    where
        F: FnMut(&'g Airport),
    {
        let graph = self.graph;
        let mut settled = vec![false; graph.len()];
        let mut queue = BinaryHeap::new();
        queue.push(Reverse((
            FloatOrd(0.0),
            graph.airport_by_id(self.origin).code(),
            self.origin,
        )));

        while let Some(Reverse((spent, _, node))) = queue.pop() {
            if settled[node] {
                continue;
            }
            if self.budget - spent.0 <= 0.0 {
                // Fares are non-negative, so every remaining entry costs at least as much.
                break;
            }
            settled[node] = true;
            let airport = graph.airport_by_id(node);
            visit(airport);

            for edge in airport.edges() {
                if !settled[edge.target] {
                    queue.push(Reverse((
                        FloatOrd(spent.0 + edge.leg.fare),
                        graph.airport_by_id(edge.target).code(),
                        edge.target,
                    )));
                }
            }
        }
    }

    /// Codes of every airport within budget, the origin included.
    pub fn airports(&self) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        self.for_each(|airport| {
            found.insert(airport.code().to_string());
        });
        found
    }

    /// Codes of airports within budget whose city lies in `region`.
    pub fn in_region(&self, region: Region) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        self.for_each(|airport| {
            if airport.region() == Some(region) {
                found.insert(airport.code().to_string());
            }
        });
        found
    }

    /// The airport within budget that lies furthest in `direction`, measured
    /// against the origin's own coordinates.
    ///
    /// Ties on latitude/longitude go to the alphabetically first code.
    pub fn furthest(&self, direction: Direction) -> DirectionOutcome {
        let origin = self.graph.airport_by_id(self.origin).coordinates();
        let mut best: Option<&Airport> = None;

        self.for_each(|airport| {
            if !is_in_direction(origin, airport.coordinates(), direction) {
                return;
            }
            let replace = match best {
                None => true,
                Some(current) => is_further(airport, current, direction),
            };
            if replace {
                best = Some(airport);
            }
        });

        match best {
            Some(airport) => DirectionOutcome::Found(airport.code().to_string()),
            None => DirectionOutcome::NoneInDirection,
        }
    }
}

fn is_further(candidate: &Airport, current: &Airport, direction: Direction) -> bool {
    let a = direction.axis(candidate.coordinates());
    let b = direction.axis(current.coordinates());
    let ordering = if direction.increases() {
        a.total_cmp(&b)
    } else {
        b.total_cmp(&a)
    };
    ordering.then_with(|| current.code().cmp(candidate.code())) == std::cmp::Ordering::Greater
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: AirportId,
    remaining: f64,
    next_edge: usize,
}

impl FlightGraph {
    /// Start a budget-bounded search from `origin`.
    pub fn budget_search(&self, origin: &str, budget: f64) -> Result<BudgetSearch<'_>> {
        let origin = self.resolve(origin)?;
        Ok(BudgetSearch::new(self, origin, budget))
    }

    /// Codes of all airports reachable from `origin` within `budget`.
    pub fn reachable_by_budget(&self, origin: &str, budget: f64) -> Result<BTreeSet<String>> {
        let found = self.budget_search(origin, budget)?.airports();
        debug!(origin, budget, count = found.len(), "budget reachability");
        Ok(found)
    }

    /// Codes of reachable airports located in `region`.
    pub fn reachable_by_budget_and_region(
        &self,
        origin: &str,
        budget: f64,
        region: Region,
    ) -> Result<BTreeSet<String>> {
        let found = self.budget_search(origin, budget)?.in_region(region);
        debug!(origin, budget, %region, count = found.len(), "region reachability");
        Ok(found)
    }

    /// The reachable airport furthest in `direction` from `origin`.
    pub fn furthest_in_direction(
        &self,
        origin: &str,
        budget: f64,
        direction: Direction,
    ) -> Result<DirectionOutcome> {
        let outcome = self.budget_search(origin, budget)?.furthest(direction);
        debug!(origin, budget, %direction, ?outcome, "furthest in direction");
        Ok(outcome)
    }
}
