use std::collections::BTreeSet;
use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::{Coordinates, Direction};
use crate::graph::{Airport, FlightGraph};
use crate::path::{EdgeWeight, Route};
use crate::reach::{DirectionOutcome, ReachMode};
use crate::region::Region;

/// Presentation style for turning a summary into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// One line per stop with running totals.
    #[default]
    PlainText,
    /// Codes joined by arrows on a single line.
    Compact,
}

/// Airport details resolved for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AirportSummary {
    pub code: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbours: Option<Vec<String>>,
}

impl AirportSummary {
    pub fn from_airport(airport: &Airport) -> Self {
        Self {
            code: airport.code().to_string(),
            city: airport.label().to_string(),
            state: airport.state(),
            region: airport.region(),
            coordinates: airport.coordinates(),
            neighbours: None,
        }
    }

    /// Look up `code` and include its direct neighbours.
    pub fn with_neighbours(graph: &FlightGraph, code: &str) -> Result<Self> {
        let airport = graph.airport_by_id(graph.resolve(code)?);
        let neighbours = graph
            .neighbours(code)?
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok(Self {
            neighbours: Some(neighbours),
            ..Self::from_airport(airport)
        })
    }

    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{} - {}", self.code, self.city);
        let _ = writeln!(buffer, "  state:       {}", self.state.unwrap_or("unknown"));
        let _ = writeln!(
            buffer,
            "  region:      {}",
            self.region.map_or("unknown", Region::name)
        );
        let _ = writeln!(buffer, "  coordinates: {}", self.coordinates);
        if let Some(neighbours) = &self.neighbours {
            let _ = writeln!(buffer, "  neighbours:  {}", neighbours.join(", "));
        }
        buffer
    }
}

/// Stop along a route with the weight accumulated so far.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub code: String,
    pub city: String,
    /// Weight of the flight into this stop; absent for the origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg: Option<f64>,
    pub cumulative: f64,
}

/// Structured representation of a route that presentation layers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub weight: EdgeWeight,
    pub unit: &'static str,
    pub hops: usize,
    pub total: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary with resolved city labels and
    /// per-leg weights.
    pub fn from_route(graph: &FlightGraph, route: &Route) -> Result<Self> {
        if route.stops.is_empty() {
            return Err(Error::EmptyRoute);
        }

        let mut steps = Vec::with_capacity(route.stops.len());
        let mut cumulative = 0.0;
        let mut previous: Option<&str> = None;
        for (index, code) in route.stops.iter().enumerate() {
            let leg = previous
                .and_then(|from| graph.leg(from, code))
                .map(|leg| route.weight.of(&leg));
            cumulative += leg.unwrap_or(0.0);
            steps.push(RouteStep {
                index,
                code: code.clone(),
                city: graph.city_of(code)?.to_string(),
                leg,
                cumulative,
            });
            previous = Some(code);
        }

        Ok(Self {
            weight: route.weight,
            unit: route.weight.unit(),
            hops: route.hop_count(),
            total: route.cost,
            steps,
        })
    }

    pub fn origin(&self) -> &RouteStep {
        &self.steps[0]
    }

    pub fn destination(&self) -> &RouteStep {
        &self.steps[self.steps.len() - 1]
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route by {}: {} -> {} ({} flights, total {} {})",
            self.weight,
            self.origin().code,
            self.destination().code,
            self.hops,
            format_amount(self.total),
            self.unit
        );
        for step in &self.steps {
            let _ = write!(buffer, "{:>3}: {} ({})", step.index, step.code, step.city);
            if let Some(leg) = step.leg {
                let _ = write!(
                    buffer,
                    " +{} [{}]",
                    format_amount(leg),
                    format_amount(step.cumulative)
                );
            }
            buffer.push('\n');
        }
        buffer
    }

    fn render_compact(&self) -> String {
        let joined = self
            .steps
            .iter()
            .map(|step| step.code.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!(
            "{joined} ({} {})\n",
            format_amount(self.total),
            self.unit
        )
    }
}

/// Airports found by a budget-bounded search.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReachSummary {
    pub origin: String,
    pub budget: f64,
    pub mode: ReachMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    pub airports: Vec<AirportSummary>,
}

impl ReachSummary {
    pub fn new(
        graph: &FlightGraph,
        origin: &str,
        budget: f64,
        mode: ReachMode,
        region: Option<Region>,
        codes: &BTreeSet<String>,
    ) -> Self {
        let airports = codes
            .iter()
            .filter_map(|code| graph.airport(code))
            .map(AirportSummary::from_airport)
            .collect();
        Self {
            origin: origin.to_string(),
            budget,
            mode,
            region,
            airports,
        }
    }

    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let scope = self
            .region
            .map(|region| format!(" in {region}"))
            .unwrap_or_default();
        if self.airports.is_empty() {
            let _ = writeln!(
                buffer,
                "No airports{scope} reachable from {} with {} USD.",
                self.origin,
                format_amount(self.budget)
            );
            return buffer;
        }

        let _ = writeln!(
            buffer,
            "{} airports{scope} reachable from {} with {} USD:",
            self.airports.len(),
            self.origin,
            format_amount(self.budget)
        );
        for airport in &self.airports {
            let _ = writeln!(buffer, "  {} - {}", airport.code, airport.city);
        }
        buffer
    }
}

/// Outcome of a furthest-in-direction query with the winning airport resolved.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FurthestSummary {
    pub origin: String,
    pub budget: f64,
    pub direction: Direction,
    pub mode: ReachMode,
    pub outcome: DirectionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airport: Option<AirportSummary>,
}

impl FurthestSummary {
    pub fn new(
        graph: &FlightGraph,
        origin: &str,
        budget: f64,
        direction: Direction,
        mode: ReachMode,
        outcome: DirectionOutcome,
    ) -> Self {
        let airport = outcome
            .code()
            .and_then(|code| graph.airport(code))
            .map(AirportSummary::from_airport);
        Self {
            origin: origin.to_string(),
            budget,
            direction,
            mode,
            outcome,
            airport,
        }
    }

    pub fn render(&self) -> String {
        match &self.airport {
            Some(airport) => format!(
                "Furthest airport {} of {} within {} USD: {} - {} {}\n",
                self.direction,
                self.origin,
                format_amount(self.budget),
                airport.code,
                airport.city,
                airport.coordinates
            ),
            None => format!(
                "Sorry, there is no airport {} of {} within {} USD.\n",
                self.direction,
                self.origin,
                format_amount(self.budget)
            ),
        }
    }
}

/// Format an amount with at most two decimals, dropping a trailing `.00`.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{value:.2}");
    match rounded.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => rounded,
    }
}
