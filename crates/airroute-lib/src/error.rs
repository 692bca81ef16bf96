use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the airroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge references an airport code that was never added.
    #[error("cannot connect {code}: airport is not registered in the graph")]
    InvalidEndpoint { code: String },

    /// Raised when an edge would connect an airport to itself.
    #[error("cannot connect {code} to itself")]
    SelfLoop { code: String },

    /// Raised when edge attributes are negative or not finite.
    #[error("invalid flight leg: {message}")]
    InvalidFlightLeg { message: String },

    /// Raised when an airport code could not be found in the graph.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a route summary is requested for a route without stops.
    #[error("route was empty")]
    EmptyRoute,

    /// Raised when a region name does not match any of the nine known regions.
    #[error("unknown region: {name}")]
    UnknownRegion { name: String },

    /// Raised when a direction is not one of north, south, east or west.
    #[error("unknown direction: {name}; expected north, south, east or west")]
    UnknownDirection { name: String },

    /// Raised when a positional encoding does not contain a `(lat, lon)` pair.
    #[error("invalid geocode: {value:?}")]
    InvalidGeocode { value: String },

    /// Raised when a flight record cannot be converted into graph data.
    #[error("invalid flight record on line {line}: {message}")]
    InvalidFlightRecord { line: u64, message: String },

    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset location")]
    ProjectDirsUnavailable,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_airport_without_suggestions() {
        let error = Error::UnknownAirport {
            code: "XYZ".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(error.to_string(), "unknown airport code: XYZ");
    }

    #[test]
    fn unknown_airport_lists_suggestions() {
        let error = Error::UnknownAirport {
            code: "JFX".to_string(),
            suggestions: vec!["JFK".to_string(), "JAX".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "unknown airport code: JFX. Did you mean one of: 'JFK', 'JAX'?"
        );
    }
}
