//! Geographic helpers: coordinate pairs, compass directions and the parser for
//! the `"label (lat, lon)"` positional encoding used by the flight dataset.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Compass direction used by the furthest-airport query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Lenient conversion: anything other than `north`, `south` or `east`
    /// (case-insensitive) is treated as west.
    ///
    /// Use [`str::parse`] when unrecognised input should be rejected instead.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Direction::West)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// The coordinate component this direction moves along.
    pub fn axis(self, point: Coordinates) -> f64 {
        match self {
            Direction::North | Direction::South => point.latitude,
            Direction::East | Direction::West => point.longitude,
        }
    }

    /// Whether travelling further in this direction increases [`Direction::axis`].
    pub fn increases(self) -> bool {
        matches!(self, Direction::North | Direction::East)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            _ => Err(Error::UnknownDirection {
                name: s.to_string(),
            }),
        }
    }
}

/// Whether `point` lies strictly in `direction` relative to `origin`.
pub fn is_in_direction(origin: Coordinates, point: Coordinates, direction: Direction) -> bool {
    match direction {
        Direction::North => point.latitude > origin.latitude,
        Direction::South => point.latitude < origin.latitude,
        Direction::East => point.longitude > origin.longitude,
        Direction::West => point.longitude < origin.longitude,
    }
}

/// Extract the coordinate pair from a positional encoding such as
/// `"New York City, NY (Metropolitan Area)\n(40.123, -73.9)"`.
///
/// Only the text after the last `(` is considered, so parenthesised text inside
/// the label is ignored.
pub fn parse_geocode(value: &str) -> Result<Coordinates> {
    let invalid = || Error::InvalidGeocode {
        value: value.to_string(),
    };

    let (_, tail) = value.rsplit_once('(').ok_or_else(invalid)?;
    let tail = tail.trim().trim_end_matches(')');
    let (lat, lon) = tail.split_once(',').ok_or_else(invalid)?;

    let latitude: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let longitude: f64 = lon.trim().parse().map_err(|_| invalid())?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(invalid());
    }

    Ok(Coordinates::new(latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Coordinates = Coordinates::new(40.0, -75.0);

    #[test]
    fn direction_predicates_are_strict() {
        let north = Coordinates::new(41.0, -75.0);
        let east = Coordinates::new(40.0, -74.0);

        assert!(is_in_direction(ORIGIN, north, Direction::North));
        assert!(!is_in_direction(ORIGIN, north, Direction::South));
        assert!(is_in_direction(ORIGIN, east, Direction::East));
        assert!(!is_in_direction(ORIGIN, east, Direction::West));

        for direction in Direction::ALL {
            assert!(
                !is_in_direction(ORIGIN, ORIGIN, direction),
                "a point is never strictly {direction} of itself"
            );
        }
    }

    #[test]
    fn lenient_names_fall_back_to_west() {
        assert_eq!(Direction::from_name("North"), Direction::North);
        assert_eq!(Direction::from_name("EAST"), Direction::East);
        assert_eq!(Direction::from_name("up"), Direction::West);
        assert_eq!(Direction::from_name(""), Direction::West);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert_eq!("s".parse::<Direction>().unwrap(), Direction::South);
        let error = "sideways".parse::<Direction>().unwrap_err();
        assert!(error.to_string().contains("sideways"));
    }

    #[test]
    fn geocode_uses_last_parenthesis() {
        let coords =
            parse_geocode("New York City, NY (Metropolitan Area)\n(40.123456, -73.987654)")
                .expect("valid geocode");
        assert_eq!(coords, Coordinates::new(40.123456, -73.987654));
    }

    #[test]
    fn geocode_without_pair_is_rejected() {
        assert!(parse_geocode("Chicago, IL").is_err());
        assert!(parse_geocode("Chicago, IL (41.8)").is_err());
        assert!(parse_geocode("Chicago, IL (north, west)").is_err());
    }
}
