//! U.S. census-style regions and the state-abbreviation lookup used to place
//! an airport's city label into one of them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// One of the nine named geographic groupings of states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Pacific,
    Mountain,
    WestNorthCentral,
    EastNorthCentral,
    WestSouthCentral,
    EastSouthCentral,
    SouthAtlantic,
    MidAtlantic,
    NewEngland,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Region::Pacific,
        Region::Mountain,
        Region::WestNorthCentral,
        Region::EastNorthCentral,
        Region::WestSouthCentral,
        Region::EastSouthCentral,
        Region::SouthAtlantic,
        Region::MidAtlantic,
        Region::NewEngland,
    ];

    /// Display name, e.g. `"West North Central"`.
    pub fn name(self) -> &'static str {
        match self {
            Region::Pacific => "Pacific",
            Region::Mountain => "Mountain",
            Region::WestNorthCentral => "West North Central",
            Region::EastNorthCentral => "East North Central",
            Region::WestSouthCentral => "West South Central",
            Region::EastSouthCentral => "East South Central",
            Region::SouthAtlantic => "South Atlantic",
            Region::MidAtlantic => "Mid-Atlantic",
            Region::NewEngland => "New England",
        }
    }

    /// State abbreviations belonging to this region.
    pub fn states(self) -> &'static [&'static str] {
        match self {
            Region::Pacific => &["CA", "OR", "WA", "AK", "HI"],
            Region::Mountain => &["NV", "ID", "MT", "WY", "UT", "CO", "AZ", "NM"],
            Region::WestNorthCentral => &["ND", "SD", "NE", "KS", "MN", "IA", "MO"],
            Region::EastNorthCentral => &["WI", "MI", "IL", "IN", "OH"],
            Region::WestSouthCentral => &["OK", "TX", "AR", "LA"],
            Region::EastSouthCentral => &["KY", "TN", "MS", "AL"],
            Region::SouthAtlantic => &["DE", "MD", "DC", "VA", "WV", "NC", "SC", "GA", "FL"],
            Region::MidAtlantic => &["NY", "NJ", "PA"],
            Region::NewEngland => &["ME", "NH", "VT", "MA", "RI", "CT"],
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for Region {
    type Err = Error;

    /// Case-insensitive; spaces, hyphens and underscores are interchangeable,
    /// so `"mid atlantic"`, `"Mid-Atlantic"` and `"MidAtlantic"` all match.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Region::ALL
            .into_iter()
            .find(|region| normalize(region.name()) == wanted)
            .ok_or_else(|| Error::UnknownRegion {
                name: s.to_string(),
            })
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Recognised state abbreviations, in the order they are tried against a city
/// label. The first one contained in the label wins.
pub const STATE_ABBREVIATIONS: [&str; 51] = [
    "CA", "OR", "WA", "AK", "HI", "NV", "ID", "MT", "WY", "UT", "CO", "AZ", "NM", "ND", "SD", "NE",
    "KS", "MN", "IA", "MO", "WI", "MI", "IL", "IN", "OH", "CT", "OK", "TX", "AR", "LA", "KY", "TN",
    "MS", "AL", "DE", "MD", "DC", "VA", "WV", "NC", "SC", "GA", "FL", "NY", "NJ", "PA", "ME", "NH",
    "VT", "MA", "RI",
];

static STATE_TO_REGION: Lazy<HashMap<&'static str, Region>> = Lazy::new(|| {
    Region::ALL
        .into_iter()
        .flat_map(|region| region.states().iter().map(move |state| (*state, region)))
        .collect()
});

/// Extract the state abbreviation from a free-text city label such as
/// `"Chicago, IL"`. Returns `None` when no recognised abbreviation occurs.
pub fn state_of(label: &str) -> Option<&'static str> {
    STATE_ABBREVIATIONS
        .into_iter()
        .find(|abbr| label.contains(*abbr))
}

/// Region containing the given state abbreviation.
pub fn region_of_state(abbr: &str) -> Option<Region> {
    STATE_TO_REGION.get(abbr).copied()
}

/// Region derived from a city label via its state abbreviation.
pub fn region_of_label(label: &str) -> Option<Region> {
    state_of(label).and_then(region_of_state)
}
