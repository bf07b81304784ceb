//! Shared types for the city record model.
//!
//! These types define the persisted data shape. They must stay free of I/O
//! and serialize deterministically, since the JSON data file is the single
//! source of truth for the tool.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Great Work building types, each with a fixed occupant capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    Monument,
    Amphitheater,
    Cathedral,
    ArtMuseum,
    ArtifactMuseum,
    BroadcastCenter,
    Wonder,
    Palace,
}

impl BuildingKind {
    /// All kinds in declaration order. Drives default counters and listings.
    pub const ALL: [BuildingKind; 8] = [
        BuildingKind::Monument,
        BuildingKind::Amphitheater,
        BuildingKind::Cathedral,
        BuildingKind::ArtMuseum,
        BuildingKind::ArtifactMuseum,
        BuildingKind::BroadcastCenter,
        BuildingKind::Wonder,
        BuildingKind::Palace,
    ];

    /// Maximum number of Great Works the building can hold.
    pub fn max_occupants(self) -> i64 {
        match self {
            BuildingKind::Monument => 1,
            BuildingKind::Amphitheater => 2,
            BuildingKind::Cathedral => 1,
            BuildingKind::ArtMuseum => 3,
            BuildingKind::ArtifactMuseum => 3,
            BuildingKind::BroadcastCenter => 1,
            BuildingKind::Wonder => 100,
            BuildingKind::Palace => 1,
        }
    }

    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildingKind::Monument => "monument",
            BuildingKind::Amphitheater => "amphitheater",
            BuildingKind::Cathedral => "cathedral",
            BuildingKind::ArtMuseum => "art_museum",
            BuildingKind::ArtifactMuseum => "artifact_museum",
            BuildingKind::BroadcastCenter => "broadcast_center",
            BuildingKind::Wonder => "wonder",
            BuildingKind::Palace => "palace",
        }
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildingKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown building kind '{}'", s))
    }
}

/// Occupant count for a building that has not been built.
///
/// The data file stores every kind for every city; `-1` marks absence.
pub const UNBUILT: i64 = -1;

/// Occupant count per building kind. Every kind is always present.
pub type BuildingCounts = BTreeMap<BuildingKind, i64>;

/// Counter with every building kind at [`UNBUILT`].
pub fn default_building_counts() -> BuildingCounts {
    BuildingKind::ALL
        .into_iter()
        .map(|kind| (kind, UNBUILT))
        .collect()
}

/// Derived per-city highlight color for the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// No nearby cities recorded.
    Red,
    /// Nearby count at or above the average across all cities.
    Green,
    /// Nearby count below the average.
    Orange,
}

impl Highlight {
    pub fn as_str(self) -> &'static str {
        match self {
            Highlight::Red => "red",
            Highlight::Green => "green",
            Highlight::Orange => "orange",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked city: its nearby cities, building occupancy, and derived color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    /// Names of other cities close enough to share Great Work planning.
    pub neighbors: Vec<String>,
    pub buildings: BuildingCounts,
    pub highlight: Highlight,
}

impl CityRecord {
    /// Fresh record: no neighbors, nothing built, red until recolored.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbors: Vec::new(),
            buildings: default_building_counts(),
            highlight: Highlight::Red,
        }
    }
}
