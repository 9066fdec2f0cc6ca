use crate::math::geometry::euclidean;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an emergency site, used only for naming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    /// Hospital
    Hospital,
    /// Fire station
    FireStation,
    /// Emergency shelter
    EmergencyShelter,
    /// Police station
    PoliceStation,
}

impl SiteKind {
    /// Every kind, in the order the generator samples from
    pub const ALL: [Self; 4] = [
        Self::Hospital,
        Self::FireStation,
        Self::EmergencyShelter,
        Self::PoliceStation,
    ];

    /// Human-readable label used in site names
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hospital => "Hospital",
            Self::FireStation => "Fire Station",
            Self::EmergencyShelter => "Emergency Shelter",
            Self::PoliceStation => "Police Station",
        }
    }
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single emergency site on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Position of the site within its dataset
    pub id: usize,
    /// Display name, e.g. `Hospital 1`
    pub name: String,
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Site {
    /// Create a site named after its kind and 1-based number
    pub fn new(id: usize, kind: SiteKind, x: f64, y: f64) -> Self {
        Self {
            id,
            name: format!("{kind} {}", id + 1),
            x,
            y,
        }
    }

    /// Coordinates as an `(x, y)` pair
    pub const fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Whether both coordinates are finite numbers
    pub const fn has_valid_coordinates(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another site
    pub fn distance_to(&self, other: &Self) -> f64 {
        euclidean(self.position(), other.position())
    }
}
