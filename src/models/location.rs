// Location and City models for points in the plane

use crate::models::{CityId, Distance};
use serde::{Deserialize, Serialize};

/// Represents a location with (x, y) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    /// Creates a new location with the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the (unrounded) Euclidean distance between two locations
    pub fn distance_to(&self, other: &Location) -> Distance {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A city: its index in `[0, N)` and where it sits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// Index of the city within its instance
    pub id: CityId,

    /// Planar position, fixed once generated
    pub location: Location,
}

impl City {
    pub fn new(id: CityId, location: Location) -> Self {
        Self { id, location }
    }
}
