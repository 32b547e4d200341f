use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the globe in degrees. Longitude range (-180, 180], latitude [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// One venue record: identity, seating capacity and location.
/// Immutable once loaded; the caller-owned collection holds its records
/// for the lifetime of a single program invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub seats: u32,
    pub location: Coordinate,
}

impl Venue {
    pub fn new(name: impl Into<String>, seats: u32, longitude: f64, latitude: f64) -> Self {
        Self {
            name: name.into(),
            seats,
            location: Coordinate::new(longitude, latitude),
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, seats: {}, latitude: {:.3}, longitude: {:.3}",
            self.name, self.seats, self.location.latitude, self.location.longitude
        )
    }
}
