//! Geographic positions.
//!
//! A [`Position`] is a `(longitude, latitude)` pair in degrees. It is the
//! coordinate type every geometry in this crate is built from and it follows
//! the GeoJSON axis order: longitude first.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt::{self, Display};

use crate::errors::GeoError;

/// Earth's mean radius in meters (WGS84)
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

const DEGREES_TO_RADIANS: f64 = PI / 180.0;
const RADIANS_TO_DEGREES: f64 = 180.0 / PI;

/// Converts a value in degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * DEGREES_TO_RADIANS
}

/// Converts a value in radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians * RADIANS_TO_DEGREES
}

/// A geographic coordinate pair.
///
/// Equality is exact: two positions are equal only when both components are
/// bit-for-bit equal floating point values. On the wire a position is the
/// two-element array `[longitude, latitude]`.
///
/// # Example
///
/// ```rust
/// use geokernel::Position;
///
/// let berlin = Position::new(13.405, 52.52);
/// assert_eq!(berlin.longitude, 13.405);
/// assert_eq!(berlin.latitude, 52.52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

impl Position {
    /// Creates a new position from a longitude and a latitude in degrees.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Calculates the great-circle distance to another position in meters.
    ///
    /// Uses the Haversine formula on a spherical earth. The result is
    /// symmetric and zero for identical positions.
    pub fn distance(&self, other: &Position) -> f64 {
        let lat1 = to_radians(self.latitude);
        let lat2 = to_radians(other.latitude);
        let delta_lat = to_radians(other.latitude - self.latitude);
        let delta_lon = to_radians(other.longitude - self.longitude);

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_METERS * c
    }
}

impl From<[f64; 2]> for Position {
    fn from(value: [f64; 2]) -> Self {
        Position::new(value[0], value[1])
    }
}

/// Accepts GeoJSON positions; values past the second (altitude) are ignored.
impl TryFrom<Vec<f64>> for Position {
    type Error = GeoError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [longitude, latitude, ..] => Ok(Position::new(*longitude, *latitude)),
            _ => Err(GeoError::InvalidGeometry(format!(
                "A position requires at least 2 values, got {}",
                values.len()
            ))),
        }
    }
}

impl From<Position> for [f64; 2] {
    fn from(position: Position) -> Self {
        [position.longitude, position.latitude]
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}
