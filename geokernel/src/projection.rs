//! Map projections.
//!
//! Bounding boxes can be built from projected coordinates by passing a
//! [`Projection`] to [`BoundingBox::with_coordinates`](crate::BoundingBox::with_coordinates).
//! Only the inverse mapping is needed there; the forward mapping is provided
//! so callers can round-trip their own data.

use std::f64::consts::PI;

use crate::position::{to_degrees, to_radians};

/// A planar projection of geographic coordinates.
pub trait Projection: Send + Sync {
    /// Maps `[longitude, latitude]` in degrees to projected `[x, y]`.
    fn project_point(&self, point: [f64; 2]) -> [f64; 2];

    /// Maps projected `[x, y]` back to `[longitude, latitude]` in degrees.
    fn inverse_project_point(&self, point: [f64; 2]) -> [f64; 2];
}

/// Spherical Web Mercator (EPSG:3857), with coordinates in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WebMercator;

impl WebMercator {
    /// Equatorial radius used by Web Mercator in meters.
    pub const RADIUS: f64 = 6_378_137.0;
}

impl Projection for WebMercator {
    fn project_point(&self, point: [f64; 2]) -> [f64; 2] {
        let x = Self::RADIUS * to_radians(point[0]);
        let y = Self::RADIUS * (PI / 4.0 + to_radians(point[1]) / 2.0).tan().ln();
        [x, y]
    }

    fn inverse_project_point(&self, point: [f64; 2]) -> [f64; 2] {
        let longitude = to_degrees(point[0] / Self::RADIUS);
        let latitude = to_degrees(2.0 * (point[1] / Self::RADIUS).exp().atan() - PI / 2.0);
        [longitude, latitude]
    }
}
