use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::bounding_box::BoundingBox;
use crate::identifier::GeometryFactory;
use crate::position::Position;

use super::ring::{path_intersects_area, paths_intersect};

/// A line connecting an ordered sequence of positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    identifier: String,
    coordinates: Vec<Position>,
}

impl LineString {
    /// Creates a line string with an identifier from the shared factory.
    pub fn with_coordinates<P: Into<Position>>(positions: Vec<P>) -> Self {
        GeometryFactory::shared().line_string(positions)
    }

    pub(crate) fn new(identifier: String, coordinates: Vec<Position>) -> Self {
        Self {
            identifier,
            coordinates,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub(crate) fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
    }

    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }

    pub fn coordinates_mut(&mut self) -> &mut Vec<Position> {
        &mut self.coordinates
    }

    pub fn set_coordinates(&mut self, coordinates: Vec<Position>) {
        self.coordinates = coordinates;
    }

    /// The envelope of all positions, recomputed on every call.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::with_positions(&self.coordinates)
    }

    pub fn bbox(&self) -> [f64; 4] {
        self.bounds().bbox()
    }

    /// Total great-circle length of the line in meters.
    pub fn length(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|segment| segment[0].distance(&segment[1]))
            .sum()
    }

    /// Checks if the first and last positions are equal.
    pub fn is_closed(&self) -> bool {
        self.coordinates.len() > 1 && self.coordinates.first() == self.coordinates.last()
    }

    pub fn intersects(&self, other: &LineString) -> bool {
        self.bounds().intersects(&other.bounds())
            && paths_intersect(&self.coordinates, &other.coordinates)
    }

    /// Checks if any part of this line lies inside the box, boundary included.
    pub fn intersects_bounds(&self, bounds: &BoundingBox) -> bool {
        let own = self.bounds();
        bounds.split_along_antimeridian().into_iter().any(|part| {
            own.intersects(part) && path_intersects_area(&self.coordinates, &part.coordinates())
        })
    }
}

impl GeometryFactory {
    /// Creates a line string with a fresh identifier.
    pub fn line_string<P: Into<Position>>(&self, positions: Vec<P>) -> LineString {
        LineString::new(
            self.next_identifier(),
            positions.into_iter().map(Into::into).collect(),
        )
    }
}

impl Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LINESTRING(")?;
        for (i, position) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", position.longitude, position.latitude)?;
        }
        write!(f, ")")
    }
}
