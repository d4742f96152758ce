use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::bounding_box::BoundingBox;
use crate::identifier::GeometryFactory;
use crate::position::Position;

/// A geometry made of a single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    identifier: String,
    coordinates: Position,
}

impl Point {
    /// Creates a point with an identifier from the shared factory.
    pub fn with_coordinates(position: impl Into<Position>) -> Self {
        GeometryFactory::shared().point(position)
    }

    pub(crate) fn new(identifier: String, coordinates: Position) -> Self {
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

    pub fn coordinates(&self) -> &Position {
        &self.coordinates
    }

    pub fn set_coordinates(&mut self, position: impl Into<Position>) {
        self.coordinates = position.into();
    }

    /// The zero-area box at this point.
    pub fn bounds(&self) -> BoundingBox {
        let Position {
            longitude,
            latitude,
        } = self.coordinates;
        BoundingBox::new(longitude, latitude, longitude, latitude)
    }

    pub fn bbox(&self) -> [f64; 4] {
        self.bounds().bbox()
    }

    /// Checks if this point lies inside the box, boundary included.
    pub fn intersects_bounds(&self, bounds: &BoundingBox) -> bool {
        bounds
            .split_along_antimeridian()
            .into_iter()
            .any(|part| part.contains(&self.coordinates))
    }
}

impl GeometryFactory {
    /// Creates a point with a fresh identifier.
    pub fn point(&self, position: impl Into<Position>) -> Point {
        Point::new(self.next_identifier(), position.into())
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "POINT({} {})",
            self.coordinates.longitude, self.coordinates.latitude
        )
    }
}
