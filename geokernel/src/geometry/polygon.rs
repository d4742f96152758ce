use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::bounding_box::BoundingBox;
use crate::errors::{GeoError, GeoResult};
use crate::identifier::GeometryFactory;
use crate::position::Position;

use super::ring::{areas_intersect, point_in_area};

/// A polygon with an outer boundary and optional holes.
///
/// `coordinates` is a sequence of rings: ring 0 is the outer boundary and
/// rings 1..N are holes. Each ring is closed (first position equals last).
///
/// The bounding box is a view over the outer ring, recomputed on every read,
/// so it stays correct however the rings are mutated. Holes never enlarge it.
///
/// # Examples
///
/// ```rust
/// use geokernel::{Polygon, Position};
///
/// let mut polygon = Polygon::with_coordinates(vec![
///     vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]],
/// ]);
/// assert_eq!(polygon.bbox(), [0.0, 0.0, 10.0, 10.0]);
///
/// polygon.coordinates_mut()[0][1] = Position::new(0.0, 20.0);
/// assert_eq!(polygon.bbox(), [0.0, 0.0, 10.0, 20.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    identifier: String,
    coordinates: Vec<Vec<Position>>,
}

impl Polygon {
    /// Creates a polygon with an identifier from the shared factory.
    pub fn with_coordinates<P: Into<Position>>(rings: Vec<Vec<P>>) -> Self {
        GeometryFactory::shared().polygon(rings)
    }

    pub(crate) fn new(identifier: String, coordinates: Vec<Vec<Position>>) -> Self {
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

    pub fn coordinates(&self) -> &[Vec<Position>] {
        &self.coordinates
    }

    /// Mutable access to the rings. The bounding box reflects any change on
    /// its next read.
    pub fn coordinates_mut(&mut self) -> &mut Vec<Vec<Position>> {
        &mut self.coordinates
    }

    pub fn set_coordinates(&mut self, coordinates: Vec<Vec<Position>>) {
        self.coordinates = coordinates;
    }

    /// The outer boundary, if the polygon has any ring.
    pub fn outer_ring(&self) -> Option<&[Position]> {
        self.coordinates.first().map(Vec::as_slice)
    }

    /// The interior rings.
    pub fn holes(&self) -> &[Vec<Position>] {
        self.coordinates.get(1..).unwrap_or_default()
    }

    /// The envelope of the outer ring.
    ///
    /// A polygon without rings yields the degenerate [`BoundingBox::empty`].
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::with_positions(self.outer_ring().unwrap_or_default())
    }

    pub fn bbox(&self) -> [f64; 4] {
        self.bounds().bbox()
    }

    /// Checks if the position lies in the polygon's solid area: inside or on
    /// the outer ring and not strictly inside a hole.
    pub fn contains(&self, position: &Position) -> bool {
        point_in_area(position, &self.coordinates)
    }

    /// Checks if this polygon shares any point with another polygon.
    ///
    /// Touching boundaries count as intersecting. A polygon lying entirely
    /// inside a hole of the other, without touching the hole's ring, does not
    /// intersect it.
    pub fn intersects(&self, other: &Polygon) -> bool {
        if !self.bounds().intersects(&other.bounds()) {
            return false;
        }
        let result = areas_intersect(&self.coordinates, &other.coordinates);
        log::trace!(
            "Polygon {} intersects {}: {}",
            self.identifier,
            other.identifier,
            result
        );
        result
    }

    /// Checks if any part of this polygon lies inside the box.
    pub fn intersects_bounds(&self, bounds: &BoundingBox) -> bool {
        let own = self.bounds();
        bounds.split_along_antimeridian().into_iter().any(|part| {
            own.intersects(part) && areas_intersect(&self.coordinates, &part.coordinates())
        })
    }

    /// Checks that every ring is closed and has at least four positions.
    pub fn validate(&self) -> GeoResult<()> {
        for (index, ring) in self.coordinates.iter().enumerate() {
            if ring.len() < 4 {
                return Err(GeoError::InvalidGeometry(format!(
                    "Polygon ring {} requires at least 4 positions, got {}",
                    index,
                    ring.len()
                )));
            }
            if ring.first() != ring.last() {
                return Err(GeoError::InvalidGeometry(format!(
                    "Polygon ring {} must be closed",
                    index
                )));
            }
        }
        Ok(())
    }
}

impl GeometryFactory {
    /// Creates a polygon with a fresh identifier.
    pub fn polygon<P: Into<Position>>(&self, rings: Vec<Vec<P>>) -> Polygon {
        let coordinates = rings
            .into_iter()
            .map(|ring| ring.into_iter().map(Into::into).collect())
            .collect();
        Polygon::new(self.next_identifier(), coordinates)
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POLYGON(")?;
        for (i, ring) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "(")?;
            for (j, position) in ring.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} {}", position.longitude, position.latitude)?;
            }
            write!(f, ")")?;
        }
        write!(f, ")")
    }
}
