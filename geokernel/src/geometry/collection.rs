use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::bounding_box::BoundingBox;
use crate::identifier::GeometryFactory;

use super::Geometry;

/// An ordered collection of heterogeneous geometries.
///
/// Predicates delegate to the members: the collection intersects something
/// when any member does.
///
/// Like every other geometry it serializes as `identifier` plus
/// `coordinates`; for a collection the coordinates are the member geometries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    identifier: String,
    #[serde(rename = "coordinates")]
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Creates a collection with an identifier from the shared factory.
    pub fn with_geometries(geometries: Vec<Geometry>) -> Self {
        GeometryFactory::shared().collection(geometries)
    }

    pub(crate) fn new(identifier: String, geometries: Vec<Geometry>) -> Self {
        Self {
            identifier,
            geometries,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub(crate) fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn geometries_mut(&mut self) -> &mut Vec<Geometry> {
        &mut self.geometries
    }

    pub fn push(&mut self, geometry: Geometry) {
        self.geometries.push(geometry);
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// The union of the members' bounds; empty for an empty collection.
    pub fn bounds(&self) -> BoundingBox {
        self.geometries
            .iter()
            .fold(BoundingBox::empty(), |acc, geometry| {
                acc.union(&geometry.bounds())
            })
    }

    pub fn bbox(&self) -> [f64; 4] {
        self.bounds().bbox()
    }

    pub fn intersects(&self, other: &Geometry) -> bool {
        self.geometries.iter().any(|member| member.intersects(other))
    }

    pub fn intersects_bounds(&self, bounds: &BoundingBox) -> bool {
        self.geometries
            .iter()
            .any(|member| member.intersects_bounds(bounds))
    }
}

impl GeometryFactory {
    /// Creates a geometry collection with a fresh identifier.
    pub fn collection(&self, geometries: Vec<Geometry>) -> GeometryCollection {
        GeometryCollection::new(self.next_identifier(), geometries)
    }
}

impl Display for GeometryCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GEOMETRYCOLLECTION(")?;
        for (i, geometry) in self.geometries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", geometry)?;
        }
        write!(f, ")")
    }
}
