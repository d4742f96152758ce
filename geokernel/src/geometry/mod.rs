//! Geometry types.
//!
//! [`Geometry`] is the closed set of shapes the kernel understands. Every
//! operation dispatches through a single `match` over the variants:
//! - [`Point`] - a single position
//! - [`LineString`] - an ordered sequence of positions
//! - [`Polygon`] - an outer ring with optional holes
//! - [`GeometryCollection`] - heterogeneous members, predicates delegate to them
//!
//! Every geometry owns its coordinates and carries an identifier assigned by a
//! [`GeometryFactory`] when it is built. Bounds are derived from the current
//! coordinates on every call.

mod collection;
mod line_string;
mod point;
mod polygon;
mod ring;

pub use collection::GeometryCollection;
pub use line_string::LineString;
pub use point::Point;
pub use polygon::Polygon;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt::{self, Display};

use crate::bounding_box::BoundingBox;
use crate::errors::{GeoError, GeoResult};
use crate::identifier::GeometryFactory;
use crate::position::Position;

use ring::{areas_intersect, path_intersects_area, paths_intersect, point_on_path};

/// Any geometry supported by the kernel.
///
/// Serialized with a `type` tag next to each variant's `identifier` and
/// `coordinates`. A collection's `coordinates` are its member geometries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    #[serde(rename = "GeometryCollection")]
    Collection(GeometryCollection),
}

impl Geometry {
    /// The GeoJSON type name of this geometry.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::Collection(_) => "GeometryCollection",
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Geometry::Point(g) => g.identifier(),
            Geometry::LineString(g) => g.identifier(),
            Geometry::Polygon(g) => g.identifier(),
            Geometry::Collection(g) => g.identifier(),
        }
    }

    pub(crate) fn set_identifier(&mut self, identifier: String) {
        match self {
            Geometry::Point(g) => g.set_identifier(identifier),
            Geometry::LineString(g) => g.set_identifier(identifier),
            Geometry::Polygon(g) => g.set_identifier(identifier),
            Geometry::Collection(g) => g.set_identifier(identifier),
        }
    }

    /// The envelope of this geometry, computed from its current coordinates.
    ///
    /// The returned box is an independent value; mutating it does not touch
    /// the geometry.
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Geometry::Point(g) => g.bounds(),
            Geometry::LineString(g) => g.bounds(),
            Geometry::Polygon(g) => g.bounds(),
            Geometry::Collection(g) => g.bounds(),
        }
    }

    pub fn bbox(&self) -> [f64; 4] {
        self.bounds().bbox()
    }

    /// Checks if this geometry shares any point with another geometry.
    ///
    /// Boundary contact counts as intersection. Collections intersect when
    /// any member does.
    pub fn intersects(&self, other: &Geometry) -> bool {
        match (self, other) {
            (Geometry::Collection(c), _) => c.intersects(other),
            (_, Geometry::Collection(c)) => c.intersects(self),
            _ if !self.bounds().intersects(&other.bounds()) => false,
            (Geometry::Point(a), Geometry::Point(b)) => a.coordinates() == b.coordinates(),
            (Geometry::Point(p), Geometry::LineString(l))
            | (Geometry::LineString(l), Geometry::Point(p)) => {
                point_on_path(p.coordinates(), l.coordinates())
            }
            (Geometry::Point(p), Geometry::Polygon(polygon))
            | (Geometry::Polygon(polygon), Geometry::Point(p)) => polygon.contains(p.coordinates()),
            (Geometry::LineString(a), Geometry::LineString(b)) => {
                paths_intersect(a.coordinates(), b.coordinates())
            }
            (Geometry::LineString(l), Geometry::Polygon(polygon))
            | (Geometry::Polygon(polygon), Geometry::LineString(l)) => {
                path_intersects_area(l.coordinates(), polygon.coordinates())
            }
            (Geometry::Polygon(a), Geometry::Polygon(b)) => {
                areas_intersect(a.coordinates(), b.coordinates())
            }
        }
    }

    /// Checks if any part of this geometry lies inside the box.
    ///
    /// Boxes wrapping the antimeridian are split before testing.
    pub fn intersects_bounds(&self, bounds: &BoundingBox) -> bool {
        match self {
            Geometry::Point(g) => g.intersects_bounds(bounds),
            Geometry::LineString(g) => g.intersects_bounds(bounds),
            Geometry::Polygon(g) => g.intersects_bounds(bounds),
            Geometry::Collection(g) => g.intersects_bounds(bounds),
        }
    }

    /// Converts this geometry into a GeoJSON geometry object.
    ///
    /// A `bbox` member is included unless the geometry is empty.
    /// Identifiers are not part of GeoJSON and are left out.
    pub fn to_geojson(&self) -> Value {
        let mut object = match self {
            Geometry::Point(g) => json!({"type": "Point", "coordinates": g.coordinates()}),
            Geometry::LineString(g) => {
                json!({"type": "LineString", "coordinates": g.coordinates()})
            }
            Geometry::Polygon(g) => json!({"type": "Polygon", "coordinates": g.coordinates()}),
            Geometry::Collection(g) => json!({
                "type": "GeometryCollection",
                "geometries": g.geometries().iter().map(Geometry::to_geojson).collect::<Vec<_>>(),
            }),
        };
        let bounds = self.bounds();
        if !bounds.is_empty() {
            object["bbox"] = json!(bounds.bbox());
        }
        object
    }

    /// Builds a geometry from a GeoJSON geometry object.
    ///
    /// Supports `Point`, `LineString`, `Polygon` and `GeometryCollection`.
    /// Identifiers come from the given factory. Polygon rings must be closed
    /// and have at least four positions.
    pub fn from_geojson(value: &Value, factory: &GeometryFactory) -> GeoResult<Geometry> {
        let object = value.as_object().ok_or_else(|| {
            GeoError::InvalidGeometry("A GeoJSON geometry must be an object".to_string())
        })?;
        let kind = object.get("type").and_then(Value::as_str).ok_or_else(|| {
            GeoError::InvalidGeometry("A GeoJSON geometry requires a type".to_string())
        })?;

        match kind {
            "Point" => {
                let position: Position = read_member(object, "coordinates")?;
                Ok(Geometry::Point(factory.point(position)))
            }
            "LineString" => {
                let positions: Vec<Position> = read_member(object, "coordinates")?;
                Ok(Geometry::LineString(factory.line_string(positions)))
            }
            "Polygon" => {
                let rings: Vec<Vec<Position>> = read_member(object, "coordinates")?;
                let polygon = factory.polygon(rings);
                polygon.validate()?;
                Ok(Geometry::Polygon(polygon))
            }
            "GeometryCollection" => {
                let members = object
                    .get("geometries")
                    .and_then(Value::as_array)
                    .ok_or_else(|| {
                        GeoError::InvalidGeometry(
                            "A GeometryCollection requires a geometries array".to_string(),
                        )
                    })?;
                let geometries = members
                    .iter()
                    .map(|member| Geometry::from_geojson(member, factory))
                    .collect::<GeoResult<Vec<_>>>()?;
                Ok(Geometry::Collection(factory.collection(geometries)))
            }
            other => Err(GeoError::InvalidGeometry(format!(
                "Unsupported GeoJSON geometry type: {}",
                other
            ))),
        }
    }
}

fn read_member<T: DeserializeOwned>(object: &Map<String, Value>, name: &str) -> GeoResult<T> {
    let member = object
        .get(name)
        .ok_or_else(|| GeoError::InvalidGeometry(format!("Missing GeoJSON member: {}", name)))?;
    Ok(T::deserialize(member)?)
}

/// Parses a GeoJSON geometry string using the shared [`GeometryFactory`].
///
/// # Example
///
/// ```rust
/// let geometry = geokernel::parse_geojson(r#"{"type":"Point","coordinates":[1.0,2.0]}"#).unwrap();
/// assert_eq!(geometry.bbox(), [1.0, 2.0, 1.0, 2.0]);
/// ```
pub fn parse_geojson(json: &str) -> GeoResult<Geometry> {
    let value: Value = serde_json::from_str(json)?;
    Geometry::from_geojson(&value, GeometryFactory::shared())
}

impl Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Point(g) => write!(f, "{}", g),
            Geometry::LineString(g) => write!(f, "{}", g),
            Geometry::Polygon(g) => write!(f, "{}", g),
            Geometry::Collection(g) => write!(f, "{}", g),
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::Collection(value)
    }
}
