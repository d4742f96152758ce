//! Features wrap a geometry together with attribute data.

use serde_json::{json, Map, Value};

use crate::bounding_box::BoundingBox;
use crate::errors::{GeoError, GeoResult};
use crate::geometry::Geometry;
use crate::identifier::GeometryFactory;

/// A geometry plus free-form properties, as in a GeoJSON `Feature`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    id: Option<String>,
    geometry: Option<Geometry>,
    properties: Map<String, Value>,
}

impl Feature {
    /// Creates a feature without id or properties.
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            id: None,
            geometry: Some(geometry.into()),
            properties: Map::new(),
        }
    }

    /// Sets the feature id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a property, replacing any previous value of that name.
    ///
    /// # Arguments
    ///
    /// * `name` - The property name
    /// * `value` - Any JSON value
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// The feature id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The feature geometry, `None` for a feature without location.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Replaces the geometry; `None` removes it.
    pub fn set_geometry(&mut self, geometry: Option<Geometry>) {
        self.geometry = geometry;
    }

    /// The attribute data of this feature.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Mutable access to the attribute data.
    pub fn properties_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.properties
    }

    /// The bounds of the geometry, empty when there is none.
    pub fn bounds(&self) -> BoundingBox {
        self.geometry
            .as_ref()
            .map_or_else(BoundingBox::empty, Geometry::bounds)
    }

    /// Converts this feature into a GeoJSON `Feature` object.
    ///
    /// The `id` member is written only when the feature has one.
    pub fn to_geojson(&self) -> Value {
        let mut object = json!({
            "type": "Feature",
            "geometry": self.geometry.as_ref().map(Geometry::to_geojson),
            "properties": self.properties,
        });
        if let Some(id) = &self.id {
            object["id"] = json!(id);
        }
        object
    }

    /// Builds a feature from a GeoJSON `Feature` object.
    ///
    /// A `null` geometry is accepted. Numeric ids are kept in their textual
    /// form.
    pub fn from_geojson(value: &Value, factory: &GeometryFactory) -> GeoResult<Feature> {
        let object = expect_type(value, "Feature")?;
        let geometry = match object.get("geometry") {
            None | Some(Value::Null) => None,
            Some(geometry) => Some(Geometry::from_geojson(geometry, factory)?),
        };
        let properties = match object.get("properties") {
            Some(Value::Object(properties)) => properties.clone(),
            None | Some(Value::Null) => Map::new(),
            Some(_) => {
                return Err(GeoError::InvalidGeometry(
                    "Feature properties must be an object".to_string(),
                ))
            }
        };
        let id = match object.get("id") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        };
        Ok(Feature {
            id,
            geometry,
            properties,
        })
    }
}

/// An ordered set of features.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates a collection holding the given features in order.
    pub fn with_features(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// The features in insertion order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Appends a feature.
    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// The number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the collection holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The union of all feature bounds.
    pub fn bounds(&self) -> BoundingBox {
        self.features
            .iter()
            .fold(BoundingBox::empty(), |acc, feature| acc.union(&feature.bounds()))
    }

    /// The features whose geometry intersects the box.
    pub fn features_in(&self, bounds: &BoundingBox) -> Vec<&Feature> {
        self.features
            .iter()
            .filter(|feature| bounds.contains_feature(feature))
            .collect()
    }

    /// Converts this collection into a GeoJSON `FeatureCollection` object.
    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": self.features.iter().map(Feature::to_geojson).collect::<Vec<_>>(),
        })
    }

    /// Builds a collection from a GeoJSON `FeatureCollection` object.
    ///
    /// # Arguments
    ///
    /// * `value` - The parsed GeoJSON object
    /// * `factory` - Assigns identifiers to the parsed geometries
    ///
    /// # Returns
    ///
    /// The collection, or [`GeoError::InvalidGeometry`] if any member is malformed
    pub fn from_geojson(value: &Value, factory: &GeometryFactory) -> GeoResult<FeatureCollection> {
        let object = expect_type(value, "FeatureCollection")?;
        let features = object
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                GeoError::InvalidGeometry(
                    "A FeatureCollection requires a features array".to_string(),
                )
            })?
            .iter()
            .map(|feature| Feature::from_geojson(feature, factory))
            .collect::<GeoResult<Vec<_>>>()?;
        Ok(FeatureCollection { features })
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        FeatureCollection::with_features(iter.into_iter().collect())
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

fn expect_type<'a>(value: &'a Value, expected: &str) -> GeoResult<&'a Map<String, Value>> {
    let object = value
        .as_object()
        .ok_or_else(|| GeoError::InvalidGeometry(format!("A {} must be an object", expected)))?;
    match object.get("type").and_then(Value::as_str) {
        Some(kind) if kind == expected => Ok(object),
        other => Err(GeoError::InvalidGeometry(format!(
            "Expected type {}, got {:?}",
            expected, other
        ))),
    }
}
