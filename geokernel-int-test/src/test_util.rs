use geokernel::{
    BoundingBox, Feature, FeatureCollection, FeatureQuery, FeatureService, GeoError, GeoResult,
    GeometryFactory, Polygon, Position, SequentialGenerator,
};
use parking_lot::Mutex;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;

/// Query parameter holding a `[x_min, y_min, x_max, y_max]` filter for
/// [`MemoryFeatureService`].
pub const BBOX_PARAMETER: &str = "bbox";

/// A factory producing `G1`, `G2`, ... so tests can assert identifiers.
pub fn sequential_factory() -> GeometryFactory {
    GeometryFactory::new(Arc::new(SequentialGenerator::new()))
}

/// The closed ring of an axis-aligned rectangle, counter-clockwise from the
/// south-west corner.
pub fn rectangle(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Vec<Position> {
    vec![
        Position::new(x_min, y_min),
        Position::new(x_max, y_min),
        Position::new(x_max, y_max),
        Position::new(x_min, y_max),
        Position::new(x_min, y_min),
    ]
}

pub fn square(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Polygon {
    Polygon::with_coordinates(vec![rectangle(x_min, y_min, x_max, y_max)])
}

pub fn square_with_hole(outer: [f64; 4], hole: [f64; 4]) -> Polygon {
    Polygon::with_coordinates(vec![
        rectangle(outer[0], outer[1], outer[2], outer[3]),
        rectangle(hole[0], hole[1], hole[2], hole[3]),
    ])
}

pub fn random_position(rng: &mut impl Rng) -> Position {
    Position::new(
        rng.random_range(-180.0..=180.0),
        rng.random_range(-90.0..=90.0),
    )
}

pub fn random_positions(rng: &mut impl Rng, count: usize) -> Vec<Position> {
    (0..count).map(|_| random_position(rng)).collect()
}

/// A random box; roughly one in four wraps the antimeridian.
pub fn random_bounds(rng: &mut impl Rng) -> BoundingBox {
    let x_min = rng.random_range(-180.0..180.0);
    let x_max = if x_min > -179.0 && rng.random_bool(0.25) {
        rng.random_range(-180.0..x_min)
    } else {
        rng.random_range(x_min..=180.0)
    };
    let y_min = rng.random_range(-90.0..90.0);
    let y_max = rng.random_range(y_min..=90.0);
    BoundingBox::new(x_min, y_min, x_max, y_max)
}

/// An in-memory [`FeatureService`] holding one collection per layer.
///
/// Features are filtered by the optional [`BBOX_PARAMETER`]. Every query is
/// recorded for later inspection.
#[derive(Default)]
pub struct MemoryFeatureService {
    layers: HashMap<String, FeatureCollection>,
    queries: Mutex<Vec<FeatureQuery>>,
}

impl MemoryFeatureService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(mut self, name: &str, features: Vec<Feature>) -> Self {
        self.layers
            .insert(name.to_string(), FeatureCollection::with_features(features));
        self
    }

    pub fn queries(&self) -> Vec<FeatureQuery> {
        self.queries.lock().clone()
    }
}

impl FeatureService for MemoryFeatureService {
    fn fetch(&self, query: &FeatureQuery) -> GeoResult<FeatureCollection> {
        self.queries.lock().push(query.clone());

        let layer = self.layers.get(query.layer.name()).ok_or_else(|| {
            GeoError::Service(format!("Unknown layer: {}", query.layer.name()))
        })?;

        match query.criteria.parameters().get(BBOX_PARAMETER) {
            Some(value) => {
                let bbox: Vec<f64> = serde_json::from_value(value.clone())?;
                let bounds = BoundingBox::try_from(bbox.as_slice())?;
                Ok(layer.features_in(&bounds).into_iter().cloned().collect())
            }
            None => Ok(layer.clone()),
        }
    }
}
