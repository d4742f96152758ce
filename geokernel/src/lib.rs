//! # geokernel
//!
//! A small GeoJSON-style geometry kernel: positions, bounding boxes that
//! understand the antimeridian, points, line strings, polygons with holes
//! and collections of them, plus features and a pluggable feature source.
//!
//! ## Bounding boxes
//!
//! A [`BoundingBox`] whose `x_min` is greater than its `x_max` wraps the
//! antimeridian. Box intersection and feature tests split such boxes into
//! two non-wrapping halves first; the halves are memoized until the box is
//! mutated.
//!
//! ```rust
//! use geokernel::BoundingBox;
//!
//! let pacific = BoundingBox::new(170.0, -10.0, -170.0, 10.0);
//! assert!(pacific.wraps_antimeridian());
//! assert_eq!(pacific.split_along_antimeridian().len(), 2);
//! assert!(pacific.intersects(&BoundingBox::new(175.0, -1.0, 176.0, 1.0)));
//! assert!(pacific.intersects(&BoundingBox::new(-176.0, -1.0, -175.0, 1.0)));
//! assert!(!pacific.intersects(&BoundingBox::new(0.0, -1.0, 1.0, 1.0)));
//! ```
//!
//! ## Geometries
//!
//! Every geometry carries an identifier generated by a [`GeometryFactory`].
//! Bounds are always computed from the current coordinates, so edits made
//! through the mutable accessors are reflected immediately.
//!
//! ```rust
//! use geokernel::{Geometry, Polygon};
//!
//! let square = Polygon::with_coordinates(vec![vec![
//!     [0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0],
//! ]]);
//! assert_eq!(square.bbox(), [0.0, 0.0, 10.0, 10.0]);
//!
//! let geometry = Geometry::from(square);
//! assert!(geometry.identifier().starts_with('G'));
//! ```

pub mod bounding_box;
pub mod delegate;
pub mod errors;
pub mod feature;
pub mod geometry;
pub mod identifier;
pub mod position;
pub mod projection;

pub use bounding_box::{BoundingBox, ANTIMERIDIAN_LIMIT, EARTH, MAX_MERCATOR_LATITUDE};
pub use delegate::{Criteria, FeatureDelegate, FeatureQuery, FeatureService, Layer};
pub use errors::{GeoError, GeoResult};
pub use feature::{Feature, FeatureCollection};
pub use geometry::{parse_geojson, Geometry, GeometryCollection, LineString, Point, Polygon};
pub use identifier::{GeometryFactory, IdentifierGenerator, SequentialGenerator, UuidGenerator};
pub use position::{to_degrees, to_radians, Position, EARTH_RADIUS_METERS};
pub use projection::{Projection, WebMercator};
