use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::sync::{LazyLock, OnceLock};

use crate::errors::{GeoError, GeoResult};
use crate::feature::Feature;
use crate::geometry::Geometry;
use crate::position::Position;
use crate::projection::Projection;

/// Longitude used for the antimeridian edge of a split bounding box.
pub const ANTIMERIDIAN_LIMIT: f64 = 179.99999;

/// The Web-Mercator-safe latitude limit.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.05112878;

/// The full globe, clamped to the Web Mercator latitude range.
pub static EARTH: LazyLock<BoundingBox> = LazyLock::new(|| {
    BoundingBox::new(-180.0, -MAX_MERCATOR_LATITUDE, 180.0, MAX_MERCATOR_LATITUDE)
});

/// An area defined by two longitudes and two latitudes.
///
/// `BoundingBox` is an axis-aligned rectangle in longitude/latitude space. A
/// box whose `x_min` is greater than its `x_max` wraps the antimeridian: it
/// covers `[x_min, 180]` and `[-180, x_max]`. Every predicate resolves such
/// boxes through [`split_along_antimeridian`](Self::split_along_antimeridian)
/// before doing ordinary rectangle arithmetic.
///
/// The split is computed lazily and cached; every mutating method clears the
/// cache, so derived values always reflect the current bounds.
///
/// On the wire a bounding box is the GeoJSON `bbox` array
/// `[x_min, y_min, x_max, y_max]`.
///
/// # Examples
///
/// ```rust
/// use geokernel::{BoundingBox, Position};
///
/// let bounds = BoundingBox::with_coordinates(0.0, 0.0, 10.0, 10.0, None);
/// assert!(bounds.contains(&Position::new(5.0, 5.0)));
/// assert!(!bounds.contains(&Position::new(11.0, 5.0)));
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
    split: OnceLock<Box<[BoundingBox; 2]>>,
}

impl BoundingBox {
    /// Creates a bounding box from geographic bounds.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> BoundingBox {
        BoundingBox {
            x_min,
            y_min,
            x_max,
            y_max,
            split: OnceLock::new(),
        }
    }

    /// Creates the degenerate box that contains nothing.
    ///
    /// Its minimums are `+∞` and its maximums `-∞`, so extending it by any
    /// position yields the box around that single position.
    pub fn empty() -> BoundingBox {
        BoundingBox::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        )
    }

    /// Returns a clone of [`EARTH`].
    pub fn earth() -> BoundingBox {
        EARTH.clone()
    }

    /// Creates a bounding box from its four bounds.
    ///
    /// When a projection is supplied the inputs are projected coordinates and
    /// the south-west and north-east corners are run through
    /// [`Projection::inverse_project_point`] before being stored.
    pub fn with_coordinates(
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
        projection: Option<&dyn Projection>,
    ) -> BoundingBox {
        let (minimums, maximums) = match projection {
            Some(projection) => (
                projection.inverse_project_point([x_min, y_min]),
                projection.inverse_project_point([x_max, y_max]),
            ),
            None => ([x_min, y_min], [x_max, y_max]),
        };
        BoundingBox::new(minimums[0], minimums[1], maximums[0], maximums[1])
    }

    /// Creates a bounding box from a `[x_min, y_min, x_max, y_max]` array.
    pub fn with_bbox(bbox: [f64; 4], projection: Option<&dyn Projection>) -> BoundingBox {
        BoundingBox::with_coordinates(bbox[0], bbox[1], bbox[2], bbox[3], projection)
    }

    /// Creates the envelope of a sequence of positions.
    pub fn with_positions(positions: &[Position]) -> BoundingBox {
        let mut bounds = BoundingBox::empty();
        bounds.set_with_positions(positions);
        bounds
    }

    /// The minimum longitude.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// The minimum latitude.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// The maximum longitude.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// The maximum latitude.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Sets the minimum longitude and clears the cached antimeridian split.
    ///
    /// # Arguments
    ///
    /// * `x` - The new minimum longitude in degrees
    pub fn set_x_min(&mut self, x: f64) {
        self.x_min = x;
        self.invalidate();
    }

    /// Sets the minimum latitude and clears the cached antimeridian split.
    ///
    /// # Arguments
    ///
    /// * `y` - The new minimum latitude in degrees
    pub fn set_y_min(&mut self, y: f64) {
        self.y_min = y;
        self.invalidate();
    }

    /// Sets the maximum longitude and clears the cached antimeridian split.
    ///
    /// # Arguments
    ///
    /// * `x` - The new maximum longitude in degrees
    pub fn set_x_max(&mut self, x: f64) {
        self.x_max = x;
        self.invalidate();
    }

    /// Sets the maximum latitude and clears the cached antimeridian split.
    ///
    /// # Arguments
    ///
    /// * `y` - The new maximum latitude in degrees
    pub fn set_y_max(&mut self, y: f64) {
        self.y_max = y;
        self.invalidate();
    }

    /// The GeoJSON bbox array: the south-westerly axes followed by the
    /// north-easterly axes.
    pub fn bbox(&self) -> [f64; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }

    /// Replaces all four bounds from a `[x_min, y_min, x_max, y_max]` array.
    pub fn set_bbox(&mut self, bbox: [f64; 4]) {
        self.x_min = bbox[0];
        self.y_min = bbox[1];
        self.x_max = bbox[2];
        self.y_max = bbox[3];
        self.invalidate();
    }

    /// The four corners of this box: `(x_min, y_min)`, `(x_min, y_max)`,
    /// `(x_max, y_min)`, `(x_max, y_max)`.
    pub fn positions(&self) -> [Position; 4] {
        [
            Position::new(self.x_min, self.y_min),
            Position::new(self.x_min, self.y_max),
            Position::new(self.x_max, self.y_min),
            Position::new(self.x_max, self.y_max),
        ]
    }

    /// This box as polygon coordinates: a single closed ring starting and
    /// ending at the south-west corner.
    pub fn coordinates(&self) -> Vec<Vec<Position>> {
        let south_west = Position::new(self.x_min, self.y_min);
        let north_west = Position::new(self.x_min, self.y_max);
        let north_east = Position::new(self.x_max, self.y_max);
        let south_east = Position::new(self.x_max, self.y_min);
        vec![vec![south_west, north_west, north_east, south_east, south_west]]
    }

    /// Returns true for boxes that contain no position, such as the envelope
    /// of an empty position sequence.
    pub fn is_empty(&self) -> bool {
        self.y_min > self.y_max || self.y_min.is_nan() || self.y_max.is_nan()
    }

    /// Returns true if this box crosses the antimeridian.
    pub fn wraps_antimeridian(&self) -> bool {
        self.x_min > self.x_max
    }

    /// Checks whether the position lies within this box, boundary included.
    pub fn contains(&self, position: &Position) -> bool {
        let lng = position.longitude;
        let lat = position.latitude;
        lng <= self.x_max && lng >= self.x_min && lat <= self.y_max && lat >= self.y_min
    }

    /// Checks whether either coordinate of the position equals one of the
    /// four bounds exactly.
    pub fn is_on_boundary(&self, position: &Position) -> bool {
        let lng = position.longitude;
        let lat = position.latitude;
        self.x_min == lng || self.x_max == lng || self.y_min == lat || self.y_max == lat
    }

    /// Checks whether the feature's geometry intersects this box.
    ///
    /// For geometry collections a single intersecting member is enough. A
    /// feature without geometry is never contained.
    pub fn contains_feature(&self, feature: &Feature) -> bool {
        let Some(geometry) = feature.geometry() else {
            return false;
        };
        self.split_along_antimeridian()
            .into_iter()
            .any(|bounds| match geometry {
                Geometry::Collection(collection) => collection
                    .geometries()
                    .iter()
                    .any(|member| member.intersects_bounds(bounds)),
                _ => geometry.intersects_bounds(bounds),
            })
    }

    /// Checks whether this box overlaps another box, boundary included.
    ///
    /// Both boxes are split along the antimeridian first; the boxes intersect
    /// if any pair of split parts overlaps.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        let other_splits = other.split_along_antimeridian();
        self.split_along_antimeridian().into_iter().any(|this| {
            other_splits.iter().any(|other| {
                other.x_max >= this.x_min
                    && other.x_min <= this.x_max
                    && other.y_max >= this.y_min
                    && other.y_min <= this.y_max
            })
        })
    }

    /// The area of this box in square meters.
    ///
    /// This is a planar approximation: the great-circle length of the western
    /// edge times the great-circle length of the southern edge.
    pub fn area(&self) -> f64 {
        let south_west = Position::new(self.x_min, self.y_min);
        let north_west = Position::new(self.x_min, self.y_max);
        let south_east = Position::new(self.x_max, self.y_min);
        let height = south_west.distance(&north_west);
        let width = south_west.distance(&south_east);
        height * width
    }

    /// Widens this box by the minimum amount needed to contain the position.
    pub fn extend(&mut self, position: &Position) {
        let lng = position.longitude;
        let lat = position.latitude;
        let mut changed = false;
        if self.x_min > lng {
            self.x_min = lng;
            changed = true;
        }
        if self.x_max < lng {
            self.x_max = lng;
            changed = true;
        }
        if self.y_min > lat {
            self.y_min = lat;
            changed = true;
        }
        if self.y_max < lat {
            self.y_max = lat;
            changed = true;
        }
        if changed {
            self.invalidate();
        }
    }

    /// Recomputes all four bounds as the envelope of the positions.
    ///
    /// An empty sequence leaves the degenerate box of [`BoundingBox::empty`].
    pub fn set_with_positions(&mut self, positions: &[Position]) {
        let mut x_min = f64::INFINITY;
        let mut y_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for position in positions {
            x_min = x_min.min(position.longitude);
            x_max = x_max.max(position.longitude);
            y_min = y_min.min(position.latitude);
            y_max = y_max.max(position.latitude);
        }
        self.set_bbox([x_min, y_min, x_max, y_max]);
    }

    /// Returns the smallest box covering both boxes.
    ///
    /// Wrapping boxes are treated by their raw bounds, so the union of a
    /// wrapping box is only meaningful when the caller has split it first.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.x_min.min(other.x_min),
            self.y_min.min(other.y_min),
            self.x_max.max(other.x_max),
            self.y_max.max(other.y_max),
        )
    }

    /// Splits this box into boxes that do not cross the antimeridian.
    ///
    /// A box with `x_min <= x_max` is returned unchanged as the only element.
    /// A wrapping box becomes `[x_min, y_min, 179.99999, y_max]` and
    /// `[-179.99999, y_min, x_max, y_max]`. The halves are cached until the
    /// box is next mutated.
    pub fn split_along_antimeridian(&self) -> Vec<&BoundingBox> {
        if !self.wraps_antimeridian() {
            return vec![self];
        }
        let halves = self.split.get_or_init(|| {
            log::trace!("Splitting {} along the antimeridian", self);
            Box::new([
                BoundingBox::new(self.x_min, self.y_min, ANTIMERIDIAN_LIMIT, self.y_max),
                BoundingBox::new(-ANTIMERIDIAN_LIMIT, self.y_min, self.x_max, self.y_max),
            ])
        });
        halves.iter().collect()
    }

    fn invalidate(&mut self) {
        self.split.take();
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        BoundingBox::empty()
    }
}

/// Exact, field-wise equality. No tolerance is applied.
impl PartialEq for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.x_min == other.x_min
                && self.y_min == other.y_min
                && self.x_max == other.x_max
                && self.y_max == other.y_max)
    }
}

impl Debug for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundingBox")
            .field("x_min", &self.x_min)
            .field("y_min", &self.y_min)
            .field("x_max", &self.x_max)
            .field("y_max", &self.y_max)
            .finish()
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBox({}, {}, {}, {})",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(bbox: [f64; 4]) -> Self {
        BoundingBox::with_bbox(bbox, None)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bounds: BoundingBox) -> Self {
        bounds.bbox()
    }
}

impl TryFrom<&[f64]> for BoundingBox {
    type Error = GeoError;

    fn try_from(bbox: &[f64]) -> GeoResult<Self> {
        let bbox: [f64; 4] = bbox.try_into().map_err(|_| {
            GeoError::InvalidGeometry(format!(
                "A bbox must have exactly 4 values, got {}",
                bbox.len()
            ))
        })?;
        Ok(BoundingBox::from(bbox))
    }
}
