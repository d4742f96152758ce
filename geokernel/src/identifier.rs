//! Geometry identifiers.
//!
//! Every geometry carries an identifier assigned once, when it is built, and
//! kept for its whole lifetime. Identifiers come from an
//! [`IdentifierGenerator`] held by a [`GeometryFactory`], so tests can swap
//! the random UUID source for a deterministic one.

use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

use uuid::Uuid;

use crate::geometry::Geometry;

/// Prefix distinguishing geometry identifiers from other identifier namespaces.
pub const IDENTIFIER_PREFIX: &str = "G";

static DEFAULT_FACTORY: LazyLock<GeometryFactory> = LazyLock::new(GeometryFactory::default);

/// A source of geometry identifiers.
pub trait IdentifierGenerator: Send + Sync {
    /// Returns a new identifier. Implementations must never return the same
    /// value twice.
    fn generate(&self) -> String;
}

/// Generates `G` followed by a random v4 UUID without dashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdentifierGenerator for UuidGenerator {
    fn generate(&self) -> String {
        format!("{}{}", IDENTIFIER_PREFIX, Uuid::new_v4().simple())
    }
}

/// Generates `G1`, `G2`, `G3`, ... in order.
#[derive(Debug, Default)]
pub struct SequentialGenerator {
    next: AtomicU64,
}

impl SequentialGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentifierGenerator for SequentialGenerator {
    fn generate(&self) -> String {
        let id = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", IDENTIFIER_PREFIX, id)
    }
}

/// Builds geometries with identifiers from a configured generator.
///
/// The factory is a cheap, cloneable handle; clones share the same generator.
/// [`GeometryFactory::default`] uses [`UuidGenerator`].
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use geokernel::{GeometryFactory, SequentialGenerator};
///
/// let factory = GeometryFactory::new(Arc::new(SequentialGenerator::new()));
/// let point = factory.point([1.0, 2.0]);
/// assert_eq!(point.identifier(), "G1");
/// ```
#[derive(Clone)]
pub struct GeometryFactory {
    generator: Arc<dyn IdentifierGenerator>,
}

impl GeometryFactory {
    /// Creates a factory drawing identifiers from the given generator.
    pub fn new(generator: Arc<dyn IdentifierGenerator>) -> Self {
        Self { generator }
    }

    /// Returns the process-wide factory used by the plain geometry constructors.
    pub fn shared() -> &'static GeometryFactory {
        &DEFAULT_FACTORY
    }

    /// Returns a new identifier from this factory's generator.
    pub fn next_identifier(&self) -> String {
        self.generator.generate()
    }

    /// Returns a copy of the geometry carrying fresh identifiers.
    ///
    /// Unlike [`Clone`], which keeps identifiers, every geometry in the copy,
    /// including the members of a collection, gets a new identifier.
    pub fn copy(&self, geometry: &Geometry) -> Geometry {
        let mut copy = geometry.clone();
        self.reassign(&mut copy);
        copy
    }

    fn reassign(&self, geometry: &mut Geometry) {
        geometry.set_identifier(self.next_identifier());
        if let Geometry::Collection(collection) = geometry {
            for member in collection.geometries_mut() {
                self.reassign(member);
            }
        }
    }
}

impl Default for GeometryFactory {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator))
    }
}

impl Debug for GeometryFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryFactory").finish_non_exhaustive()
    }
}
