//! Fetching features from a backing data service.
//!
//! The kernel does not query data stores itself. A [`FeatureDelegate`] hands
//! a validated [`FeatureQuery`] to whatever [`FeatureService`] has been
//! configured, and resolves to an empty [`FeatureCollection`] when none has.

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use crate::errors::{GeoError, GeoResult};
use crate::feature::FeatureCollection;

/// Name of the query parameter carrying the layer name.
pub const LAYER_PARAMETER: &str = "layer";

/// A filter expression with named parameters.
///
/// The expression syntax belongs to the service that evaluates it; the
/// delegate only requires it to be non-blank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Criteria {
    expression: String,
    parameters: Map<String, Value>,
}

impl Criteria {
    /// Creates criteria with the given expression and no parameters.
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            parameters: Map::new(),
        }
    }

    /// Adds a named parameter, replacing any previous value of that name.
    ///
    /// # Arguments
    ///
    /// * `name` - The parameter name referenced by the expression
    /// * `value` - Any JSON value
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// The filter expression, passed to the service untouched.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The named parameters of the expression.
    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    /// Checks that the criteria can be sent to a service.
    pub fn validate(&self) -> GeoResult<()> {
        if self.expression.trim().is_empty() {
            return Err(GeoError::InvalidCriteria(format!(
                "A valid criteria was not provided. ({})",
                self
            )));
        }
        Ok(())
    }
}

impl Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Criteria({:?}, {})", self.expression, Value::Object(self.parameters.clone()))
    }
}

/// A named data set features are fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layer {
    name: String,
}

impl Layer {
    /// Creates a handle for the named layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The layer name, also sent as the `layer` query parameter.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The request passed to a [`FeatureService`].
///
/// Its parameters are the criteria's parameters plus
/// [`LAYER_PARAMETER`] set to the layer name.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureQuery {
    pub criteria: Criteria,
    pub layer: Layer,
}

impl FeatureQuery {
    fn new(criteria: &Criteria, layer: &Layer) -> Self {
        let criteria = criteria
            .clone()
            .with_parameter(LAYER_PARAMETER, layer.name.clone());
        Self {
            criteria,
            layer: layer.clone(),
        }
    }
}

/// A backing data service able to answer feature queries.
pub trait FeatureService: Send + Sync {
    /// Returns the features matching the query.
    ///
    /// # Returns
    ///
    /// The matching features, or [`GeoError::Service`] when the backing store
    /// fails.
    fn fetch(&self, query: &FeatureQuery) -> GeoResult<FeatureCollection>;
}

/// Routes feature fetches to the configured [`FeatureService`].
///
/// # Examples
///
/// ```rust
/// use geokernel::{Criteria, FeatureDelegate, Layer};
///
/// let delegate = FeatureDelegate::new();
/// let features = delegate
///     .fetch_features_with_criteria_and_layer(&Criteria::new("true"), &Layer::new("roads"))
///     .unwrap();
/// assert!(features.is_empty());
/// ```
#[derive(Default)]
pub struct FeatureDelegate {
    service: RwLock<Option<Arc<dyn FeatureService>>>,
}

impl FeatureDelegate {
    /// Creates a delegate with no backing service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a delegate backed by the given service.
    pub fn with_service(service: Arc<dyn FeatureService>) -> Self {
        Self {
            service: RwLock::new(Some(service)),
        }
    }

    /// Replaces the backing service; `None` removes it.
    pub fn set_service(&self, service: Option<Arc<dyn FeatureService>>) {
        *self.service.write() = service;
    }

    /// Returns true if a backing service is configured.
    pub fn has_service(&self) -> bool {
        self.service.read().is_some()
    }

    /// Fetches the features of `layer` matching `criteria`.
    ///
    /// Without a configured service this resolves to an empty collection.
    /// Otherwise a blank criteria expression is rejected with
    /// [`GeoError::InvalidCriteria`] before the service is called.
    pub fn fetch_features_with_criteria_and_layer(
        &self,
        criteria: &Criteria,
        layer: &Layer,
    ) -> GeoResult<FeatureCollection> {
        let Some(service) = self.service.read().clone() else {
            log::debug!(
                "No feature service configured, returning no features for layer {}",
                layer.name
            );
            return Ok(FeatureCollection::default());
        };

        criteria.validate()?;

        let query = FeatureQuery::new(criteria, layer);
        log::debug!("Fetching features for layer {} with {}", layer.name, query.criteria);
        service.fetch(&query)
    }
}

impl Debug for FeatureDelegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureDelegate")
            .field("has_service", &self.has_service())
            .finish()
    }
}
