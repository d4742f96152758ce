use thiserror::Error;

/// Errors raised by the geometry kernel.
///
/// Geometric predicates never fail; these errors only surface at the
/// boundaries where values enter the kernel (GeoJSON ingestion, bbox arrays,
/// fetch criteria) or leave it through a configured feature service.
#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Feature service error: {0}")]
    Service(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for kernel operations
pub type GeoResult<T> = Result<T, GeoError>;
