//! Engine error types

use thiserror::Error;

/// Engine error
#[derive(Error, Debug)]
pub enum EngineError {
    /// Classifier artifact failed to load or parse
    #[error("Model load error: {0}")]
    ModelLoad(String),

    /// Geolocation lookup failed
    #[error("Geolocation lookup failed: {0}")]
    GeoLookup(String),

    /// Invalid value encountered in a pipeline stage
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Activity log entry not found
    #[error("Activity log entry not found: {0}")]
    ActivityNotFound(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
