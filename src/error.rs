use crate::parameters::bounds::BoundsError;
use thiserror::Error;

/// Error types for the specfit-rs library.
#[derive(Error, Debug)]
pub enum SpecFitError {
    /// A configuration string or value outside the accepted set.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Error indicating a mismatch in array lengths.
    #[error("Shape mismatch in {context}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Parameter not found.
    #[error("Parameter not found: {0}")]
    ParameterNotFound(String),

    /// A parameter with the same name is already declared.
    #[error("Duplicate parameter: {0}")]
    DuplicateParameter(String),

    /// Component not found in a model.
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// Error for boundary constraint problems.
    #[error("Bounds error: {0}")]
    Bounds(#[from] BoundsError),

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecFitError {
    /// Shorthand for building a [`SpecFitError::ShapeMismatch`].
    pub fn shape_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        SpecFitError::ShapeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }
}

/// Result type alias for specfit-rs operations.
pub type Result<T> = std::result::Result<T, SpecFitError>;
