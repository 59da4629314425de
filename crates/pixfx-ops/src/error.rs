//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// The input raster (or a raster the operation tried to build) is invalid.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] pixfx_core::Error),

    /// A parameter lies outside its documented domain.
    #[error("parameter out of range: {0}")]
    OutOfRange(String),

    /// An operation name or parameter string could not be parsed.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

impl OpsError {
    /// Creates an [`OpsError::OutOfRange`] for a named parameter.
    pub fn out_of_range(name: &str, value: impl std::fmt::Display, expected: &str) -> Self {
        Self::OutOfRange(format!("{name} = {value}, expected {expected}"))
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Rejects NaN and infinite parameter values.
pub(crate) fn ensure_finite(name: &str, value: f64) -> OpsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OpsError::out_of_range(name, value, "a finite number"))
    }
}
