//! Error handling for the dimensioning library
//!
//! Every failure here is a caller-input error: deterministic, raised
//! synchronously at the point of detection, and immediately reproducible.
//! There is no transient/fatal distinction and no partial result.

use thiserror::Error;

/// Result type alias for dimensioning operations
pub type Result<T> = std::result::Result<T, DimensioningError>;

/// Error type for dimensioning and quality-estimation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DimensioningError {
    /// Codec name is not present in the catalog
    #[error("Unsupported codec: {name}")]
    UnsupportedCodec {
        /// The codec name that failed the lookup
        name: String,
    },

    /// A numeric parameter is outside its valid range
    #[error("Invalid parameter {field}: {value} ({constraint})")]
    InvalidParameter {
        /// Field name as seen by the caller
        field: &'static str,
        /// The offending value
        value: f64,
        /// Human-readable constraint, e.g. "must be positive"
        constraint: &'static str,
    },
}

impl DimensioningError {
    /// Create a new unsupported codec error
    pub fn unsupported_codec(name: impl Into<String>) -> Self {
        Self::UnsupportedCodec { name: name.into() }
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter(field: &'static str, value: f64, constraint: &'static str) -> Self {
        Self::InvalidParameter {
            field,
            value,
            constraint,
        }
    }
}

/// Reject a value that must be strictly positive
///
/// The comparison is written so that NaN also fails the check.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DimensioningError::invalid_parameter(
            field,
            value,
            "must be positive",
        ))
    }
}

/// Reject a value that must be zero or greater
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(DimensioningError::invalid_parameter(
            field,
            value,
            "must not be negative",
        ))
    }
}
