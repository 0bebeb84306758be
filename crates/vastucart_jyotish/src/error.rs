//! Error types for chart inputs.

use thiserror::Error;

/// Errors from parsing or validating chart inputs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum JyotishError {
    /// Unrecognised rashi name.
    #[error("unknown rashi: {0:?}")]
    UnknownRashi(String),
    /// Unrecognised graha name.
    #[error("unknown graha: {0:?}")]
    UnknownGraha(String),
    /// Longitude is NaN or infinite.
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),
}
