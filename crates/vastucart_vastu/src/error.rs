//! Error types for vastu inputs.

use thiserror::Error;

/// Errors from parsing vastu inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VastuError {
    /// Unrecognised compass direction.
    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),
    /// Unrecognised room type.
    #[error("unknown room type: {0:?}")]
    UnknownRoom(String),
}
