//! Error types for numerology inputs.

use thiserror::Error;
use vastucart_core::CoreError;

/// Errors from parsing numerology calculator inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Error from a core input (date, letter system).
    #[error(transparent)]
    Core(#[from] CoreError),
    /// Unrecognised gender.
    #[error("unknown gender: {0:?} (expected boy, girl or unisex)")]
    UnknownGender(String),
    /// Unrecognised desired quality.
    #[error("unknown quality: {0:?}")]
    UnknownQuality(String),
    /// Starting letter outside A–Z.
    #[error("starting letter must be A-Z, got {0:?}")]
    InvalidStartingLetter(char),
    /// Suggestion limit of zero.
    #[error("suggestion limit must be at least 1")]
    ZeroLimit,
}
