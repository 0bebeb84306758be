//! Error types for input parsing and validation.
//!
//! Calculators never fail on validated input. These errors only arise at
//! the boundary, when raw strings or numbers are turned into typed inputs.

use thiserror::Error;

/// Errors from constructing or parsing core inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Day/month/year do not form a real calendar date.
    #[error("invalid date: {day:02}-{month:02}-{year}")]
    InvalidDate { day: u32, month: u32, year: i32 },
    /// Date string was not in `YYYY-MM-DD` form.
    #[error("invalid date format: expected YYYY-MM-DD, got {0:?}")]
    InvalidDateFormat(String),
    /// Unrecognised letter-value system name.
    #[error("unknown letter system: {0:?} (expected pythagorean or chaldean)")]
    UnknownLetterSystem(String),
    /// Unrecognised master-number policy name.
    #[error("unknown master-number policy: {0:?} (expected none, 11-22 or all)")]
    UnknownMasterPolicy(String),
    /// Unrecognised language code.
    #[error("unknown language: {0:?} (expected en or hi)")]
    UnknownLang(String),
}
