//! Validated birth date (day, month, year; no time or zone).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::CoreError;

/// A calendar date used as calculator input.
///
/// Construction validates the date, so calculators can take it as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BirthDate {
    year: i32,
    month: u32,
    day: u32,
}

impl BirthDate {
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, CoreError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or(CoreError::InvalidDate { day, month, year })
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    pub fn to_naive(self) -> NaiveDate {
        // Fields were validated on construction.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }

    pub fn weekday(self) -> Weekday {
        self.to_naive().weekday()
    }

    /// Every decimal digit of day, month and full year, in that order.
    pub fn digits(self) -> Vec<u32> {
        format!("{}{}{}", self.day, self.month, self.year.unsigned_abs())
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect()
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

impl FromStr for BirthDate {
    type Err = CoreError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from)
            .map_err(|_| CoreError::InvalidDateFormat(s.to_string()))
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
