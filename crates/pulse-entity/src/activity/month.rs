//! Calendar-month value type for monthly aggregation.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use pulse_core::AppError;

/// A calendar month (year + month), parsed from the `YYYY-MM` wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month of year, 1-12.
    pub month: u32,
}

impl YearMonth {
    /// Create a month, rejecting out-of-range month numbers.
    pub fn new(year: i32, month: u32) -> Result<Self, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::malformed_input(format!(
                "month out of range: {month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// Whether the given timestamp falls within this calendar month.
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        timestamp.year() == self.year && timestamp.month() == self.month
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed =
            || AppError::malformed_input(format!("invalid month '{s}', expected YYYY-MM"));

        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        // Four digit year and two digit month, digits only: integer
        // parsing alone would admit leading signs like "2025-+5".
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;

        Self::new(year, month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
