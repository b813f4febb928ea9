//! Calendar date type for price observations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{GbmError, GbmResult};

/// ISO 8601 calendar date format used by default for price curves.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date at day granularity.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Only real calendar
/// dates can be represented, so February 30 is rejected at construction.
///
/// # Example
///
/// ```rust
/// use gbmfit_core::types::Date;
///
/// let start = Date::from_ymd(2020, 1, 1).unwrap();
/// let end = Date::parse("2021-01-01").unwrap();
/// assert_eq!(start.days_between(&end), 366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `GbmError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> GbmResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| GbmError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `GbmError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> GbmResult<Self> {
        Self::parse_with_format(s, ISO_DATE_FORMAT)
    }

    /// Creates a date from a string in the given strftime-style format.
    ///
    /// The whole input must be consumed; trailing characters are an error.
    ///
    /// # Errors
    ///
    /// Returns `GbmError::InvalidDate` if the string does not match the
    /// format or names a date that does not exist.
    pub fn parse_with_format(s: &str, format: &str) -> GbmResult<Self> {
        NaiveDate::parse_from_str(s, format)
            .map(Date)
            .map_err(|e| GbmError::invalid_date(format!("cannot parse '{s}' as {format}: {e}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days between two dates.
    ///
    /// Positive when `other` is after `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = GbmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}
