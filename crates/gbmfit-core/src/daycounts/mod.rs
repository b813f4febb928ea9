//! Day count conventions for annualizing elapsed time.
//!
//! A day count converts the calendar gap between two observations into a
//! fraction of a year. Every convention here counts actual calendar days,
//! so irregular sampling is always weighted by its true elapsed time; they
//! differ only in the year basis.
//!
//! - [`Act365Fixed`]: Actual/365 Fixed - the default calibration basis
//! - [`Act365Leap`]: Actual/365 Leap - 366-day basis when Feb 29 is spanned
//! - [`Act360`]: Actual/360 - money market basis
//!
//! # Usage
//!
//! ```rust
//! use gbmfit_core::daycounts::{Act365Fixed, DayCount};
//! use gbmfit_core::types::Date;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2026, 1, 1).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 365);
//! assert_eq!(dc.year_fraction(start, end), 1.0);
//! ```

mod act360;
mod act365;

pub use act360::Act360;
pub use act365::{Act365Fixed, Act365Leap, DAYS_PER_YEAR};

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so an estimator can
/// be shared between threads calibrating independent curves.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention (e.g. "ACT/365F").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Returns the number of calendar days between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Enumeration of the supported day count conventions.
///
/// Selects a convention at run time, e.g. from a configuration file.
///
/// # Example
///
/// ```rust
/// use gbmfit_core::daycounts::DayCountConvention;
///
/// let convention: DayCountConvention = "act365".parse().unwrap();
/// assert_eq!(convention, DayCountConvention::Act365Fixed);
/// assert_eq!(convention.name(), "ACT/365F");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCountConvention {
    /// Actual/365 Fixed
    #[default]
    Act365Fixed,

    /// Actual/365 Leap
    Act365Leap,

    /// Actual/360
    Act360,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
            DayCountConvention::Act365Leap => Box::new(Act365Leap),
            DayCountConvention::Act360 => Box::new(Act360),
        }
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::Act365Leap => "ACT/365L",
            DayCountConvention::Act360 => "ACT/360",
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act365Fixed,
            DayCountConvention::Act365Leap,
            DayCountConvention::Act360,
        ]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = DayCountParseError;

    /// Parses a day count convention from a string.
    ///
    /// Accepts market names ("ACT/365F"), enum-style names ("Act365Fixed")
    /// and short aliases ("act365").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACTUAL/365 FIXED"
            | "ACT365FIXED" | "ACT365" | "ACT365F" => Ok(DayCountConvention::Act365Fixed),

            "ACT/365L" | "ACT/365 LEAP" | "ACTUAL/365 LEAP" | "ACT365LEAP" | "ACT365L" => {
                Ok(DayCountConvention::Act365Leap)
            }

            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),

            _ => Err(DayCountParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = DayCountParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCountConvention> for String {
    fn from(convention: DayCountConvention) -> Self {
        convention.name().to_string()
    }
}

/// Error type for parsing day count conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCountParseError(pub String);

impl std::fmt::Display for DayCountParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown day count convention: '{}'", self.0)
    }
}

impl std::error::Error for DayCountParseError {}
