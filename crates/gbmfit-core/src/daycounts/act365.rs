//! Actual/365 day count conventions.
//!
//! This module provides ACT/365 Fixed and ACT/365 Leap variants.

use super::DayCount;
use crate::types::Date;

/// Year basis of ACT/365 Fixed.
///
/// Leap years are deliberately not corrected for (no 365.25).
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 365 days (ignoring leap years).
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / DAYS_PER_YEAR
    }
}

/// Actual/365 Leap day count convention (ACT/365L).
///
/// The denominator is 366 if the period includes February 29 of a leap year,
/// otherwise 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Leap;

impl Act365Leap {
    /// Checks if the period `(start, end]` contains February 29.
    fn contains_feb_29(start: Date, end: Date) -> bool {
        if start >= end {
            return false;
        }

        (start.year()..=end.year()).any(|year| {
            Date::from_ymd(year, 2, 29).is_ok_and(|feb_29| feb_29 > start && feb_29 <= end)
        })
    }
}

impl DayCount for Act365Leap {
    fn name(&self) -> &'static str {
        "ACT/365L"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = start.days_between(&end) as f64;
        let basis = if Self::contains_feb_29(start, end) {
            366.0
        } else {
            DAYS_PER_YEAR
        };
        days / basis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ACT/365 Fixed tests
    #[test]
    fn test_act365f_full_year_non_leap() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 365);
        assert_eq!(dc.year_fraction(start, end), 1.0);
    }

    #[test]
    fn test_act365f_full_year_leap() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        // 366 days / 365 > 1 (leap year has extra day)
        assert_eq!(dc.day_count(start, end), 366);
        assert_eq!(dc.year_fraction(start, end), 366.0 / 365.0);
    }

    #[test]
    fn test_act365f_single_day() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2025, 6, 15).unwrap();

        assert_eq!(dc.year_fraction(start, start.add_days(1)), 1.0 / 365.0);
        assert_eq!(dc.year_fraction(start, start), 0.0);
    }

    // ACT/365L tests
    #[test]
    fn test_act365l_contains_feb29() {
        let dc = Act365Leap;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 3, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 60);
        assert_eq!(dc.year_fraction(start, end), 60.0 / 366.0);
    }

    #[test]
    fn test_act365l_no_feb29() {
        let dc = Act365Leap;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 3, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 59);
        assert_eq!(dc.year_fraction(start, end), 59.0 / 365.0);
    }

    #[test]
    fn test_act365l_cross_year() {
        let dc = Act365Leap;
        let start = Date::from_ymd(2023, 12, 1).unwrap();
        let end = Date::from_ymd(2024, 3, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 91);
        assert_eq!(dc.year_fraction(start, end), 91.0 / 366.0);
    }

    #[test]
    fn test_act365l_starting_on_feb29() {
        let dc = Act365Leap;
        let start = Date::from_ymd(2024, 2, 29).unwrap();
        let end = Date::from_ymd(2024, 3, 10).unwrap();

        // The start date itself is excluded from the period.
        assert_eq!(dc.year_fraction(start, end), 10.0 / 365.0);
    }
}
