//! Calibration pipeline: validate, then estimate.
//!
//! This is the entry point most callers want. It takes decoded
//! observations, builds a validated [`PriceCurve`], and runs the
//! [`GbmEstimator`]. Every call is independent and holds no state, so
//! curves can be calibrated concurrently by the caller.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::daycounts::DayCountConvention;
use crate::error::GbmResult;
use crate::estimator::GbmEstimator;
use crate::types::{Date, ModelParams, Observation, PriceCurve};

/// Calibrates GBM parameters with the default ACT/365 Fixed basis.
///
/// # Errors
///
/// Returns `InsufficientData`, `InvalidPrice` or `UnorderedDates` for an
/// invalid curve, and `NumericOverflow` for a non-finite result.
///
/// # Example
///
/// ```rust
/// use gbmfit_core::{calibrate, Date, GbmError, Observation};
///
/// let single = vec![Observation::new(Date::from_ymd(2020, 1, 1).unwrap(), 100.0)];
/// assert!(matches!(calibrate(single), Err(GbmError::InsufficientData { .. })));
/// ```
pub fn calibrate(observations: Vec<Observation>) -> GbmResult<ModelParams> {
    Calibrator::new()
        .calibrate(observations)
        .map(|calibration| calibration.params)
}

/// Summary of one calibration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Calibrated drift and volatility.
    pub params: ModelParams,
    /// Number of observations in the curve.
    pub observations: usize,
    /// First observation date.
    pub start_date: Date,
    /// Last observation date.
    pub end_date: Date,
    /// Total elapsed time in years under the day count.
    pub elapsed_years: f64,
    /// `ln(P_last / P_first)`.
    pub total_log_return: f64,
    /// Day count convention used to annualize.
    pub day_count: DayCountConvention,
}

/// Configurable calibration pipeline.
///
/// # Example
///
/// ```rust
/// use gbmfit_core::daycounts::DayCountConvention;
/// use gbmfit_core::{Calibrator, Date, Observation};
///
/// let observations = vec![
///     Observation::new(Date::from_ymd(2024, 1, 2).unwrap(), 100.0),
///     Observation::new(Date::from_ymd(2024, 1, 3).unwrap(), 101.5),
///     Observation::new(Date::from_ymd(2024, 1, 10).unwrap(), 99.8),
/// ];
///
/// let calibration = Calibrator::new()
///     .with_day_count(DayCountConvention::Act360)
///     .calibrate(observations)
///     .unwrap();
///
/// assert_eq!(calibration.observations, 3);
/// assert!((calibration.elapsed_years - 8.0 / 360.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calibrator {
    day_count: DayCountConvention,
}

impl Calibrator {
    /// Creates a calibrator using ACT/365 Fixed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Returns the configured day count convention.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Validates the observations and estimates GBM parameters.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, or `NumericOverflow` when the
    /// estimate is not finite.
    pub fn calibrate(&self, observations: Vec<Observation>) -> GbmResult<Calibration> {
        let curve = PriceCurve::new(observations)?;
        self.calibrate_curve(&curve)
    }

    /// Estimates GBM parameters from an already validated curve.
    ///
    /// # Errors
    ///
    /// Returns `NumericOverflow` when the estimate is not finite.
    pub fn calibrate_curve(&self, curve: &PriceCurve) -> GbmResult<Calibration> {
        let (start_date, end_date) = curve.date_range();
        debug!(
            "calibrating {} observations from {start_date} to {end_date} ({})",
            curve.len(),
            self.day_count
        );

        let estimate = GbmEstimator::from_convention(self.day_count).estimate(curve)?;

        Ok(Calibration {
            params: estimate.params,
            observations: curve.len(),
            start_date,
            end_date,
            elapsed_years: estimate.total_time,
            total_log_return: estimate.total_log_return,
            day_count: self.day_count,
        })
    }
}
