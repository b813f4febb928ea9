//! Closed-form GBM parameter estimator.
//!
//! Converts a validated [`PriceCurve`] into annualized drift and volatility.
//! Each interval is weighted by its own elapsed year fraction, so irregular
//! sampling (weekends, holidays, missing days) is handled exactly.
//!
//! # Algorithm
//!
//! For intervals `i = 1..N-1` with log-return `r_i = ln(P_i / P_{i-1})` and
//! year fraction `dt_i`:
//!
//! $$m = \frac{\sum_i r_i}{\sum_i dt_i}$$
//!
//! $$\sigma^2 = \frac{1}{N-1} \sum_i \frac{(r_i - m \, dt_i)^2}{dt_i}$$
//!
//! $$\mu = m + \frac{\sigma^2}{2}$$
//!
//! The mean is a time-weighted rate over the whole curve, not an average of
//! per-interval returns, and each squared deviation is rescaled to a
//! per-year variance before averaging.

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::daycounts::{Act365Fixed, DayCount, DayCountConvention};
use crate::error::{GbmError, GbmResult};
use crate::types::{ModelParams, PriceCurve};

/// Result of one estimator pass over a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Calibrated drift and volatility.
    pub params: ModelParams,
    /// Number of intervals (N - 1).
    pub intervals: usize,
    /// Total elapsed time in years.
    pub total_time: f64,
    /// Sum of interval log-returns, `ln(P_last / P_first)`.
    pub total_log_return: f64,
}

impl Estimate {
    /// Returns the time-weighted annualized mean log-return.
    #[must_use]
    pub fn mean_log_return(&self) -> f64 {
        self.total_log_return / self.total_time
    }
}

/// GBM estimator parameterized by a day count convention.
///
/// The default uses ACT/365 Fixed, the basis the reference outputs are
/// computed with.
///
/// # Example
///
/// ```rust
/// use gbmfit_core::estimator::GbmEstimator;
/// use gbmfit_core::types::{Date, Observation, PriceCurve};
///
/// let curve = PriceCurve::new(vec![
///     Observation::new(Date::from_ymd(2022, 1, 3).unwrap(), 100.0),
///     Observation::new(Date::from_ymd(2022, 1, 4).unwrap(), 100.0),
///     Observation::new(Date::from_ymd(2022, 1, 10).unwrap(), 100.0),
/// ])
/// .unwrap();
///
/// let estimate = GbmEstimator::new().estimate(&curve).unwrap();
/// assert_eq!(estimate.params.mu(), 0.0);
/// assert_eq!(estimate.params.sigma(), 0.0);
/// ```
pub struct GbmEstimator {
    day_count: Box<dyn DayCount>,
}

impl GbmEstimator {
    /// Creates an estimator using ACT/365 Fixed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_day_count(Act365Fixed)
    }

    /// Creates an estimator with a specific day count.
    #[must_use]
    pub fn with_day_count(day_count: impl DayCount + 'static) -> Self {
        Self {
            day_count: Box::new(day_count),
        }
    }

    /// Creates an estimator from a runtime-selected convention.
    #[must_use]
    pub fn from_convention(convention: DayCountConvention) -> Self {
        Self {
            day_count: convention.to_day_count(),
        }
    }

    /// Returns the name of the day count in use.
    #[must_use]
    pub fn day_count_name(&self) -> &'static str {
        self.day_count.name()
    }

    /// Estimates annualized GBM parameters from a validated curve.
    ///
    /// Runs in O(N) with two passes over the curve and no intermediate
    /// buffers.
    ///
    /// # Errors
    ///
    /// Returns `GbmError::NumericOverflow` if the drift or volatility is not
    /// finite, which happens only for pathological price magnitudes.
    pub fn estimate(&self, curve: &PriceCurve) -> GbmResult<Estimate> {
        let intervals = curve.len() - 1;

        let mut total_log_return = 0.0;
        let mut total_time = 0.0;
        for (prev, cur) in curve.intervals() {
            let log_return = (cur.price() / prev.price()).ln();
            let dt = self.day_count.year_fraction(prev.date(), cur.date());
            trace!(
                "interval {} -> {}: log_return={log_return}, dt={dt}",
                prev.date(),
                cur.date()
            );
            total_log_return += log_return;
            total_time += dt;
        }

        // Strictly increasing dates keep total_time > 0.
        let mean_return = total_log_return / total_time;

        let mut sum_error_sq = 0.0;
        for (prev, cur) in curve.intervals() {
            let log_return = (cur.price() / prev.price()).ln();
            let dt = self.day_count.year_fraction(prev.date(), cur.date());
            let error = log_return - mean_return * dt;
            sum_error_sq += error * error / dt;
        }
        let variance = sum_error_sq / intervals as f64;

        let sigma = variance.sqrt();
        let mu = mean_return + sigma * sigma / 2.0;

        if !sigma.is_finite() {
            return Err(GbmError::numeric_overflow("sigma", sigma));
        }
        if !mu.is_finite() {
            return Err(GbmError::numeric_overflow("mu", mu));
        }

        debug!(
            "estimated mu={mu}, sigma={sigma} over {intervals} intervals ({total_time} years, {})",
            self.day_count.name()
        );

        Ok(Estimate {
            params: ModelParams::new(mu, sigma),
            intervals,
            total_time,
            total_log_return,
        })
    }
}

impl Default for GbmEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GbmEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GbmEstimator")
            .field("day_count", &self.day_count.name())
            .finish()
    }
}
