//! Structural preconditions on a decoded price curve.
//!
//! Checks run in a fixed order and the first violation is reported:
//!
//! 1. at least two observations (`InsufficientData`)
//! 2. every price strictly positive (`InvalidPrice`)
//! 3. strictly increasing dates (`UnorderedDates`)
//!
//! No other limits are imposed here; magnitudes that overflow downstream
//! surface from the estimator as `NumericOverflow`.

use log::debug;

use crate::error::{GbmError, GbmResult};
use crate::types::{Observation, PriceCurve};

/// Validates decoded observations without modifying them.
///
/// # Errors
///
/// Returns the first violated precondition.
///
/// # Example
///
/// ```rust
/// use gbmfit_core::error::GbmError;
/// use gbmfit_core::types::{Date, Observation};
/// use gbmfit_core::validation::validate_curve;
///
/// let day = Date::from_ymd(2020, 1, 1).unwrap();
/// let repeated = [Observation::new(day, 100.0), Observation::new(day, 101.0)];
///
/// assert!(matches!(
///     validate_curve(&repeated),
///     Err(GbmError::UnorderedDates { .. })
/// ));
/// ```
pub fn validate_curve(observations: &[Observation]) -> GbmResult<()> {
    if observations.len() < PriceCurve::MIN_OBSERVATIONS {
        return Err(GbmError::insufficient_data(
            PriceCurve::MIN_OBSERVATIONS,
            observations.len(),
        ));
    }

    if let Some((index, obs)) = observations
        .iter()
        .enumerate()
        .find(|(_, obs)| obs.price().is_nan() || obs.price() <= 0.0)
    {
        return Err(GbmError::invalid_price(index, obs.date(), obs.price()));
    }

    for (index, pair) in observations.windows(2).enumerate() {
        let (previous, current) = (pair[0].date(), pair[1].date());
        if current <= previous {
            return Err(GbmError::unordered_dates(index + 1, previous, current));
        }
    }

    debug!("validated price curve with {} observations", observations.len());
    Ok(())
}
