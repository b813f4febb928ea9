//! Validated price curve.

use std::slice;

use super::{Date, Observation};
use crate::error::GbmResult;
use crate::validation::validate_curve;

/// An ordered sequence of price observations.
///
/// A `PriceCurve` can only be built through [`PriceCurve::new`], which runs
/// [`validate_curve`]. Holding one therefore guarantees:
///
/// - at least two observations
/// - every price strictly positive
/// - strictly increasing dates
///
/// # Example
///
/// ```rust
/// use gbmfit_core::types::{Date, Observation, PriceCurve};
///
/// let curve = PriceCurve::new(vec![
///     Observation::new(Date::from_ymd(2020, 1, 1).unwrap(), 100.0),
///     Observation::new(Date::from_ymd(2021, 1, 1).unwrap(), 90.0),
/// ])
/// .unwrap();
///
/// assert_eq!(curve.len(), 2);
/// assert_eq!(curve.intervals().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCurve {
    observations: Vec<Observation>,
}

impl PriceCurve {
    /// Minimum number of observations in a curve.
    pub const MIN_OBSERVATIONS: usize = 2;

    /// Validates the observations and wraps them in a curve.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition: `InsufficientData`,
    /// `InvalidPrice` or `UnorderedDates`.
    pub fn new(observations: Vec<Observation>) -> GbmResult<Self> {
        validate_curve(&observations)?;
        Ok(Self { observations })
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false; a valid curve holds at least two observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Returns the observations as a slice.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Iterates over the observations in date order.
    pub fn iter(&self) -> slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Iterates over consecutive `(previous, current)` observation pairs.
    pub fn intervals(&self) -> impl Iterator<Item = (&Observation, &Observation)> + '_ {
        self.observations.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Returns the earliest observation.
    #[must_use]
    pub fn first(&self) -> &Observation {
        &self.observations[0]
    }

    /// Returns the latest observation.
    #[must_use]
    pub fn last(&self) -> &Observation {
        &self.observations[self.observations.len() - 1]
    }

    /// Returns the first and last dates of the curve.
    #[must_use]
    pub fn date_range(&self) -> (Date, Date) {
        (self.first().date(), self.last().date())
    }

    /// Consumes the curve and returns its observations.
    #[must_use]
    pub fn into_observations(self) -> Vec<Observation> {
        self.observations
    }
}

impl<'a> IntoIterator for &'a PriceCurve {
    type Item = &'a Observation;
    type IntoIter = slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
