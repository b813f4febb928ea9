//! A single dated price observation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// One sampled price on one calendar day.
///
/// Observations carry no invariants of their own; positivity and ordering
/// are properties of a [`PriceCurve`](super::PriceCurve).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    date: Date,
    price: f64,
}

impl Observation {
    /// Creates a new observation.
    #[must_use]
    pub fn new(date: Date, price: f64) -> Self {
        Self { date, price }
    }

    /// Returns the observation date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the observed price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.date, self.price)
    }
}

impl From<(Date, f64)> for Observation {
    fn from((date, price): (Date, f64)) -> Self {
        Self::new(date, price)
    }
}
