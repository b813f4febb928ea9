//! Calibrated GBM parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Annualized GBM drift and volatility.
///
/// `mu` is the arithmetic drift, including the Itô correction; it may be
/// negative or zero. `sigma` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    mu: f64,
    sigma: f64,
}

impl ModelParams {
    /// Creates a parameter pair.
    ///
    /// A negative `sigma` is stored as its magnitude.
    #[must_use]
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self {
            mu,
            sigma: sigma.abs(),
        }
    }

    /// Returns the annualized drift.
    #[must_use]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the annualized volatility.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the annualized variance, `sigma²`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    /// Returns the log-return growth rate, `mu - sigma² / 2`.
    #[must_use]
    pub fn log_drift(&self) -> f64 {
        self.mu - self.variance() / 2.0
    }

    /// Checks that both parameters are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.mu.is_finite() && self.sigma.is_finite()
    }
}

impl fmt::Display for ModelParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mu={}, sigma={}", self.mu, self.sigma)
    }
}
