//! # gbmfit Core
//!
//! Core types and the calibration pipeline for estimating Geometric Brownian
//! Motion parameters from an irregularly sampled price curve.
//!
//! This crate provides the building blocks used by the rest of gbmfit:
//!
//! - **Types**: `Date`, `Observation`, `PriceCurve`, `ModelParams`
//! - **Day Count Conventions**: annualization of elapsed calendar time
//! - **Validation**: structural preconditions on a decoded curve
//! - **Estimator**: closed-form annualized drift and volatility
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: a `PriceCurve` can only exist once it has been validated
//! - **Exact Time Weighting**: every interval is weighted by its real elapsed time
//! - **Explicit Errors**: every failure is a distinct `GbmError` variant
//!
//! ## Example
//!
//! ```rust
//! use gbmfit_core::prelude::*;
//!
//! let observations = vec![
//!     Observation::new(Date::from_ymd(2024, 1, 2).unwrap(), 100.0),
//!     Observation::new(Date::from_ymd(2024, 1, 3).unwrap(), 101.5),
//!     Observation::new(Date::from_ymd(2024, 1, 10).unwrap(), 99.8),
//! ];
//!
//! let params = calibrate(observations).unwrap();
//! assert!(params.sigma() >= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod calibration;
pub mod daycounts;
pub mod error;
pub mod estimator;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calibration::{calibrate, Calibration, Calibrator};
    pub use crate::daycounts::{Act360, Act365Fixed, Act365Leap, DayCount, DayCountConvention};
    pub use crate::error::{GbmError, GbmResult};
    pub use crate::estimator::{Estimate, GbmEstimator};
    pub use crate::types::{Date, ModelParams, Observation, PriceCurve};
    pub use crate::validation::validate_curve;
}

// Re-export commonly used types at crate root
pub use calibration::{calibrate, Calibration, Calibrator};
pub use error::{GbmError, GbmResult};
pub use types::{Date, ModelParams, Observation, PriceCurve};
