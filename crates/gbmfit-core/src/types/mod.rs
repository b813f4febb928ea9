//! Domain types for GBM calibration.
//!
//! - [`Date`]: Calendar date of an observation
//! - [`Observation`]: One sampled price on one day
//! - [`PriceCurve`]: Validated, strictly date-ordered observations
//! - [`ModelParams`]: Annualized drift and volatility

mod curve;
mod date;
mod observation;
mod params;

pub use curve::PriceCurve;
pub use date::{Date, ISO_DATE_FORMAT};
pub use observation::Observation;
pub use params::ModelParams;
