//! # gbmfit Ext File
//!
//! File-based price curve loading for gbmfit.
//!
//! This crate decodes `date,price` text into [`Observation`]s:
//! - CSV files on disk
//! - any `std::io::Read` source
//! - in-memory strings
//!
//! Loading only decodes. Ordering and positivity are checked later by the
//! core validator, so a negative price loads fine and fails calibration
//! with `InvalidPrice`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod price_curve;

pub use price_curve::*;

use std::path::Path;

use gbmfit_core::{GbmResult, Observation};

/// Load observations from a `YYYY-MM-DD,price` CSV file with no header.
pub fn load_price_curve(path: impl AsRef<Path>) -> GbmResult<Vec<Observation>> {
    CsvCurveLoader::new().load_path(path)
}
