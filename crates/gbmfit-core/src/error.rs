//! Error types for gbmfit.
//!
//! Every failure of the calibration pipeline is one variant of [`GbmError`],
//! so callers can tell a missing file from a malformed record or a
//! structurally invalid curve without parsing message text.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for gbmfit operations.
pub type GbmResult<T> = Result<T, GbmError>;

/// The main error type for gbmfit operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GbmError {
    /// The external data source could not be opened or read.
    #[error("Source unavailable: {location} ({reason})")]
    SourceUnavailable {
        /// Path or name of the source.
        location: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// A record could not be decoded into a `(date, price)` pair.
    #[error("Malformed record at line {line}: '{record}' ({reason})")]
    MalformedRecord {
        /// 1-based line number of the record.
        line: u64,
        /// Raw record text.
        record: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Fewer observations than a return calculation needs.
    #[error("Insufficient data: need at least {required} price observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Number of observations supplied.
        actual: usize,
    },

    /// A price that is not strictly positive.
    #[error("Invalid price at index {index} ({date}): {price} is not strictly positive")]
    InvalidPrice {
        /// Position of the observation in the curve.
        index: usize,
        /// Date of the observation.
        date: Date,
        /// The offending price.
        price: f64,
    },

    /// Dates that are not strictly increasing.
    #[error("Dates must be strictly increasing: {current} at index {index} follows {previous}")]
    UnorderedDates {
        /// Position of the out-of-order observation.
        index: usize,
        /// Date of the preceding observation.
        previous: Date,
        /// Date of the out-of-order observation.
        current: Date,
    },

    /// The estimator produced a non-finite result.
    #[error("Numeric overflow: {quantity} is not finite ({value})")]
    NumericOverflow {
        /// Name of the non-finite quantity.
        quantity: &'static str,
        /// The value that was produced.
        value: f64,
    },

    /// Error constructing or parsing a calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl GbmError {
    /// Creates a source unavailable error.
    #[must_use]
    pub fn source_unavailable(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Creates a malformed record error.
    #[must_use]
    pub fn malformed_record(
        line: u64,
        record: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            line,
            record: record.into(),
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(index: usize, date: Date, price: f64) -> Self {
        Self::InvalidPrice { index, date, price }
    }

    /// Creates an unordered dates error.
    #[must_use]
    pub fn unordered_dates(index: usize, previous: Date, current: Date) -> Self {
        Self::UnorderedDates {
            index,
            previous,
            current,
        }
    }

    /// Creates a numeric overflow error.
    #[must_use]
    pub fn numeric_overflow(quantity: &'static str, value: f64) -> Self {
        Self::NumericOverflow { quantity, value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}
