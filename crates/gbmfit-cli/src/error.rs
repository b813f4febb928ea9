//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Delimiter that is not a single ASCII character.
    #[error("Invalid delimiter: {0:?}. Must be a single ASCII character.")]
    InvalidDelimiter(char),

    /// Precision outside the printable range.
    #[error("Invalid precision: {0}. Must be between 1 and 17.")]
    InvalidPrecision(usize),

    /// Explicitly requested config file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Refusing to overwrite an existing config file.
    #[error("Configuration file already exists: {} (use --force to overwrite)", .0.display())]
    ConfigExists(PathBuf),

    /// Config file could not be parsed.
    #[error("Invalid configuration in {}: {reason}", path.display())]
    ConfigParse {
        /// Path of the config file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// No platform config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
