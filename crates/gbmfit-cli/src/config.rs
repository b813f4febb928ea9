//! Configuration file support.
//!
//! Settings resolve as: command-line flag, then config file, then the
//! built-in default. A missing default config file simply means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use gbmfit_core::daycounts::DayCountConvention;
use gbmfit_core::types::ISO_DATE_FORMAT;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Largest number of decimals worth printing for an `f64`.
const MAX_PRECISION: usize = 17;

/// Persistent CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// strftime-style date format of the input files
    pub date_format: String,
    /// Day count used to annualize elapsed time
    pub day_count: DayCountConvention,
    /// Whether input files start with a header row
    pub has_headers: bool,
    /// Field delimiter of the input files
    pub delimiter: char,
    /// Default output format
    pub format: OutputFormat,
    /// Decimal places in table output
    pub precision: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            date_format: ISO_DATE_FORMAT.to_string(),
            day_count: DayCountConvention::Act365Fixed,
            has_headers: false,
            delimiter: ',',
            format: OutputFormat::Table,
            precision: 6,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the effective configuration.
    ///
    /// An explicit path must exist. Otherwise the default location is used
    /// when present, and built-in defaults when not.
    pub fn load(explicit: Option<&Path>) -> CliResult<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CliError::ConfigNotFound(path.to_path_buf()));
            }
            info!("Loading configuration from {}", path.display());
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        match default_path() {
            Ok(path) if path.exists() => {
                info!("Loading configuration from {}", path.display());
                Ok((Self::from_file(&path)?, Some(path)))
            }
            _ => {
                debug!("Using default configuration");
                Ok((Self::default(), None))
            }
        }
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Serialization(e.to_string()))
    }

    /// Writes the configuration, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> CliResult<()> {
        delimiter_byte(self.delimiter)?;
        validate_precision(self.precision)?;
        Ok(())
    }
}

/// Converts a delimiter to the single byte the CSV reader needs.
pub fn delimiter_byte(delimiter: char) -> CliResult<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(CliError::InvalidDelimiter(delimiter))
    }
}

/// Validates a decimal precision.
pub fn validate_precision(precision: usize) -> CliResult<usize> {
    if (1..=MAX_PRECISION).contains(&precision) {
        Ok(precision)
    } else {
        Err(CliError::InvalidPrecision(precision))
    }
}

/// Get the default config file path.
pub fn default_path() -> CliResult<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(CliError::NoConfigDir)?;
    Ok(base.join("gbmfit").join("config.toml"))
}
