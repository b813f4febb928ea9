//! CLI command implementations.

pub mod calibrate;
pub mod config;

// Re-export submodules for convenience
pub use calibrate::CalibrateArgs;
pub use config::ConfigArgs;

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::{self as cfg, CliConfig};
use crate::error::CliResult;

/// Global flags shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit `--config` path, if any.
    pub config_path: Option<PathBuf>,
    /// `--format` override, if any.
    pub format: Option<OutputFormat>,
    /// Suppress headers and informational messages.
    pub quiet: bool,
}

impl Context {
    /// Creates a context from the global flags.
    pub fn new(config_path: Option<PathBuf>, format: Option<OutputFormat>, quiet: bool) -> Self {
        Self {
            config_path,
            format,
            quiet,
        }
    }

    /// Loads the effective configuration and the file it came from.
    pub fn load_config(&self) -> CliResult<(CliConfig, Option<PathBuf>)> {
        CliConfig::load(self.config_path.as_deref())
    }

    /// Returns the config file this invocation reads and writes.
    pub fn target_config_path(&self) -> CliResult<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => cfg::default_path(),
        }
    }

    /// Output format: the `--format` flag wins over the config file.
    pub fn output_format(&self, config: &CliConfig) -> OutputFormat {
        self.format.unwrap_or(config.format)
    }
}
