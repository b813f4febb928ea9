//! gbmfit CLI - Calibrate Geometric Brownian Motion parameters from a price curve.
//!
//! # Usage
//!
//! ```bash
//! # Calibrate drift and volatility from a `date,price` CSV file
//! gbmfit calibrate prices.csv
//!
//! # Same, as JSON, annualized on an ACT/360 basis
//! gbmfit --format json calibrate prices.csv --day-count act360
//!
//! # Inspect or create the configuration file
//! gbmfit config show
//! gbmfit config init
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let ctx = Context::new(cli.config, cli.format, cli.quiet);

    match cli.command {
        Commands::Calibrate(args) => commands::calibrate::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v`/`-q`.
fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
