//! Config command implementation.
//!
//! Shows and initializes the CLI configuration file.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{print_header, print_info, print_json, print_success, print_table, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with default values
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Path => execute_path(ctx),
        ConfigCommand::Init(init_args) => execute_init(init_args, ctx),
    }
}

/// Show the effective configuration.
fn execute_show(ctx: &Context) -> Result<()> {
    let (config, source) = ctx.load_config()?;

    match ctx.output_format(&config) {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Current Configuration");
            }
            let source = source
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(defaults)".to_string());
            print_table(&[
                KeyValue::new("source", source),
                KeyValue::new("date_format", config.date_format.as_str()),
                KeyValue::new("day_count", config.day_count.name()),
                KeyValue::new("has_headers", config.has_headers.to_string()),
                KeyValue::new("delimiter", config.delimiter.to_string()),
                KeyValue::new("format", format!("{:?}", config.format).to_lowercase()),
                KeyValue::new("precision", config.precision.to_string()),
            ]);
        }
        OutputFormat::Json => print_json(&config)?,
        OutputFormat::Csv | OutputFormat::Minimal => print!("{}", config.to_toml()?),
    }

    Ok(())
}

/// Show the configuration file location.
fn execute_path(ctx: &Context) -> Result<()> {
    let path = ctx.target_config_path()?;
    println!("{}", path.display());

    if !ctx.quiet && !path.exists() {
        print_info("File does not exist yet; run `gbmfit config init` to create it.");
    }
    Ok(())
}

/// Write a default configuration file.
fn execute_init(args: InitArgs, ctx: &Context) -> Result<()> {
    let path = ctx.target_config_path()?;
    if path.exists() && !args.force {
        return Err(CliError::ConfigExists(path).into());
    }

    CliConfig::default().save(&path)?;

    if !ctx.quiet {
        print_success(&format!("Wrote default configuration to {}", path.display()));
    }
    Ok(())
}
