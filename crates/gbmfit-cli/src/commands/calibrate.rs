//! Calibrate command implementation.
//!
//! Loads a `date,price` file, validates the curve, and reports the
//! annualized GBM drift and volatility.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use gbmfit_core::daycounts::DayCountConvention;
use gbmfit_core::{Calibration, Calibrator};
use gbmfit_ext_file::CsvCurveLoader;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::config::{delimiter_byte, validate_precision};
use crate::output::{
    format_float, format_percent, print_csv, print_header, print_json, print_table, KeyValue,
};

/// Arguments for the calibrate command.
#[derive(Args, Debug)]
pub struct CalibrateArgs {
    /// CSV file with one `date,price` record per line
    pub file: PathBuf,

    /// Date format of the first column (strftime syntax, e.g. %Y-%m-%d)
    #[arg(long)]
    pub date_format: Option<String>,

    /// Day count used to annualize elapsed time (act365, act365l, act360)
    #[arg(long)]
    pub day_count: Option<DayCountConvention>,

    /// Skip a header row
    #[arg(long)]
    pub headers: bool,

    /// Field delimiter
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Decimal places in table output
    #[arg(long)]
    pub precision: Option<usize>,
}

/// Flat calibration report, suitable for JSON and CSV output.
#[derive(Debug, Clone, Serialize)]
pub struct CalibrationReport {
    pub file: String,
    pub observations: usize,
    pub start_date: String,
    pub end_date: String,
    pub elapsed_years: f64,
    pub day_count: String,
    pub mu: f64,
    pub sigma: f64,
    pub log_drift: f64,
}

impl CalibrationReport {
    fn new(file: &str, calibration: &Calibration) -> Self {
        Self {
            file: file.to_string(),
            observations: calibration.observations,
            start_date: calibration.start_date.to_string(),
            end_date: calibration.end_date.to_string(),
            elapsed_years: calibration.elapsed_years,
            day_count: calibration.day_count.name().to_string(),
            mu: calibration.params.mu(),
            sigma: calibration.params.sigma(),
            log_drift: calibration.params.log_drift(),
        }
    }

    fn rows(&self, precision: usize) -> Vec<KeyValue> {
        vec![
            KeyValue::new("File", self.file.as_str()),
            KeyValue::new("Observations", self.observations.to_string()),
            KeyValue::new("Start Date", self.start_date.as_str()),
            KeyValue::new("End Date", self.end_date.as_str()),
            KeyValue::from_float("Elapsed (years)", self.elapsed_years, precision),
            KeyValue::new("Day Count", self.day_count.as_str()),
            KeyValue::new(
                "Drift μ (annualized expected return)",
                format!(
                    "{} ({})",
                    format_float(self.mu, precision),
                    format_percent(self.mu, precision)
                ),
            ),
            KeyValue::new(
                "Volatility σ (annualized volatility)",
                format!(
                    "{} ({})",
                    format_float(self.sigma, precision),
                    format_percent(self.sigma, precision)
                ),
            ),
            KeyValue::from_float("Log Drift (μ - σ²/2)", self.log_drift, precision),
        ]
    }
}

/// Execute the calibrate command.
pub fn execute(args: CalibrateArgs, ctx: &Context) -> Result<()> {
    let (config, _) = ctx.load_config()?;

    let date_format = args.date_format.unwrap_or_else(|| config.date_format.clone());
    let day_count = args.day_count.unwrap_or(config.day_count);
    let delimiter = delimiter_byte(args.delimiter.unwrap_or(config.delimiter))?;
    let precision = validate_precision(args.precision.unwrap_or(config.precision))?;

    let loader = CsvCurveLoader::new()
        .with_date_format(date_format)
        .with_headers(args.headers || config.has_headers)
        .with_delimiter(delimiter);

    let file = args.file.display().to_string();
    info!("Loading price curve from {}", file);
    let observations = loader.load_path(&args.file)?;

    let calibration = Calibrator::new()
        .with_day_count(day_count)
        .calibrate(observations)?;
    info!(
        "Calibrated {} observations: {}",
        calibration.observations, calibration.params
    );

    let report = CalibrationReport::new(&file, &calibration);

    match ctx.output_format(&config) {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Calibrated Parameters");
            }
            print_table(&report.rows(precision));
        }
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv => print_csv(&[report])?,
        OutputFormat::Minimal => println!("{} {}", report.mu, report.sigma),
    }

    Ok(())
}
