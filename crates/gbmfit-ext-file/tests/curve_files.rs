//! File-to-parameters tests: load a CSV from disk, then calibrate it.

use std::fs;
use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use gbmfit_core::{calibrate, GbmError, GbmResult, ModelParams};
use gbmfit_ext_file::{load_price_curve, CsvCurveLoader};
use tempfile::TempDir;

fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run(dir: &Path, name: &str, contents: &str) -> GbmResult<ModelParams> {
    let path = write_csv(dir, name, contents);
    calibrate(load_price_curve(path)?)
}

// =============================================================================
// HAPPY PATH
// =============================================================================

#[test]
fn irregular_intervals_file() {
    let dir = TempDir::new().unwrap();
    let params = run(
        dir.path(),
        "irregular_intervals.csv",
        "2024-01-02,100.0\n2024-01-03,101.5\n2024-01-10,99.8\n2024-02-09,104.2\n2024-05-09,110.0\n",
    )
    .unwrap();

    assert_relative_eq!(params.mu(), 0.284_836_556_799_211_2, max_relative = 1e-9);
    assert_relative_eq!(params.sigma(), 0.161_577_363_519_407_2, max_relative = 1e-9);
}

#[test]
fn minimal_valid_file() {
    let dir = TempDir::new().unwrap();
    let params = run(dir.path(), "minimal_valid.csv", "2020-01-01,100\n2021-01-01,90\n").unwrap();

    assert!(params.mu() < 0.0);
    assert!(params.sigma() < 1e-6);
}

#[test]
fn zero_volatility_file() {
    let dir = TempDir::new().unwrap();
    let params = run(
        dir.path(),
        "zero_volatility.csv",
        "2022-01-03,100\n2022-01-04,100\n2022-01-10,100\n",
    )
    .unwrap();

    assert_eq!(params.mu(), 0.0);
    assert_eq!(params.sigma(), 0.0);
}

#[test]
fn file_without_trailing_newline() {
    let dir = TempDir::new().unwrap();
    assert!(run(dir.path(), "no_newline.csv", "2020-01-01,100\n2020-06-01,104").is_ok());
}

// =============================================================================
// FAILURE PATH
// =============================================================================

#[test]
fn duplicate_dates_file() {
    let dir = TempDir::new().unwrap();
    let err = run(dir.path(), "duplicate_dates.csv", "2020-01-01,100\n2020-01-01,101\n").unwrap_err();
    assert!(matches!(err, GbmError::UnorderedDates { .. }));
}

#[test]
fn single_point_file() {
    let dir = TempDir::new().unwrap();
    let err = run(dir.path(), "single_point.csv", "2020-01-01,100\n").unwrap_err();
    assert!(matches!(err, GbmError::InsufficientData { .. }));
}

#[test]
fn negative_prices_file() {
    let dir = TempDir::new().unwrap();
    let err = run(dir.path(), "negative_prices.csv", "2020-01-01,100\n2020-01-02,-5\n").unwrap_err();
    assert!(matches!(err, GbmError::InvalidPrice { .. }));
}

#[test]
fn wrong_time_order_file() {
    let dir = TempDir::new().unwrap();
    let err = run(
        dir.path(),
        "wrong_time_order.csv",
        "2020-01-03,100\n2020-01-02,101\n2020-01-01,102\n",
    )
    .unwrap_err();
    assert!(matches!(err, GbmError::UnorderedDates { index: 1, .. }));
}

#[test]
fn invalid_datetime_format_file() {
    let dir = TempDir::new().unwrap();
    let err = run(
        dir.path(),
        "invalid_datetime_format.csv",
        "01/01/2020,100\n01/02/2020,101\n",
    )
    .unwrap_err();
    assert!(matches!(err, GbmError::MalformedRecord { line: 1, .. }));
}

#[test]
fn random_garbage_file() {
    let dir = TempDir::new().unwrap();
    let err = run(
        dir.path(),
        "random_garbage.csv",
        "lorem ipsum dolor sit amet\n%%%$$$###\n",
    )
    .unwrap_err();
    assert!(matches!(err, GbmError::MalformedRecord { .. }));
}

#[test]
fn invalid_price_string_file() {
    let dir = TempDir::new().unwrap();
    let err = run(
        dir.path(),
        "invalid_price_string.csv",
        "2020-01-01,100\n2020-01-02,one hundred\n",
    )
    .unwrap_err();
    assert!(matches!(err, GbmError::MalformedRecord { line: 2, .. }));
}

#[test]
fn invalid_price_huge_file() {
    let dir = TempDir::new().unwrap();
    let err = run(
        dir.path(),
        "invalid_price_huge.csv",
        "2020-01-01,100\n2020-01-02,1e999\n",
    )
    .unwrap_err();
    assert!(matches!(err, GbmError::MalformedRecord { line: 2, .. }));
}

#[test]
fn non_existent_file() {
    let dir = TempDir::new().unwrap();
    let err = load_price_curve(dir.path().join("does_not_exist.csv")).unwrap_err();
    assert!(matches!(err, GbmError::SourceUnavailable { .. }));
}

#[test]
fn malformed_record_stops_the_load() {
    // A bad record in the middle must fail the load, not be skipped.
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        dir.path(),
        "middle.csv",
        "2020-01-01,100\n2020-01-02\n2020-01-03,102\n",
    );

    let err = CsvCurveLoader::new().load_path(path).unwrap_err();
    assert!(matches!(err, GbmError::MalformedRecord { line: 2, .. }));
}
