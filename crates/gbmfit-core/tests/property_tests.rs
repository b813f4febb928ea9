//! Property-based tests for calibration invariants.
//!
//! These tests verify properties that must hold for every valid curve:
//! - Volatility is never negative
//! - Identical input gives identical output
//! - Flat prices give zero drift and volatility
//! - Date spacing, not observation count, drives annualization
//! - Non-increasing dates are always rejected

use gbmfit_core::prelude::*;
use proptest::prelude::*;

/// Builds a curve from day gaps and prices, starting at 2020-01-01.
fn build_curve(gaps: &[i64], prices: &[f64]) -> Vec<Observation> {
    let mut date = Date::from_ymd(2020, 1, 1).unwrap();
    let mut observations = Vec::with_capacity(prices.len());
    for (i, &price) in prices.iter().enumerate() {
        if i > 0 {
            date = date.add_days(gaps[i - 1]);
        }
        observations.push(Observation::new(date, price));
    }
    observations
}

/// Strategy for a valid curve: 2..40 points, positive prices, gaps of 1..60 days.
fn valid_curve() -> impl Strategy<Value = (Vec<i64>, Vec<f64>)> {
    (2usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec(1i64..60, n - 1),
            prop::collection::vec(0.01f64..10_000.0, n),
        )
    })
}

proptest! {
    #[test]
    fn sigma_is_non_negative((gaps, prices) in valid_curve()) {
        let params = calibrate(build_curve(&gaps, &prices)).unwrap();
        prop_assert!(params.sigma() >= 0.0);
        prop_assert!(params.is_finite());
    }

    #[test]
    fn calibration_is_deterministic((gaps, prices) in valid_curve()) {
        let first = calibrate(build_curve(&gaps, &prices)).unwrap();
        let second = calibrate(build_curve(&gaps, &prices)).unwrap();
        prop_assert_eq!(first.mu().to_bits(), second.mu().to_bits());
        prop_assert_eq!(first.sigma().to_bits(), second.sigma().to_bits());
    }

    #[test]
    fn flat_prices_give_zero_parameters(
        gaps in prop::collection::vec(1i64..60, 1..30),
        price in 0.01f64..10_000.0,
    ) {
        let prices = vec![price; gaps.len() + 1];
        let params = calibrate(build_curve(&gaps, &prices)).unwrap();
        prop_assert_eq!(params.mu(), 0.0);
        prop_assert_eq!(params.sigma(), 0.0);
    }

    #[test]
    fn stretching_the_calendar_rescales_the_rate(
        (gaps, prices) in valid_curve(),
        factor in 2i64..5,
    ) {
        // Multiplying every gap by k divides the log-drift by k and the
        // variance by k.
        let base = calibrate(build_curve(&gaps, &prices)).unwrap();
        let stretched_gaps: Vec<i64> = gaps.iter().map(|g| g * factor).collect();
        let stretched = calibrate(build_curve(&stretched_gaps, &prices)).unwrap();

        let k = factor as f64;
        let tolerance = 1e-9 * (1.0 + base.log_drift().abs());
        prop_assert!((stretched.log_drift() * k - base.log_drift()).abs() <= tolerance);
        let var_tolerance = 1e-9 * (1.0 + base.variance());
        prop_assert!((stretched.variance() * k - base.variance()).abs() <= var_tolerance);
    }

    #[test]
    fn repeated_date_is_rejected(
        (gaps, prices) in valid_curve(),
        index in any::<prop::sample::Index>(),
    ) {
        let mut gaps = gaps;
        let at = index.index(gaps.len());
        gaps[at] = 0;
        let err = calibrate(build_curve(&gaps, &prices)).unwrap_err();
        let is_unordered = matches!(err, GbmError::UnorderedDates { .. });
        prop_assert!(is_unordered);
    }

    #[test]
    fn decreasing_date_is_rejected(
        (gaps, prices) in valid_curve(),
        index in any::<prop::sample::Index>(),
    ) {
        let mut gaps = gaps;
        let at = index.index(gaps.len());
        gaps[at] = -gaps[at];
        let err = calibrate(build_curve(&gaps, &prices)).unwrap_err();
        let is_unordered = matches!(err, GbmError::UnorderedDates { .. });
        prop_assert!(is_unordered);
    }
}

#[test]
fn spacing_changes_result_for_identical_prices() {
    let prices = [100.0, 103.0, 98.0, 105.0, 107.5];
    let daily = calibrate(build_curve(&[1, 1, 1, 1], &prices)).unwrap();
    let irregular = calibrate(build_curve(&[1, 3, 14, 2], &prices)).unwrap();

    assert_ne!(daily.mu(), irregular.mu());
    assert_ne!(daily.sigma(), irregular.sigma());
}

#[test]
fn calibration_is_safe_across_threads() {
    let handles: Vec<_> = (1..=4)
        .map(|k| {
            std::thread::spawn(move || {
                let prices = [100.0, 101.0, 99.5, 102.0];
                calibrate(build_curve(&[k, k, k], &prices)).unwrap()
            })
        })
        .collect();

    let results: Vec<ModelParams> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for window in results.windows(2) {
        assert!(window[0].log_drift() > window[1].log_drift());
    }
}
