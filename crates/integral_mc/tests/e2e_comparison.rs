//! End-to-end scenarios for the strategy comparison.
//!
//! # Test Categories
//!
//! 1. **Reference area**: trapezoidal baseline on known data
//! 2. **Triangular profile**: all strategies within 5% of the reference
//! 3. **Reproducibility**: identical inputs and seed give identical estimates
//! 4. **Invalid input**: classified errors before any sampling

use approx::assert_relative_eq;
use integral_core::types::{SampleError, SampleSet};
use integral_mc::mc::{ConfigError, MonteCarloConfig, StratifiedMode};
use integral_mc::{compare_sequences, Comparator, EstimationError, SamplingStrategy};

fn config(n: usize, seed: u64, stratified: StratifiedMode) -> MonteCarloConfig {
    MonteCarloConfig::builder()
        .n_samples(n)
        .seed(seed)
        .stratified(stratified)
        .build()
        .unwrap()
}

// ============================================================================
// Reference Area
// ============================================================================

#[test]
fn test_reference_area_identity_line() {
    let samples = SampleSet::new(&[0.0, 5.0, 10.0], &[0.0, 5.0, 10.0]).unwrap();
    let report = Comparator::new(config(100, 1, StratifiedMode::Midpoint))
        .run(&samples)
        .unwrap();
    assert_relative_eq!(report.reference_area, 50.0, epsilon = 1e-12);
}

#[test]
fn test_reference_area_independent_of_input_order() {
    let report = compare_sequences(
        &[20.0, 10.0, 0.0],
        &[0.0, 10.0, 0.0],
        &config(100, 1, StratifiedMode::Midpoint),
    )
    .unwrap();
    assert_relative_eq!(report.reference_area, 100.0, epsilon = 1e-12);
}

// ============================================================================
// Triangular Profile
// ============================================================================

#[test]
fn test_triangle_all_strategies_within_five_percent() {
    let samples = SampleSet::new(&[0.0, 10.0, 20.0], &[0.0, 10.0, 0.0]).unwrap();

    for mode in [StratifiedMode::Midpoint, StratifiedMode::Jittered] {
        for seed in [1_u64, 42, 2024] {
            let report = Comparator::new(config(10_000, seed, mode))
                .run(&samples)
                .unwrap();

            assert_relative_eq!(report.reference_area, 100.0, epsilon = 1e-12);
            assert_eq!(report.records().len(), 3);

            for record in report.records() {
                assert!(record.absolute_error >= 0.0);
                assert!(
                    (record.estimate - 100.0).abs() <= 5.0,
                    "{} ({:?}, seed {}) estimated {}",
                    record.strategy,
                    mode,
                    seed,
                    record.estimate
                );
                assert_relative_eq!(
                    record.absolute_error,
                    (record.estimate - report.reference_area).abs()
                );
            }

            let errors: Vec<f64> = report.records().iter().map(|r| r.absolute_error).collect();
            assert!(errors.windows(2).all(|w| w[0] <= w[1]), "{:?}", errors);
            assert_eq!(report.winner().absolute_error, errors[0]);
        }
    }
}

#[test]
fn test_every_strategy_reported_exactly_once() {
    let samples = SampleSet::new(&[0.0, 10.0, 20.0], &[0.0, 10.0, 0.0]).unwrap();
    let report = Comparator::new(config(10_000, 7, StratifiedMode::Midpoint))
        .run(&samples)
        .unwrap();

    let mut strategies: Vec<SamplingStrategy> =
        report.records().iter().map(|r| r.strategy).collect();
    strategies.sort();
    assert_eq!(strategies, SamplingStrategy::ALL.to_vec());
}

#[test]
fn test_winner_explanation_matches_winner() {
    let samples = SampleSet::new(&[0.0, 10.0, 20.0], &[0.0, 10.0, 0.0]).unwrap();
    let report = Comparator::new(config(10_000, 7, StratifiedMode::Midpoint))
        .run(&samples)
        .unwrap();
    assert_eq!(report.explanation(), report.winner().strategy.explanation());
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_estimates_bit_for_bit_reproducible() {
    let xs = [14.2, 16.4, 11.9, 15.2, 18.5, 22.1, 19.4, 25.1, 23.4, 18.1, 22.6, 17.2];
    let ys = [
        215.0, 325.0, 185.0, 332.0, 406.0, 522.0, 412.0, 614.0, 544.0, 421.0, 445.0, 408.0,
    ];

    for mode in [StratifiedMode::Midpoint, StratifiedMode::Jittered] {
        let first = compare_sequences(&xs, &ys, &config(5_000, 99, mode)).unwrap();
        for _ in 0..3 {
            let again = compare_sequences(&xs, &ys, &config(5_000, 99, mode)).unwrap();
            for strategy in SamplingStrategy::ALL {
                assert_eq!(
                    first.record(strategy).unwrap().estimate.to_bits(),
                    again.record(strategy).unwrap().estimate.to_bits()
                );
            }
        }
    }
}

#[test]
fn test_different_seeds_change_random_strategies_only() {
    let samples = SampleSet::new(&[0.0, 10.0, 20.0], &[0.0, 10.0, 0.0]).unwrap();
    let a = Comparator::new(config(1_000, 1, StratifiedMode::Midpoint))
        .run(&samples)
        .unwrap();
    let b = Comparator::new(config(1_000, 2, StratifiedMode::Midpoint))
        .run(&samples)
        .unwrap();

    let estimate = |r: &integral_mc::ComparisonReport, s| r.record(s).unwrap().estimate;
    assert_ne!(
        estimate(&a, SamplingStrategy::Uniform),
        estimate(&b, SamplingStrategy::Uniform)
    );
    assert_ne!(
        estimate(&a, SamplingStrategy::Importance),
        estimate(&b, SamplingStrategy::Importance)
    );
    assert_eq!(
        estimate(&a, SamplingStrategy::Stratified),
        estimate(&b, SamplingStrategy::Stratified)
    );
}

// ============================================================================
// Extreme Scales
// ============================================================================

#[test]
fn test_estimates_finite_far_from_unit_scale() {
    for width in [1e160, 1e-170] {
        let samples = SampleSet::new(&[0.0, width], &[1.0, 1.0]).unwrap();
        let report = Comparator::new(config(1_000, 1, StratifiedMode::Midpoint))
            .run(&samples)
            .unwrap();

        assert_relative_eq!(report.reference_area, width, max_relative = 1e-12);
        for record in report.records() {
            assert!(
                record.estimate.is_finite() && record.estimate > 0.0,
                "width {}: {} estimated {}",
                width,
                record.strategy,
                record.estimate
            );
            assert!(
                record.absolute_error / width < 0.5,
                "width {}: {} relative error {}",
                width,
                record.strategy,
                record.absolute_error / width
            );
        }
    }
}

// ============================================================================
// Invalid Input
// ============================================================================

#[test]
fn test_single_point_is_degenerate() {
    let err = compare_sequences(&[3.0], &[4.0], &MonteCarloConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        EstimationError::Samples(SampleError::DegenerateInput(_))
    ));
}

#[test]
fn test_identical_x_is_degenerate() {
    let err = compare_sequences(&[3.0, 3.0, 3.0], &[4.0, 5.0, 6.0], &MonteCarloConfig::default())
        .unwrap_err();
    assert!(matches!(
        err,
        EstimationError::Samples(SampleError::DegenerateInput(_))
    ));
}

#[test]
fn test_mismatched_lengths() {
    let err = compare_sequences(&[0.0, 1.0, 2.0], &[4.0, 5.0], &MonteCarloConfig::default())
        .unwrap_err();
    assert_eq!(
        err,
        EstimationError::Samples(SampleError::MismatchedLength { x_len: 3, y_len: 2 })
    );
}

#[test]
fn test_zero_sample_count() {
    let err = MonteCarloConfig::builder().n_samples(0).build().unwrap_err();
    assert_eq!(err, ConfigError::InvalidSampleCount(0));

    let err = compare_sequences(
        &[0.0, 1.0],
        &[0.0, 1.0],
        &MonteCarloConfig::default().with_n_samples(0),
    )
    .unwrap_err();
    assert_eq!(err, EstimationError::Config(ConfigError::InvalidSampleCount(0)));
}
