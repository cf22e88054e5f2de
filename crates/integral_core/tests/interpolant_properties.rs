//! Property tests for the piecewise linear interpolant and the reference
//! trapezoidal area.

use integral_core::math::interpolators::{Interpolator, LinearInterpolator};
use integral_core::types::SampleSet;
use proptest::prelude::*;

/// Strictly increasing abscissae with arbitrary finite ordinates.
fn knots_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.01f64..5.0, -100.0f64..100.0), 2..40).prop_map(|steps| {
        let mut x = -50.0;
        let mut xs = Vec::with_capacity(steps.len());
        let mut ys = Vec::with_capacity(steps.len());
        for (dx, y) in steps {
            x += dx;
            xs.push(x);
            ys.push(y);
        }
        (xs, ys)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_round_trip_at_sample_points((xs, ys) in knots_strategy()) {
        let samples = SampleSet::new(&xs, &ys).unwrap();
        let interp = LinearInterpolator::from_sample_set(&samples).unwrap();

        for (&x, &y) in xs.iter().zip(&ys) {
            let value = interp.interpolate(x).unwrap();
            prop_assert!(
                (value - y).abs() <= 1e-9 * (1.0 + y.abs()),
                "interpolate({}) = {}, expected {}", x, value, y
            );
        }
    }

    #[test]
    fn test_extrapolation_follows_edge_segments(
        (xs, ys) in knots_strategy(),
        offset in 0.1f64..20.0,
    ) {
        let interp = LinearInterpolator::new(&xs, &ys).unwrap();
        let n = xs.len();

        let low_slope = (ys[1] - ys[0]) / (xs[1] - xs[0]);
        let expected_low = ys[0] - low_slope * offset;
        let low = interp.interpolate(xs[0] - offset).unwrap();
        prop_assert!((low - expected_low).abs() <= 1e-6 * (1.0 + expected_low.abs()));

        let high_slope = (ys[n - 1] - ys[n - 2]) / (xs[n - 1] - xs[n - 2]);
        let expected_high = ys[n - 1] + high_slope * offset;
        let high = interp.interpolate(xs[n - 1] + offset).unwrap();
        prop_assert!((high - expected_high).abs() <= 1e-6 * (1.0 + expected_high.abs()));
    }

    #[test]
    fn test_interpolation_stays_within_segment_bounds(
        (xs, ys) in knots_strategy(),
        fraction in 0.0f64..1.0,
    ) {
        let interp = LinearInterpolator::new(&xs, &ys).unwrap();
        let (lo, hi) = interp.domain();
        let x = lo + (hi - lo) * fraction;
        let y = interp.interpolate(x).unwrap();

        let y_min = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        let y_max = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(y >= y_min - 1e-9 && y <= y_max + 1e-9);
    }

    #[test]
    fn test_trapezoid_area_is_order_independent((xs, ys) in knots_strategy()) {
        let forward = SampleSet::new(&xs, &ys).unwrap();

        let rev_xs: Vec<f64> = xs.iter().rev().copied().collect();
        let rev_ys: Vec<f64> = ys.iter().rev().copied().collect();
        let reversed = SampleSet::new(&rev_xs, &rev_ys).unwrap();

        prop_assert_eq!(forward.trapezoid_area(), reversed.trapezoid_area());
    }
}

#[test]
fn test_reference_area_of_identity_line() {
    let samples = SampleSet::new(&[0.0, 5.0, 10.0], &[0.0, 5.0, 10.0]).unwrap();
    assert_eq!(samples.trapezoid_area(), 50.0);
}
