//! Importance-sampling estimator with a fixed quadratic-CDF proposal.
//!
//! The proposal density `p(x) = 2 (x - a) / (b - a)²` grows linearly toward
//! the upper bound and does not depend on `f`. It only reduces variance when
//! `f` itself is concentrated toward the upper end of the domain, and the
//! ratio `f / p` has unbounded variance whenever `f(a) ≠ 0`.

use super::check_inputs;
use crate::error::EstimationError;
use crate::rng::IntegratorRng;
use integral_core::math::interpolators::Interpolator;
use integral_core::types::Domain;

/// Estimate `∫ f` over `domain` from `n` draws of the proposal density.
///
/// ```text
/// u_i ~ U(0, 1],   x_i = a + (b - a) · √u_i
/// p(x) = 2 (x - a) / (b - a)²,   I ≈ (1/n) Σ f(x_i) / p(x_i)
/// ```
///
/// Each weight is computed as `f(x_i) / (2 √u_i)` and the width is applied
/// once to their mean, since `f / p = (b - a) · f(x_i) / (2 √u_i)`. Neither
/// `(b - a)²` nor a density near zero is ever formed, so domains far from
/// unit scale neither overflow nor underflow.
///
/// # Example
///
/// ```
/// use integral_core::math::interpolators::LinearInterpolator;
/// use integral_core::types::Domain;
/// use integral_mc::rng::IntegratorRng;
/// use integral_mc::strategy::importance;
///
/// let f = LinearInterpolator::new(&[0.0, 10.0], &[0.0, 10.0]).unwrap();
/// let domain = Domain { lower: 0.0, upper: 10.0 };
/// let mut rng = IntegratorRng::from_seed(42);
///
/// // f is proportional to p, so every weight equals the integral
/// let area = importance::estimate(&f, domain, 1_000, &mut rng).unwrap();
/// assert!((area - 50.0).abs() < 1e-9);
/// ```
pub fn estimate<I: Interpolator<f64>>(
    f: &I,
    domain: Domain,
    n: usize,
    rng: &mut IntegratorRng,
) -> Result<f64, EstimationError> {
    check_inputs(domain, n)?;
    let width = domain.width();

    let mut sum = 0.0;
    for _ in 0..n {
        let root = rng.gen_open_closed().sqrt();
        sum += f.interpolate(domain.lower + width * root)? / (2.0 * root);
    }

    Ok(width * (sum / n as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use integral_core::math::interpolators::LinearInterpolator;

    #[test]
    fn test_triangle_within_tolerance() {
        let f = LinearInterpolator::new(&[0.0, 10.0, 20.0], &[0.0, 10.0, 0.0]).unwrap();
        let domain = Domain {
            lower: 0.0,
            upper: 20.0,
        };
        let mut rng = IntegratorRng::from_seed(2024);
        let area = estimate(&f, domain, 10_000, &mut rng).unwrap();
        assert!((area - 100.0).abs() < 5.0, "importance estimate {}", area);
    }

    #[test]
    fn test_proportional_integrand_is_exact() {
        // f(x) = 3 (x - 1) on [1, 5] is proportional to p
        let f = LinearInterpolator::new(&[1.0, 5.0], &[0.0, 12.0]).unwrap();
        let domain = Domain {
            lower: 1.0,
            upper: 5.0,
        };
        let mut rng = IntegratorRng::from_seed(8);
        let area = estimate(&f, domain, 2_000, &mut rng).unwrap();
        assert!((area - 24.0).abs() < 1e-9, "estimate {}", area);
    }

    #[test]
    fn test_weights_stay_finite_far_from_origin() {
        // Large offset domain: a zero-width offset would give p = 0
        let f = LinearInterpolator::new(&[1e9, 1e9 + 1.0], &[0.0, 1.0]).unwrap();
        let domain = Domain {
            lower: 1e9,
            upper: 1e9 + 1.0,
        };
        let mut rng = IntegratorRng::from_seed(21);
        let area = estimate(&f, domain, 10_000, &mut rng).unwrap();
        assert!(area.is_finite());
    }

    #[test]
    fn test_proportional_integrand_exact_at_extreme_scales() {
        for width in [1e160, 1e-170] {
            let f = LinearInterpolator::new(&[0.0, width], &[0.0, 1.0]).unwrap();
            let domain = Domain {
                lower: 0.0,
                upper: width,
            };
            let mut rng = IntegratorRng::from_seed(1);
            let area = estimate(&f, domain, 1_000, &mut rng).unwrap();
            assert!(area.is_finite() && area > 0.0, "width {}: {}", width, area);
            assert!(
                ((area - 0.5 * width) / (0.5 * width)).abs() < 1e-9,
                "width {}: {}",
                width,
                area
            );
        }
    }

    #[test]
    fn test_reproducible_for_same_seed() {
        let f = LinearInterpolator::new(&[0.0, 4.0], &[1.0, 3.0]).unwrap();
        let domain = Domain {
            lower: 0.0,
            upper: 4.0,
        };
        let a = estimate(&f, domain, 1_000, &mut IntegratorRng::from_seed(6)).unwrap();
        let b = estimate(&f, domain, 1_000, &mut IntegratorRng::from_seed(6)).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
