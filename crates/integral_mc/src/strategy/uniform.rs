//! Uniform (mean-value) Monte Carlo estimator.

use super::check_inputs;
use crate::error::EstimationError;
use crate::rng::IntegratorRng;
use integral_core::math::interpolators::Interpolator;
use integral_core::types::Domain;
use rand_distr::Uniform;

/// Estimate `∫ f` over `domain` from `n` independent uniform draws.
///
/// ```text
/// x_i ~ U(a, b),   I ≈ (b - a) · (1/n) Σ f(x_i)
/// ```
///
/// The variance is driven entirely by the variance of `f` over the domain.
/// A zero or non-finite `domain` width is `SampleError::DegenerateInput` and
/// `n == 0` is `ConfigError::InvalidSampleCount`.
///
/// # Example
///
/// ```
/// use integral_core::math::interpolators::LinearInterpolator;
/// use integral_core::types::Domain;
/// use integral_mc::rng::IntegratorRng;
/// use integral_mc::strategy::uniform;
///
/// let f = LinearInterpolator::new(&[0.0, 10.0], &[0.0, 10.0]).unwrap();
/// let domain = Domain { lower: 0.0, upper: 10.0 };
/// let mut rng = IntegratorRng::from_seed(42);
///
/// let area = uniform::estimate(&f, domain, 20_000, &mut rng).unwrap();
/// assert!((area - 50.0).abs() < 2.0);
/// ```
pub fn estimate<I: Interpolator<f64>>(
    f: &I,
    domain: Domain,
    n: usize,
    rng: &mut IntegratorRng,
) -> Result<f64, EstimationError> {
    check_inputs(domain, n)?;
    let dist = Uniform::new(domain.lower, domain.upper);

    let mut sum = 0.0;
    for _ in 0..n {
        sum += f.interpolate(rng.sample(&dist))?;
    }

    Ok(domain.width() * sum / n as f64)
}
