//! Stratified Monte Carlo estimator.

use super::check_inputs;
use crate::error::EstimationError;
use crate::mc::StratifiedMode;
use crate::rng::IntegratorRng;
use integral_core::math::interpolators::Interpolator;
use integral_core::types::Domain;

/// Estimate `∫ f` over `domain` with one representative point per stratum.
///
/// The domain is split into `n` equal-width strata of width `h = (b - a) / n`:
///
/// ```text
/// x_i = a + (i + θ_i) · h,   I ≈ h · Σ f(x_i)
/// ```
///
/// with `θ_i = 1/2` for [`StratifiedMode::Midpoint`] and `θ_i ~ U[0, 1)` for
/// [`StratifiedMode::Jittered`]. The midpoint variant never touches `rng`.
///
/// # Example
///
/// ```
/// use integral_core::math::interpolators::LinearInterpolator;
/// use integral_core::types::Domain;
/// use integral_mc::mc::StratifiedMode;
/// use integral_mc::rng::IntegratorRng;
/// use integral_mc::strategy::stratified;
///
/// let f = LinearInterpolator::new(&[0.0, 10.0], &[0.0, 10.0]).unwrap();
/// let domain = Domain { lower: 0.0, upper: 10.0 };
/// let mut rng = IntegratorRng::from_seed(42);
///
/// let area = stratified::estimate(&f, domain, 100, StratifiedMode::Midpoint, &mut rng).unwrap();
/// assert!((area - 50.0).abs() < 1e-9);
/// ```
pub fn estimate<I: Interpolator<f64>>(
    f: &I,
    domain: Domain,
    n: usize,
    mode: StratifiedMode,
    rng: &mut IntegratorRng,
) -> Result<f64, EstimationError> {
    check_inputs(domain, n)?;
    let h = domain.width() / n as f64;

    let mut sum = 0.0;
    for i in 0..n {
        let theta = match mode {
            StratifiedMode::Midpoint => 0.5,
            StratifiedMode::Jittered => rng.gen_uniform(),
        };
        sum += f.interpolate(domain.lower + (i as f64 + theta) * h)?;
    }

    Ok(h * sum)
}
