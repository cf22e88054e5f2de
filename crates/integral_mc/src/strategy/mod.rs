//! Monte Carlo sampling strategies.
//!
//! Every strategy estimates `∫_a^b f(x) dx` for the run's interpolant `f`
//! over the sampled domain `[a, b]` from `N` evaluations of `f`:
//!
//! | Strategy | Sample points | Estimate |
//! |----------|---------------|----------|
//! | Uniform | `x ~ U(a, b)` | `(b - a) · mean f(x)` |
//! | Stratified | one point per equal-width stratum | `(b - a) / N · Σ f(x)` |
//! | Importance | `x = a + (b - a) · √u`, `u ~ U(0, 1]` | `mean f(x) / p(x)` |
//!
//! Strategies are dispatched statically through [`SamplingStrategy`].

pub mod importance;
pub mod stratified;
pub mod uniform;

use crate::error::EstimationError;
use crate::mc::{ConfigError, MonteCarloConfig};
use crate::rng::IntegratorRng;
use integral_core::math::interpolators::Interpolator;
use integral_core::types::{Domain, SampleError};
use std::fmt;

/// One of the three competing sampling strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplingStrategy {
    /// Plain mean-value Monte Carlo.
    Uniform,
    /// One representative point per equal-width stratum.
    Stratified,
    /// Fixed quadratic-CDF proposal skewed toward the upper bound.
    Importance,
}

impl SamplingStrategy {
    /// Every strategy, in reporting order. Ties in absolute error keep this order.
    pub const ALL: [SamplingStrategy; 3] = [
        SamplingStrategy::Uniform,
        SamplingStrategy::Stratified,
        SamplingStrategy::Importance,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            SamplingStrategy::Uniform => "Uniform",
            SamplingStrategy::Stratified => "Stratified",
            SamplingStrategy::Importance => "Importance",
        }
    }

    /// Fixed rationale shown when this strategy wins a comparison.
    pub fn explanation(&self) -> &'static str {
        match self {
            SamplingStrategy::Uniform => {
                "Uniform sampling draws random points with equal probability across the whole \
                 interval. It is simple, but accuracy can drop when the data is unevenly spread."
            }
            SamplingStrategy::Stratified => {
                "Stratified sampling splits the interval into equal-width strata and samples a \
                 representative point (such as the midpoint) from each one. It gives a stable \
                 integral estimate even when the data is not evenly spread."
            }
            SamplingStrategy::Importance => {
                "Importance sampling generates more samples where the function value is high. \
                 It raises accuracy efficiently and is very effective at reducing the error."
            }
        }
    }

    /// RNG stream id of this strategy within a run.
    #[inline]
    pub fn stream(&self) -> u64 {
        match self {
            SamplingStrategy::Uniform => 0,
            SamplingStrategy::Stratified => 1,
            SamplingStrategy::Importance => 2,
        }
    }

    /// Estimate the integral of `f` over `domain` with this strategy.
    ///
    /// # Errors
    ///
    /// - `EstimationError::Samples` if `domain` has zero or non-finite width
    /// - `EstimationError::Config` if the configured sample count is 0
    /// - `EstimationError::Interpolation` for the first failing evaluation of `f`
    pub fn estimate<I: Interpolator<f64>>(
        &self,
        f: &I,
        domain: Domain,
        config: &MonteCarloConfig,
        rng: &mut IntegratorRng,
    ) -> Result<f64, EstimationError> {
        let n = config.n_samples();
        match self {
            SamplingStrategy::Uniform => uniform::estimate(f, domain, n, rng),
            SamplingStrategy::Stratified => {
                stratified::estimate(f, domain, n, config.stratified(), rng)
            }
            SamplingStrategy::Importance => importance::estimate(f, domain, n, rng),
        }
    }
}

/// Preconditions shared by every estimator: `n > 0` and a positive, finite
/// domain width.
pub(crate) fn check_inputs(domain: Domain, n: usize) -> Result<(), EstimationError> {
    if n == 0 {
        return Err(ConfigError::InvalidSampleCount(n).into());
    }
    let width = domain.width();
    if !(width.is_finite() && width > 0.0) {
        return Err(SampleError::DegenerateInput(format!(
            "domain [{}, {}] must have positive finite width",
            domain.lower, domain.upper
        ))
        .into());
    }
    Ok(())
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
