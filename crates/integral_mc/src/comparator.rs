//! Runs the three sampling strategies against one sample set and ranks them.
//!
//! # Run pipeline
//!
//! ```text
//! SampleSet ──┬── InterpolantCache ──► LinearInterpolator ──┐
//!             └── trapezoid_area ────► reference area ──────┤
//!                                                           ▼
//!               Uniform / Stratified / Importance (one RNG stream each)
//!                                                           │
//!                                                           ▼
//!                                 ComparisonReport (ranked by |error|)
//! ```
//!
//! Configuration is validated before anything else, and the first failure
//! aborts the run.

use crate::cache::InterpolantCache;
use crate::error::EstimationError;
use crate::mc::MonteCarloConfig;
use crate::report::{ComparisonReport, EstimateRecord};
use crate::rng::IntegratorRng;
use crate::strategy::SamplingStrategy;
use integral_core::types::SampleSet;
use tracing::{debug, info, warn};

/// Strategy comparison engine.
///
/// Owns its configuration and an [`InterpolantCache`], so repeated runs over
/// the same data skip rebuilding the interpolant.
///
/// # Example
///
/// ```
/// use integral_core::types::SampleSet;
/// use integral_mc::comparator::Comparator;
/// use integral_mc::mc::MonteCarloConfig;
///
/// let samples = SampleSet::new(&[0.0, 10.0, 20.0], &[0.0, 10.0, 0.0]).unwrap();
/// let config = MonteCarloConfig::builder().n_samples(10_000).seed(42).build().unwrap();
///
/// let mut comparator = Comparator::new(config);
/// let report = comparator.run(&samples).unwrap();
///
/// assert_eq!(report.reference_area, 100.0);
/// assert_eq!(report.records().len(), 3);
/// println!("{}: {}", report.winner().strategy, report.explanation());
/// ```
#[derive(Debug)]
pub struct Comparator {
    config: MonteCarloConfig,
    cache: InterpolantCache,
}

impl Comparator {
    /// Creates a comparator with an empty interpolant cache.
    pub fn new(config: MonteCarloConfig) -> Self {
        Self {
            config,
            cache: InterpolantCache::new(),
        }
    }

    /// Returns the run configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns the interpolant cache.
    #[inline]
    pub fn cache(&self) -> &InterpolantCache {
        &self.cache
    }

    /// Returns the interpolant cache for manual invalidation.
    #[inline]
    pub fn cache_mut(&mut self) -> &mut InterpolantCache {
        &mut self.cache
    }

    /// Runs all three strategies on `samples` with the configured sample count.
    ///
    /// An unseeded configuration draws a seed from OS entropy; the seed used
    /// is recorded in the report.
    ///
    /// # Errors
    ///
    /// - `EstimationError::Config` if the configuration is invalid
    /// - `EstimationError::Interpolation` if the interpolant cannot be built or evaluated
    pub fn run(&mut self, samples: &SampleSet) -> Result<ComparisonReport, EstimationError> {
        let config = self.config.clone();
        let seed = config.seed().unwrap_or_else(IntegratorRng::entropy_seed);
        self.run_seeded(samples, &config, seed)
    }

    /// Runs the comparison once per entry of `counts`, all with the same seed.
    ///
    /// Every count is validated before the first run starts.
    ///
    /// # Example
    ///
    /// ```
    /// use integral_core::types::SampleSet;
    /// use integral_mc::comparator::Comparator;
    /// use integral_mc::mc::MonteCarloConfig;
    ///
    /// let samples = SampleSet::new(&[0.0, 5.0, 10.0], &[0.0, 25.0, 100.0]).unwrap();
    /// let mut comparator = Comparator::new(MonteCarloConfig::default().with_seed(7));
    ///
    /// let reports = comparator.sweep(&samples, &[100, 1_000, 10_000]).unwrap();
    /// assert_eq!(reports.len(), 3);
    /// assert!(reports.iter().all(|r| r.seed == 7));
    /// assert_eq!(comparator.cache().len(), 1);
    /// ```
    pub fn sweep(
        &mut self,
        samples: &SampleSet,
        counts: &[usize],
    ) -> Result<Vec<ComparisonReport>, EstimationError> {
        let configs: Vec<MonteCarloConfig> = counts
            .iter()
            .map(|&n| {
                let config = self.config.with_n_samples(n);
                config.validate().map(|_| config)
            })
            .collect::<Result<_, _>>()?;

        let seed = self.config.seed().unwrap_or_else(IntegratorRng::entropy_seed);
        info!(seed, counts = ?counts, "starting sample-count sweep");

        configs
            .iter()
            .map(|config| self.run_seeded(samples, config, seed))
            .collect()
    }

    fn run_seeded(
        &mut self,
        samples: &SampleSet,
        config: &MonteCarloConfig,
        seed: u64,
    ) -> Result<ComparisonReport, EstimationError> {
        config.validate()?;

        if samples.has_duplicate_x() {
            warn!(
                points = samples.len(),
                distinct = samples.distinct_x_count(),
                "duplicate x values: interpolant keeps the last occurrence of each"
            );
        }

        let interpolant = self.cache.get_or_build(samples)?;
        let domain = samples.domain();
        let reference_area = samples.trapezoid_area();

        info!(
            n_samples = config.n_samples(),
            seed,
            stratified = %config.stratified(),
            lower = domain.lower,
            upper = domain.upper,
            reference_area,
            "running strategy comparison"
        );

        let mut records = [EstimateRecord::new(SamplingStrategy::Uniform, 0.0, 0.0); 3];
        for (slot, strategy) in records.iter_mut().zip(SamplingStrategy::ALL) {
            let mut rng = IntegratorRng::for_stream(seed, strategy.stream());
            let estimate = strategy.estimate(interpolant.as_ref(), domain, config, &mut rng)?;
            *slot = EstimateRecord::new(strategy, estimate, reference_area);
            debug!(
                strategy = strategy.name(),
                estimate,
                absolute_error = slot.absolute_error,
                "strategy finished"
            );
        }

        let report = ComparisonReport::new(
            reference_area,
            config.n_samples(),
            seed,
            config.stratified(),
            records,
        );
        info!(
            winner = report.winner().strategy.name(),
            absolute_error = report.winner().absolute_error,
            "comparison complete"
        );
        Ok(report)
    }
}

/// One-shot comparison over two parallel sequences.
///
/// Validates the sequences into a [`SampleSet`] before any sampling runs.
///
/// # Example
///
/// ```
/// use integral_mc::comparator::compare_sequences;
/// use integral_mc::error::EstimationError;
/// use integral_mc::mc::MonteCarloConfig;
///
/// let err = compare_sequences(&[1.0], &[1.0], &MonteCarloConfig::default()).unwrap_err();
/// assert!(matches!(err, EstimationError::Samples(_)));
/// ```
pub fn compare_sequences(
    xs: &[f64],
    ys: &[f64],
    config: &MonteCarloConfig,
) -> Result<ComparisonReport, EstimationError> {
    config.validate()?;
    let samples = SampleSet::new(xs, ys)?;
    Comparator::new(config.clone()).run(&samples)
}
