//! Explicit memoisation of interpolants keyed by sample-set content.
//!
//! Repeated runs over the same data (a sample-count sweep, or a user
//! re-running with a new seed) reuse the interpolant instead of re-sorting
//! and de-duplicating the samples. The cache is owned by its caller; there is
//! no process-wide instance, and invalidation is manual.

use integral_core::math::interpolators::LinearInterpolator;
use integral_core::types::{InterpolationError, SampleSet};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// Content hash of a sample set (bit patterns of its sorted points).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SampleKey(u64);

impl SampleKey {
    /// Computes the key of `samples`.
    pub fn of(samples: &SampleSet) -> Self {
        let mut hasher = DefaultHasher::new();
        samples.len().hash(&mut hasher);
        for (x, y) in samples.xs().iter().zip(samples.ys()) {
            x.to_bits().hash(&mut hasher);
            y.to_bits().hash(&mut hasher);
        }
        Self(hasher.finish())
    }
}

struct CacheEntry {
    samples: SampleSet,
    interpolant: Arc<LinearInterpolator<f64>>,
}

/// Interpolant cache keyed by [`SampleKey`].
///
/// Entries also keep their sample set, so a hash collision rebuilds instead
/// of returning another data set's interpolant.
///
/// # Example
///
/// ```
/// use integral_core::types::SampleSet;
/// use integral_mc::cache::InterpolantCache;
/// use std::sync::Arc;
///
/// let samples = SampleSet::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
/// let mut cache = InterpolantCache::new();
///
/// let a = cache.get_or_build(&samples).unwrap();
/// let b = cache.get_or_build(&samples).unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
///
/// cache.invalidate(&samples);
/// assert!(cache.is_empty());
/// ```
#[derive(Default)]
pub struct InterpolantCache {
    entries: HashMap<SampleKey, CacheEntry>,
}

impl InterpolantCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached interpolant of `samples`, building it on a miss.
    pub fn get_or_build(
        &mut self,
        samples: &SampleSet,
    ) -> Result<Arc<LinearInterpolator<f64>>, InterpolationError> {
        let key = SampleKey::of(samples);

        if let Some(entry) = self.entries.get(&key) {
            if entry.samples == *samples {
                debug!(key = key.0, "interpolant cache hit");
                return Ok(Arc::clone(&entry.interpolant));
            }
        }

        debug!(key = key.0, points = samples.len(), "interpolant cache miss");
        let interpolant = Arc::new(LinearInterpolator::from_sample_set(samples)?);
        self.entries.insert(
            key,
            CacheEntry {
                samples: samples.clone(),
                interpolant: Arc::clone(&interpolant),
            },
        );
        Ok(interpolant)
    }

    /// Drops the entry for `samples`. Returns true if one was present.
    pub fn invalidate(&mut self, samples: &SampleSet) -> bool {
        self.entries.remove(&SampleKey::of(samples)).is_some()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached interpolants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for InterpolantCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpolantCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}
