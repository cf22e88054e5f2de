//! Common interface for one-dimensional interpolators.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolator over a sampled domain.
///
/// Implementors are immutable once constructed, so a single instance can be
/// shared by every sampling strategy of a run.
pub trait Interpolator<T: Float> {
    /// Evaluate the interpolant at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the sampled range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);

    /// Evaluate the interpolant at every point of `xs`.
    ///
    /// The result has the same length and order as `xs`. The first failing
    /// query aborts the whole evaluation.
    fn interpolate_many(&self, xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        xs.iter().map(|&x| self.interpolate(x)).collect()
    }
}
