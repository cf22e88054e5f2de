//! Linear interpolation implementation.

use super::Interpolator;
use crate::types::{InterpolationError, SampleSet};
use num_traits::Float;

/// Behaviour for queries outside the sampled domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extrapolation {
    /// Extend the nearest edge segment's straight line.
    #[default]
    Linear,
    /// Reject the query with `InterpolationError::OutOfBounds`.
    Forbid,
}

/// Piecewise linear interpolator.
///
/// Stores sorted, de-duplicated (x, y) knots and performs linear interpolation
/// between adjacent knots. Outside the sampled domain the edge segments are
/// extended according to the [`Extrapolation`] policy.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Data points are stably sorted by x-coordinate during construction. Repeated
/// x values keep the y of their LAST occurrence in input order, so the
/// interpolant is deterministic for a given input sequence. At least 2
/// distinct x values are required.
///
/// # Example
///
/// ```
/// use integral_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// assert!((interp.interpolate(-1.0).unwrap() + 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted, distinct x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
    extrapolation: Extrapolation,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y data points.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of x-coordinates, in any order
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or non-finite values
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::DegenerateDomain)` - Fewer than 2 distinct x values
    ///
    /// # Example
    ///
    /// ```
    /// use integral_core::math::interpolators::{Interpolator, LinearInterpolator};
    ///
    /// // Duplicate x = 1.0: the last occurrence (y = 7.0) wins
    /// let interp = LinearInterpolator::new(&[0.0, 1.0, 1.0], &[0.0, 5.0, 7.0]).unwrap();
    /// assert_eq!(interp.xs(), &[0.0, 1.0]);
    /// assert_eq!(interp.interpolate(1.0).unwrap(), 7.0);
    ///
    /// // Insufficient data
    /// assert!(LinearInterpolator::new(&[0.0], &[0.0]).is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        if let Some(index) = xs
            .iter()
            .zip(ys)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(InterpolationError::InvalidInput(format!(
                "non-finite data point at index {}",
                index
            )));
        }

        // Stable sort keeps duplicates in input order
        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut knots_x: Vec<T> = Vec::with_capacity(pairs.len());
        let mut knots_y: Vec<T> = Vec::with_capacity(pairs.len());
        for (x, y) in pairs {
            match knots_x.last() {
                Some(&last) if last == x => {
                    if let Some(slot) = knots_y.last_mut() {
                        *slot = y;
                    }
                }
                _ => {
                    knots_x.push(x);
                    knots_y.push(y);
                }
            }
        }

        if knots_x.len() < 2 {
            return Err(InterpolationError::DegenerateDomain { count: xs.len() });
        }

        Ok(Self {
            xs: knots_x,
            ys: knots_y,
            extrapolation: Extrapolation::default(),
        })
    }

    /// Set the extrapolation policy.
    #[inline]
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Returns the extrapolation policy.
    #[inline]
    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// Returns a reference to the sorted, distinct x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of knots after de-duplication.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no knots.
    /// Note: This should never be true for a valid interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Find the segment index for interpolation using binary search.
    ///
    /// Returns the index `i` such that `xs[i] <= x < xs[i+1]`,
    /// clamped to valid segment range [0, n-2]. Clamping selects the
    /// edge segment for queries outside the domain.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);

        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }
}

impl LinearInterpolator<f64> {
    /// Build the interpolant of a validated sample set.
    ///
    /// # Example
    ///
    /// ```
    /// use integral_core::math::interpolators::{Interpolator, LinearInterpolator};
    /// use integral_core::types::SampleSet;
    ///
    /// let samples = SampleSet::new(&[0.0, 10.0, 20.0], &[0.0, 10.0, 0.0]).unwrap();
    /// let interp = LinearInterpolator::from_sample_set(&samples).unwrap();
    /// assert_eq!(interp.interpolate(10.0).unwrap(), 10.0);
    /// ```
    pub fn from_sample_set(samples: &SampleSet) -> Result<Self, InterpolationError> {
        Self::new(samples.xs(), samples.ys())
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate value at point `x` using piecewise linear interpolation.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    ///
    /// The same formula with the edge segment's knots gives the linear
    /// extrapolation outside `[x_min, x_max]`.
    ///
    /// # Errors
    ///
    /// `InterpolationError::OutOfBounds` if `x` is outside the domain and the
    /// policy is [`Extrapolation::Forbid`].
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let x_min = self.xs[0];
        let x_max = self.xs[self.xs.len() - 1];

        if self.extrapolation == Extrapolation::Forbid && (x < x_min || x > x_max) {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + (y1 - y0) * t)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
