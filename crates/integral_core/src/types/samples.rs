//! Validated sample sets and the integration domain they span.
//!
//! A [`SampleSet`] holds observed (x, y) pairs, e.g. temperature against
//! ice cream profit. Construction validates the pairs once so that every
//! downstream computation (interpolation, quadrature, sampling) can rely on
//! a non-degenerate domain.

use super::error::SampleError;
use crate::math::quadrature::trapezoid_sorted;
use std::fmt;

/// Identifies which of the two parallel sequences a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Independent variable
    X,
    /// Dependent variable
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Closed integration interval `[lower, upper]`.
///
/// A `Domain` obtained from a [`SampleSet`] always has `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    /// Smallest sampled x
    pub lower: f64,
    /// Largest sampled x
    pub upper: f64,
}

impl Domain {
    /// Width `upper - lower` of the interval.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns true if `x` lies in the closed interval.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }
}

/// Observed (x, y) pairs sorted by x.
///
/// # Invariants
///
/// - At least 2 points and at least 2 distinct x values
/// - Every value is finite
/// - Points are stably sorted by x (ties keep their input order)
///
/// Duplicate x values are retained here; the interpolator resolves them.
///
/// # Examples
///
/// ```
/// use integral_core::types::{SampleError, SampleSet};
///
/// let samples = SampleSet::new(&[20.0, 0.0, 10.0], &[0.0, 0.0, 10.0]).unwrap();
/// assert_eq!(samples.xs(), &[0.0, 10.0, 20.0]);
/// assert_eq!(samples.trapezoid_area(), 100.0);
///
/// let err = SampleSet::new(&[1.0], &[2.0]).unwrap_err();
/// assert!(matches!(err, SampleError::DegenerateInput(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleSet {
    /// Validates and sorts two parallel sequences into a sample set.
    ///
    /// # Errors
    ///
    /// Checks are applied in this order:
    /// - `SampleError::MismatchedLength` if the sequences differ in length
    /// - `SampleError::DegenerateInput` if fewer than 2 points are supplied
    /// - `SampleError::NonFinite` if any value is NaN or infinite
    /// - `SampleError::DegenerateInput` if every x value is identical, or the
    ///   domain width is not representable
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self, SampleError> {
        if xs.len() != ys.len() {
            return Err(SampleError::MismatchedLength {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }

        if xs.len() < 2 {
            return Err(SampleError::DegenerateInput(format!(
                "need at least 2 points, got {}",
                xs.len()
            )));
        }

        for (index, (&x, &y)) in xs.iter().zip(ys).enumerate() {
            if !x.is_finite() {
                return Err(SampleError::NonFinite {
                    index,
                    axis: Axis::X,
                });
            }
            if !y.is_finite() {
                return Err(SampleError::NonFinite {
                    index,
                    axis: Axis::Y,
                });
            }
        }

        // -0.0 becomes 0.0 so that total_cmp treats the two zeros as one x
        let mut pairs: Vec<(f64, f64)> = xs
            .iter()
            .map(|&x| x + 0.0)
            .zip(ys.iter().copied())
            .collect();
        // Stable: ties keep input order
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        let first = pairs[0].0;
        let last = pairs[pairs.len() - 1].0;
        if first == last {
            return Err(SampleError::DegenerateInput(format!(
                "all {} x values equal {}",
                pairs.len(),
                first
            )));
        }
        if !(last - first).is_finite() {
            return Err(SampleError::DegenerateInput(format!(
                "domain width [{}, {}] overflows",
                first, last
            )));
        }

        let (xs, ys) = pairs.into_iter().unzip();
        Ok(Self { xs, ys })
    }

    /// Builds a sample set from (x, y) pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, SampleError> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.iter().copied().unzip();
        Self::new(&xs, &ys)
    }

    /// Sorted x values.
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// y values in sorted-x order.
    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of points, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed sample set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The closed interval `[min(x), max(x)]`.
    #[inline]
    pub fn domain(&self) -> Domain {
        Domain {
            lower: self.xs[0],
            upper: self.xs[self.xs.len() - 1],
        }
    }

    /// Number of distinct x values.
    pub fn distinct_x_count(&self) -> usize {
        1 + self.xs.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Returns true if any x value occurs more than once.
    pub fn has_duplicate_x(&self) -> bool {
        self.distinct_x_count() < self.len()
    }

    /// Reference area: composite trapezoidal rule over the sorted points.
    ///
    /// Deterministic and side-effect free. Zero-width segments between
    /// duplicate x values contribute nothing.
    pub fn trapezoid_area(&self) -> f64 {
        trapezoid_sorted(&self.xs, &self.ys)
    }
}
