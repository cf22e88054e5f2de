//! Composite trapezoidal rule over tabulated points.

use crate::types::QuadratureError;
use num_traits::Float;

/// Integrates tabulated `(xs[i], ys[i])` with the composite trapezoidal rule.
///
/// Abscissae must be ascending; repeated abscissae are allowed and their
/// zero-width segment contributes nothing.
///
/// # Formula
///
/// ```text
/// I = Σ (x[i+1] - x[i]) * (y[i] + y[i+1]) / 2
/// ```
///
/// # Errors
///
/// - `QuadratureError::LengthMismatch` if the slices differ in length
/// - `QuadratureError::InsufficientPoints` for fewer than 2 points
/// - `QuadratureError::NotAscending` if an abscissa decreases
///
/// # Example
///
/// ```
/// use integral_core::math::quadrature::trapezoid;
///
/// // y = x^2 sampled at 0, 1, 2, 3
/// let area: f64 = trapezoid(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
/// assert!((area - 9.5).abs() < 1e-12);
/// ```
pub fn trapezoid<T: Float>(xs: &[T], ys: &[T]) -> Result<T, QuadratureError> {
    if xs.len() != ys.len() {
        return Err(QuadratureError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    if xs.len() < 2 {
        return Err(QuadratureError::InsufficientPoints(xs.len()));
    }

    if let Some(index) = (1..xs.len()).find(|&i| xs[i] < xs[i - 1]) {
        return Err(QuadratureError::NotAscending { index });
    }

    Ok(trapezoid_sorted(xs, ys))
}

/// Trapezoidal sum without validation. Callers guarantee ascending
/// abscissae and equal lengths.
pub(crate) fn trapezoid_sorted<T: Float>(xs: &[T], ys: &[T]) -> T {
    let two = T::one() + T::one();
    xs.windows(2)
        .zip(ys.windows(2))
        .fold(T::zero(), |acc, (x, y)| acc + (x[1] - x[0]) * (y[0] + y[1]) / two)
}
