//! Deterministic quadrature rules.
//!
//! The composite trapezoidal rule is the reference against which every
//! Monte Carlo estimate is measured. For piecewise linear data it is the
//! exact integral of the linear interpolant over the sampled domain.

mod trapezoid;

pub use trapezoid::trapezoid;
pub(crate) use trapezoid::trapezoid_sorted;
