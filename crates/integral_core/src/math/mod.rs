//! Numerical methods: interpolation and deterministic quadrature.

pub mod interpolators;
pub mod quadrature;
