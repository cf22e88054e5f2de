//! Pseudo-random number generator wrapper for Monte Carlo integration.
//!
//! This module provides [`IntegratorRng`], a seeded PRNG wrapper that offers
//! reproducible random number generation with per-strategy streams.

use rand::distributions::OpenClosed01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Distribution;

/// Odd 64-bit constant (2^64 / golden ratio) used to spread stream ids.
const STREAM_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// Monte Carlo integration random number generator.
///
/// # Examples
///
/// ```rust
/// use integral_mc::rng::IntegratorRng;
///
/// let mut rng = IntegratorRng::from_seed(42);
///
/// let u: f64 = rng.gen_uniform();
/// let v: f64 = rng.gen_open_closed();
/// assert!(u < 1.0 && v > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct IntegratorRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The run seed used for initialisation.
    seed: u64,
    /// Stream id within the run.
    stream: u64,
}

impl IntegratorRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers.
    ///
    /// ```rust
    /// use integral_mc::rng::IntegratorRng;
    ///
    /// let mut rng1 = IntegratorRng::from_seed(12345);
    /// let mut rng2 = IntegratorRng::from_seed(12345);
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::for_stream(seed, 0)
    }

    /// Creates the generator for stream `stream` of a run seeded with `seed`.
    ///
    /// Stream 0 is identical to [`IntegratorRng::from_seed`]. Distinct
    /// streams of the same seed produce unrelated sequences.
    ///
    /// ```rust
    /// use integral_mc::rng::IntegratorRng;
    ///
    /// let mut a = IntegratorRng::for_stream(7, 1);
    /// let mut b = IntegratorRng::for_stream(7, 2);
    /// assert_ne!(a.gen_uniform(), b.gen_uniform());
    /// ```
    #[inline]
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed ^ stream.wrapping_mul(STREAM_SPREAD)),
            seed,
            stream,
        }
    }

    /// Draws a fresh run seed from OS entropy.
    pub fn entropy_seed() -> u64 {
        rand::random()
    }

    /// Returns the run seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the stream id within the run.
    #[inline]
    pub fn stream(&self) -> u64 {
        self.stream
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single uniform random value in (0, 1].
    ///
    /// Used where a zero draw would cause a division by zero.
    #[inline]
    pub fn gen_open_closed(&mut self) -> f64 {
        self.inner.sample(OpenClosed01)
    }

    /// Draws one value from `distribution`.
    ///
    /// ```rust
    /// use integral_mc::rng::IntegratorRng;
    /// use rand_distr::Uniform;
    ///
    /// let mut rng = IntegratorRng::from_seed(3);
    /// let x = rng.sample(&Uniform::new(10.0, 20.0));
    /// assert!((10.0..20.0).contains(&x));
    /// ```
    #[inline]
    pub fn sample<D: Distribution<f64>>(&mut self, distribution: &D) -> f64 {
        distribution.sample(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_distr::Uniform;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = IntegratorRng::from_seed(99);
        let mut b = IntegratorRng::from_seed(99);
        for _ in 0..100 {
            assert_eq!(a.gen_uniform().to_bits(), b.gen_uniform().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = IntegratorRng::from_seed(1);
        let mut b = IntegratorRng::from_seed(2);
        let xs: Vec<f64> = (0..10).map(|_| a.gen_uniform()).collect();
        let ys: Vec<f64> = (0..10).map(|_| b.gen_uniform()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_stream_zero_matches_from_seed() {
        let mut a = IntegratorRng::from_seed(2024);
        let mut b = IntegratorRng::for_stream(2024, 0);
        assert_eq!(a.gen_uniform(), b.gen_uniform());
        assert_eq!(b.seed(), 2024);
        assert_eq!(b.stream(), 0);
    }

    #[test]
    fn test_streams_are_distinct() {
        let mut s1 = IntegratorRng::for_stream(2024, 1);
        let mut s2 = IntegratorRng::for_stream(2024, 2);
        let a: Vec<f64> = (0..10).map(|_| s1.gen_uniform()).collect();
        let b: Vec<f64> = (0..10).map(|_| s2.gen_uniform()).collect();
        assert_ne!(a, b);
        assert_eq!(s1.seed(), s2.seed());
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = IntegratorRng::from_seed(5);
        for _ in 0..10_000 {
            let u = rng.gen_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_open_closed_range() {
        let mut rng = IntegratorRng::from_seed(5);
        for _ in 0..10_000 {
            let u = rng.gen_open_closed();
            assert!(u > 0.0 && u <= 1.0);
        }
    }

    #[test]
    fn test_sample_distribution() {
        let mut rng = IntegratorRng::from_seed(11);
        let dist = Uniform::new(-3.0, 3.0);
        let mean: f64 = (0..50_000).map(|_| rng.sample(&dist)).sum::<f64>() / 50_000.0;
        assert!(mean.abs() < 0.05, "mean {} should be near 0", mean);
    }
}
