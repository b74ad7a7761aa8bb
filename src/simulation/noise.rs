//! Noise sources for the upstream regulator
//!
//! The stepper never touches a global RNG; callers hand it a `NoiseSource`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::constants::NOISE_AMPLITUDE;

/// Produces one noise draw per tick, always within `[-0.5, 0.5]`
pub trait NoiseSource {
    fn sample(&mut self) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

/// Uniform noise backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngNoise<R: Rng> {
    rng: R,
}

impl<R: Rng> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngNoise<ChaCha8Rng> {
    /// Reproducible noise stream
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE)
    }
}

/// Constant noise for deterministic runs and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedNoise(f64);

impl FixedNoise {
    pub const ZERO: Self = Self(0.0);
    pub const MAX: Self = Self(NOISE_AMPLITUDE);
    pub const MIN: Self = Self(-NOISE_AMPLITUDE);

    /// Values outside the noise amplitude are clamped into it
    pub fn new(value: f64) -> Self {
        Self(value.clamp(-NOISE_AMPLITUDE, NOISE_AMPLITUDE))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl NoiseSource for FixedNoise {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_noise_stays_in_amplitude() {
        let mut noise = RngNoise::seeded(7);
        for _ in 0..10_000 {
            let draw = noise.sample();
            assert!((-0.5..=0.5).contains(&draw), "draw {draw} out of range");
        }
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let mut a = RngNoise::seeded(12345);
        let mut b = RngNoise::seeded(12345);
        for _ in 0..100 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn test_fixed_noise_clamps() {
        assert_eq!(FixedNoise::new(3.0), FixedNoise::MAX);
        assert_eq!(FixedNoise::new(-3.0), FixedNoise::MIN);
        assert_eq!(FixedNoise::new(0.25).value(), 0.25);
    }

    #[test]
    fn test_boxed_dyn_source() {
        let mut boxed: Box<dyn NoiseSource> = Box::new(FixedNoise::MAX);
        assert_eq!(boxed.sample(), 0.5);
    }
}
