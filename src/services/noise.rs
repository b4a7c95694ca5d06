use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{NoiseMode, NoiseSettings};

/// Supplies the bounded perturbation in the economic impact factor.
///
/// `sample` must return a value in `[0, span]`. A zero span yields zero.
pub trait NoiseSource {
    fn sample(&mut self, span: f64) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn sample(&mut self, span: f64) -> f64 {
        (**self).sample(span)
    }
}

/// Uniform noise drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomNoise<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomNoise<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseSource for RandomNoise<R> {
    fn sample(&mut self, span: f64) -> f64 {
        if span <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(0.0..span)
    }
}

/// Deterministic stand-in: the middle of the span.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointNoise;

impl NoiseSource for MidpointNoise {
    fn sample(&mut self, span: f64) -> f64 {
        span.max(0.0) / 2.0
    }
}

/// A fixed offset, clamped into `[0, span]`. Mostly for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedNoise(pub f64);

impl NoiseSource for FixedNoise {
    fn sample(&mut self, span: f64) -> f64 {
        self.0.clamp(0.0, span.max(0.0))
    }
}

pub fn noise_from_settings(settings: &NoiseSettings) -> Box<dyn NoiseSource> {
    match (settings.mode, settings.seed) {
        (NoiseMode::Midpoint, _) => Box::new(MidpointNoise),
        (NoiseMode::Seeded, Some(seed)) => Box::new(RandomNoise::seeded(seed)),
        (NoiseMode::Seeded, None) | (NoiseMode::Random, _) => {
            Box::new(RandomNoise::from_entropy())
        }
    }
}
