//! Random shock sources for the series generator

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Supplies one uniform shock in `[-0.5, 0.5)` per draw
pub trait NoiseSource {
    fn next_shock(&mut self) -> f64;
}

/// Unseeded thread-local generator. Output differs on every run.
#[derive(Debug, Default)]
pub struct ThreadNoise {
    rng: ThreadRng,
}

impl ThreadNoise {
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

impl NoiseSource for ThreadNoise {
    fn next_shock(&mut self) -> f64 {
        self.rng.gen_range(-0.5..0.5)
    }
}

/// Reproducible generator for a fixed seed
#[derive(Debug, Clone)]
pub struct SeededNoise {
    rng: StdRng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn next_shock(&mut self) -> f64 {
        self.rng.gen_range(-0.5..0.5)
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn next_shock(&mut self) -> f64 {
        (**self).next_shock()
    }
}

impl NoiseSource for Box<dyn NoiseSource> {
    fn next_shock(&mut self) -> f64 {
        (**self).next_shock()
    }
}
