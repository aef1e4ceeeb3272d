//! Randomness source for marker jitter.
//!
//! Layout asks for one offset per axis through the `Jitter` trait so the
//! spiral geometry can be checked with `NoJitter` and the random component
//! replayed with `SeededJitter`.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait Jitter {
    /// A value in `[-magnitude, magnitude]`; zero when `magnitude <= 0`.
    fn offset(&mut self, magnitude: f64) -> f64;
}

/// Zero offset, for deterministic layouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn offset(&mut self, _magnitude: f64) -> f64 {
        0.0
    }
}

/// Draws from the thread-local RNG; differs between renders.
#[derive(Debug, Clone, Default)]
pub struct RandomJitter {
    rng: ThreadRng,
}

impl RandomJitter {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Jitter for RandomJitter {
    fn offset(&mut self, magnitude: f64) -> f64 {
        sample(&mut self.rng, magnitude)
    }
}

/// ChaCha8-backed jitter: identical seeds give identical layouts.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: ChaCha8Rng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Jitter for SeededJitter {
    fn offset(&mut self, magnitude: f64) -> f64 {
        sample(&mut self.rng, magnitude)
    }
}

fn sample<R: Rng>(rng: &mut R, magnitude: f64) -> f64 {
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-magnitude..=magnitude)
}

/// Seeded when a seed is configured, thread RNG otherwise.
pub fn from_seed(seed: Option<u64>) -> Box<dyn Jitter> {
    match seed {
        Some(seed) => Box::new(SeededJitter::new(seed)),
        None => Box::new(RandomJitter::new()),
    }
}
