//! Random outcome sources
//!
//! Every probabilistic decision in the game draws from a [`RandomOutcome`].
//! Production play uses the seeded [`GameRng`]; tests force branches with
//! [`ScriptedRng`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform draws.
pub trait RandomOutcome {
    /// Uniform value in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform integer in `1..=sides`, derived from a single `uniform` draw.
    ///
    /// Returns 0 if `sides` is 0.
    fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        let scaled = (self.uniform() * f64::from(sides)) as u32;
        scaled.min(sides - 1) + 1
    }
}

impl<T: RandomOutcome + ?Sized> RandomOutcome for &mut T {
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }
}

/// Game random number generator
///
/// Wraps ChaCha8Rng so a game can be replayed from its seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomOutcome for GameRng {
    fn uniform(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Replays a fixed list of draws, wrapping around when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            next: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomOutcome for ScriptedRng {
    fn uniform(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}
