//! RNG module - uniform random piece selection
//!
//! Every spawn draws one of the seven kinds with equal probability. The
//! generator is seedable so a given seed replays the same piece sequence,
//! which keeps board tests and benchmarks deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Seeded uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: StdRng,
    seed: u64,
}

impl PieceRng {
    /// Create a generator that replays the sequence for `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Draw the next kind, uniformly among all seven
    pub fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
