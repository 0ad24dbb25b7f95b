//! RNG module - fair-bag and uniform piece generation
//!
//! The fair bag deals every kind once per bag of 7, in random order, before dealing a
//! fresh bag. This keeps droughts short: at most 12 other pieces fall between two of
//! the same kind. The uniform mode draws every piece independently.
//!
//! Also provides a simple LCG so seeded games replay identically.

use rand::{Rng, RngCore};
use tracing::debug;

use crate::config::{PieceConfig, RandomAlgorithm};
use crate::types::{PieceKind, PIECE_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state; feeding it back to `new` resumes the sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RngCore for SimpleRng {
    /// LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Piece generator: a bag of all seven kinds plus a cursor, or plain uniform draws
#[derive(Debug, Clone)]
pub struct PieceRandomizer<R = SimpleRng> {
    algorithm: RandomAlgorithm,
    /// Current bag of pieces
    bag: [PieceKind; PIECE_KINDS],
    /// Index into current bag; `PIECE_KINDS` means exhausted
    bag_index: usize,
    rng: R,
}

impl PieceRandomizer<SimpleRng> {
    /// Create a generator driven by a seeded [`SimpleRng`]
    pub fn new(algorithm: RandomAlgorithm, seed: u32) -> Self {
        Self::with_rng(algorithm, SimpleRng::new(seed))
    }

    /// Create a generator using the algorithm selected in `config`
    pub fn from_config(config: &PieceConfig, seed: u32) -> Self {
        Self::new(config.random_algorithm, seed)
    }
}

impl<R: RngCore> PieceRandomizer<R> {
    /// Create a generator around any random source
    pub fn with_rng(algorithm: RandomAlgorithm, rng: R) -> Self {
        Self {
            algorithm,
            bag: PieceKind::ALL,
            bag_index: PIECE_KINDS,
            rng,
        }
    }

    pub fn algorithm(&self) -> RandomAlgorithm {
        self.algorithm
    }

    /// Produce the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        match self.algorithm {
            RandomAlgorithm::Uniform => self.random_kind(),
            RandomAlgorithm::FairBag => {
                if self.bag_index >= PIECE_KINDS {
                    self.refill_bag();
                }
                let kind = self.bag[self.bag_index];
                self.bag_index += 1;
                kind
            }
        }
    }

    fn random_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PIECE_KINDS)]
    }

    /// Deal a new bag: each slot redraws until it holds a kind not already in the bag
    fn refill_bag(&mut self) {
        for slot in 0..PIECE_KINDS {
            let mut kind = self.random_kind();
            while self.bag[..slot].contains(&kind) {
                kind = self.random_kind();
            }
            self.bag[slot] = kind;
        }
        self.bag_index = 0;
        debug!(bag = ?self.bag, "dealt new piece bag");
    }
}

impl Default for PieceRandomizer<SimpleRng> {
    fn default() -> Self {
        Self::new(RandomAlgorithm::FairBag, 1)
    }
}
