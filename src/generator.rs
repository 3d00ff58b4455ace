//! Target sequence generation.

use crate::hardware::EntropySource;
use crate::types::{MAX_SEQUENCE_LEN, Sequence, Symbol};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Produces target sequences for the controller.
pub trait SequenceSource {
    /// Returns `length` symbols. Lengths above [`MAX_SEQUENCE_LEN`] are clamped.
    fn generate(&mut self, length: usize) -> Sequence;
}

/// Uniform random symbols from a pseudo-random generator seeded once at start-up.
pub struct RandomSequenceGenerator<R: RngCore = SmallRng> {
    rng: R,
}

impl RandomSequenceGenerator<SmallRng> {
    /// Creates a generator from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from the board's entropy source.
    pub fn from_entropy<E: EntropySource>(entropy: &mut E) -> Self {
        Self::from_seed(entropy.seed())
    }
}

impl<R: RngCore> RandomSequenceGenerator<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws one uniformly distributed symbol.
    pub fn next_symbol(&mut self) -> Symbol {
        Symbol::ALL[self.rng.gen_range(0..Symbol::COUNT)]
    }
}

impl<R: RngCore> SequenceSource for RandomSequenceGenerator<R> {
    fn generate(&mut self, length: usize) -> Sequence {
        (0..length.min(MAX_SEQUENCE_LEN))
            .map(|_| self.next_symbol())
            .collect()
    }
}
