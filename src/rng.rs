use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// # ByteSource
/// Uniform random bytes for the `Cxkk` instruction.
///
/// Seeded once per machine: from OS entropy in normal use, or from an
/// explicit seed so tests can pin the drawn values.
pub struct ByteSource {
    rng: StdRng,
}

impl ByteSource {
    pub fn from_entropy() -> Self {
        ByteSource {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        ByteSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_byte(&mut self) -> u8 {
        self.rng.gen()
    }
}
