use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::{OsRng, RngCore, TryRngCore};

pub use rand_core::OsError;

/// ChaCha8 stream. Seeded from [new_seed] it serves secret draws, seeded
/// from a public value it gives a reproducible stream.
pub struct Source {
    source: ChaCha8Rng,
}

/// Draws a fresh 32-byte seed from the operating system.
pub fn new_seed() -> Result<[u8; 32], OsError> {
    let mut seed = [0u8; 32];
    OsRng.try_fill_bytes(&mut seed)?;
    Ok(seed)
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Offset from the start of the stream, in 32-bit words.
    #[inline(always)]
    pub fn word_pos(&self) -> u128 {
        self.source.get_word_pos()
    }

    /// Moves the stream to the given offset, in 32-bit words.
    #[inline(always)]
    pub fn set_word_pos(&mut self, word_pos: u128) {
        self.source.set_word_pos(word_pos)
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
