use rug::{Integer, integer::Order};
use sampling::source::Source;

/// Reproducible stream of `gamma`-bit unsigned integers driven by a public seed.
///
/// The seed bytes (little-endian magnitude) are folded by XOR into a 32-byte
/// ChaCha8 key, byte `i` landing on position `i % 32`. Each value consumes
/// `gamma.div_ceil(64)` words of 64 bits from the ChaCha8 stream, least
/// significant word first, the last word masked to the remaining bits.
///
/// The expander only ever produces public values and must never be fed a
/// secret seed.
pub struct Expander {
    source: Source,
    gamma: usize,
}

impl Expander {
    pub fn new(seed: &Integer, gamma: usize) -> Self {
        Self {
            source: Source::new(fold_seed(seed)),
            gamma,
        }
    }

    pub fn gamma(&self) -> usize {
        self.gamma
    }

    /// Number of 32-bit stream words consumed per value.
    fn words_per_value(&self) -> u128 {
        (self.gamma.div_ceil(64) as u128) << 1
    }

    /// Positions the stream so that the next value is the `index`-th one.
    pub fn seek(&mut self, index: usize) {
        let word_pos: u128 = index as u128 * self.words_per_value();
        self.source.set_word_pos(word_pos);
    }

    /// Returns the `index`-th value of the sequence. The expander is left
    /// positioned on the value that follows it.
    pub fn value_at(&mut self, index: usize) -> Integer {
        self.seek(index);
        self.next_value()
    }

    pub fn next_value(&mut self) -> Integer {
        self.source.next_integer_bits(self.gamma)
    }
}

impl Iterator for Expander {
    type Item = Integer;

    fn next(&mut self) -> Option<Integer> {
        Some(self.next_value())
    }
}

fn fold_seed(seed: &Integer) -> [u8; 32] {
    let mut key: [u8; 32] = [0u8; 32];
    seed.to_digits::<u8>(Order::Lsf)
        .iter()
        .enumerate()
        .for_each(|(i, b)| key[i & 31] ^= b);
    key
}
