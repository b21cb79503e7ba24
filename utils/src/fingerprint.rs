use std::hash::Hasher;

use fnv::FnvHasher;

/// FNV-1a 64 over the little-endian bytes of each word.
pub fn fingerprint(words: &[u64]) -> u64 {
    let mut hasher: FnvHasher = FnvHasher::default();
    words.iter().for_each(|w| hasher.write(&w.to_le_bytes()));
    hasher.finish()
}
