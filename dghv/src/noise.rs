use rug::Integer;

use crate::{ciphertext::Ciphertext, keys::PrivateKey, modular::reduce_symmetric};

impl PrivateKey {
    /// Noise of `ct`: its symmetric residue modulo p.
    pub fn noise(&self, ct: &Ciphertext) -> Integer {
        reduce_symmetric(ct.data(), &self.p)
    }

    /// Bit-length of the magnitude of the noise of `ct`.
    pub fn noise_bits(&self, ct: &Ciphertext) -> usize {
        self.noise(ct).significant_bits() as usize
    }
}
