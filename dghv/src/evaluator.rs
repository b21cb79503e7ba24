use rug::Integer;

use crate::{ciphertext::Ciphertext, keys::PublicKey, modular::reduce_symmetric_assign};

/// Homomorphic operations modulo x0. No noise tracking is performed: once the
/// accumulated noise exceeds p/2, the result silently decrypts to the wrong bit.
impl PublicKey {
    /// Reduces `ct` into the symmetric residue range modulo x0.
    pub fn reduce(&self, ct: &mut Ciphertext) {
        ct.reduce(&self.x0);
    }

    /// Encryption of the XOR of the plaintexts of `a` and `b`.
    pub fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Ciphertext {
        let mut res: Ciphertext = a + b;
        self.reduce(&mut res);
        res
    }

    /// Encryption of the AND of the plaintexts of `a` and `b`.
    pub fn mul(&self, a: &Ciphertext, b: &Ciphertext) -> Ciphertext {
        let mut res: Ciphertext = a * b;
        self.reduce(&mut res);
        res
    }

    /// Encryption of the XOR of all the plaintexts of `cts`, reduced after each term.
    pub fn add_many(&self, cts: &[Ciphertext]) -> Ciphertext {
        cts.iter().fold(self.encrypt_zero_noiseless(), |acc, ct| self.add(&acc, ct))
    }

    /// x0 itself, reduced: a noiseless encryption of 0.
    pub fn encrypt_zero_noiseless(&self) -> Ciphertext {
        let mut ct: Ciphertext = Ciphertext::from(self.x0.clone());
        self.reduce(&mut ct);
        ct
    }
}

impl Ciphertext {
    /// Reduces into the symmetric residue range modulo `x0`.
    pub fn reduce(&mut self, x0: &Integer) {
        reduce_symmetric_assign(&mut self.data, x0);
    }
}
