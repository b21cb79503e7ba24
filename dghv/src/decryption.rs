use rug::Integer;

use crate::{ciphertext::Ciphertext, error::Result, keys::PrivateKey, modular::reduce_symmetric, params::Parameters};

/// Decrypts `ct`: (ct mod p) mod 2, with a symmetric reduction modulo p.
///
/// Never fails on the ciphertext value, but the output is only meaningful
/// while the noise of `ct` stays below p/2.
pub fn decrypt(ct: &Ciphertext, sk: &PrivateKey, params: &Parameters) -> Result<u8> {
    sk.check(params)?;
    let noise: Integer = reduce_symmetric(ct.data(), sk.p());
    Ok(noise.is_odd() as u8)
}
