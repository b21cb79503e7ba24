use itertools::izip;
use rug::Integer;
use sampling::source::{Source, new_seed};

use crate::{
    ciphertext::Ciphertext,
    error::{Error, Result},
    expander::Expander,
    keys::PublicKey,
    modular::reduce_symmetric_assign,
    params::Parameters,
};

/// Encrypts `bit` under `pk`, drawing the encryption randomness from a
/// source seeded with fresh operating-system entropy.
pub fn encrypt(bit: u8, pk: &PublicKey, params: &Parameters) -> Result<Ciphertext> {
    let mut source: Source = Source::new(new_seed()?);
    encrypt_with_source(bit, pk, params, &mut source)
}

/// Encrypts `bit` under `pk` as
///
/// c = bit + 2r + 2 * sum_i b_i * (chi_i - delta_i) mod x0
///
/// with r in (-2^{rho'}, 2^{rho'}) and b_i in \[0, 2^{alpha}) drawn from `source`,
/// and chi_i regenerated from the public seed.
pub fn encrypt_with_source(bit: u8, pk: &PublicKey, params: &Parameters, source: &mut Source) -> Result<Ciphertext> {
    if bit > 1 {
        return Err(Error::InvalidPlaintext(bit));
    }
    pk.check(params)?;

    let r: Integer = source.next_integer_symmetric(params.rho_prime());

    let mut sum: Integer = Integer::new();
    izip!(Expander::new(pk.seed(), params.gamma()), pk.deltas()).for_each(|(chi, delta)| {
        let b: Integer = source.next_integer_bits(params.alpha());
        let x: Integer = chi - delta;
        sum += b * x;
        reduce_symmetric_assign(&mut sum, pk.x0());
    });

    let mut data: Integer = Integer::from(bit) + (r << 1u32) + (sum << 1u32);
    reduce_symmetric_assign(&mut data, pk.x0());

    Ok(Ciphertext { data })
}
