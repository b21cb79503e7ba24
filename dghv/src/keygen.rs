use log::{debug, trace};
use rug::{Integer, integer::IsPrime};
use sampling::source::{Source, new_seed};

use crate::{
    error::Result,
    expander::Expander,
    keys::{PrivateKey, PublicKey},
    params::Parameters,
};

/// Miller-Rabin rounds used when searching for the secret prime.
pub(crate) const PRIME_REPS: u32 = 40;

/// Generates a key pair, drawing the secret values from a source seeded
/// with fresh operating-system entropy.
pub fn generate_keys(params: &Parameters) -> Result<(PublicKey, PrivateKey)> {
    let mut source: Source = Source::new(new_seed()?);
    generate_keys_with_source(params, &mut source)
}

/// Generates a key pair, drawing every secret value (p, q_0, the seed, the
/// blinding multiples and the noise terms) from `source`.
pub fn generate_keys_with_source(params: &Parameters, source: &mut Source) -> Result<(PublicKey, PrivateKey)> {
    params.validate()?;

    let gamma: usize = params.gamma();

    let p: Integer = sample_prime(params.eta(), source);
    let x0: Integer = sample_x0(gamma, &p, source);
    let seed: Integer = source.next_integer_exact_bits(gamma);

    debug!(
        "generated p=<{} bits> x0=<{} bits> seed=<{} bits>",
        p.significant_bits(),
        x0.significant_bits(),
        seed.significant_bits()
    );

    let xi_bound: Integer = params.xi_bound(&p);

    // delta_i = (chi_i mod p) + xi_i * p - r_i
    let deltas: Vec<Integer> = Expander::new(&seed, gamma)
        .take(params.tau())
        .map(|chi| {
            let xi: Integer = source.next_integer_n(&xi_bound);
            let r: Integer = source.next_integer_symmetric(params.rho());
            Integer::from(&chi % &p) + xi * &p - r
        })
        .collect();

    let params_id: u64 = params.id();

    Ok((
        PublicKey {
            seed,
            x0,
            deltas,
            params_id,
        },
        PrivateKey { p, params_id },
    ))
}

/// Samples a prime of exactly `bits` bits. Retries until one is found.
pub(crate) fn sample_prime(bits: usize, source: &mut Source) -> Integer {
    let mut attempts: usize = 0;
    loop {
        attempts += 1;
        let mut candidate: Integer = source.next_integer_exact_bits(bits);
        candidate.set_bit(0, true);
        if candidate.is_probably_prime(PRIME_REPS) != IsPrime::No {
            debug!("found {}-bit prime after {} attempts", bits, attempts);
            return candidate;
        }
        trace!("prime search attempt {} rejected", attempts);
    }
}

/// Samples x0 = q_0 * p with q_0 odd and x0 of exactly `gamma` bits.
pub(crate) fn sample_x0(gamma: usize, p: &Integer, source: &mut Source) -> Integer {
    let lo: Integer = ((Integer::from(1) << (gamma - 1) as u32) + p - 1u32) / p;
    let hi: Integer = ((Integer::from(1) << gamma as u32) - 1u32) / p;
    let q0: Integer = source.next_odd_integer_range(&lo, &hi);
    let x0: Integer = q0 * p;
    debug_assert_eq!(x0.significant_bits() as usize, gamma);
    x0
}
