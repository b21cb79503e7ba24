use std::fmt;

use rug::Integer;

use crate::{
    error::{Error, Result},
    params::Parameters,
};

/// Secret prime `p`. Never leaves the decrypting party.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PrivateKey {
    pub(crate) p: Integer,
    pub(crate) params_id: u64,
}

impl PrivateKey {
    pub fn p(&self) -> &Integer {
        &self.p
    }

    pub fn params_id(&self) -> u64 {
        self.params_id
    }

    pub(crate) fn check(&self, params: &Parameters) -> Result<()> {
        check_params_id(params, self.params_id)?;
        if self.p <= 1 {
            return Err(Error::MalformedKey("p <= 1".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PrivateKey: params_id={:#018x} p=<{} bits>",
            self.params_id,
            self.p.significant_bits()
        )
    }
}

/// Public key in compressed form.
///
/// The `tau` public values x_i are never stored: x_i = chi_i - delta_i where
/// chi_i is the i-th value of the [Expander](crate::expander::Expander) seeded
/// with `seed`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PublicKey {
    pub(crate) seed: Integer,
    pub(crate) x0: Integer,
    pub(crate) deltas: Vec<Integer>,
    pub(crate) params_id: u64,
}

impl PublicKey {
    pub fn seed(&self) -> &Integer {
        &self.seed
    }

    /// Noiseless near-multiple of `p`, modulus of all ciphertext arithmetic.
    pub fn x0(&self) -> &Integer {
        &self.x0
    }

    pub fn deltas(&self) -> &[Integer] {
        &self.deltas
    }

    pub fn params_id(&self) -> u64 {
        self.params_id
    }

    pub(crate) fn check(&self, params: &Parameters) -> Result<()> {
        check_params_id(params, self.params_id)?;
        if self.x0 <= 0 {
            return Err(Error::MalformedKey("x0 <= 0".to_string()));
        }
        if self.deltas.len() != params.tau() {
            return Err(Error::MalformedKey(format!(
                "deltas.len()={} != tau={}",
                self.deltas.len(),
                params.tau()
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PublicKey: params_id={:#018x} seed=<{} bits> x0=<{} bits> tau={}",
            self.params_id,
            self.seed.significant_bits(),
            self.x0.significant_bits(),
            self.deltas.len()
        )
    }
}

fn check_params_id(params: &Parameters, got: u64) -> Result<()> {
    let expected: u64 = params.id();
    if expected != got {
        return Err(Error::ParameterMismatch { expected, got });
    }
    Ok(())
}
