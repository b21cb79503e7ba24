use std::fmt;

use log::warn;
use rug::Integer;

use crate::error::{Error, Result};

/// Largest accepted bit-length parameter, and largest `sec + eta`.
/// Shift amounts on [Integer] are `u32`.
pub const MAX_BITS: u64 = u32::MAX as u64;

/// Largest accepted number of public values.
pub const MAX_TAU: u64 = 1 << 24;

/// Parameters of the scheme.
///
/// * `gamma`: bit-length of the ciphertexts and of the expanded public values.
/// * `eta`: bit-length of the secret prime `p`.
/// * `rho`: bit-length bound of the noise of the public values.
/// * `rho_prime`: bit-length bound of the additional encryption noise.
/// * `tau`: number of public values combined per encryption.
/// * `sec`: security parameter, sizes the blinding multiples of `p`.
/// * `alpha`: bit-length bound of the per-term weights used during encryption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Parameters {
    pub(crate) gamma: usize,
    pub(crate) eta: usize,
    pub(crate) rho: usize,
    pub(crate) rho_prime: usize,
    pub(crate) tau: usize,
    pub(crate) sec: usize,
    pub(crate) alpha: usize,
}

impl Parameters {
    /// Builds and validates a parameter set.
    pub fn new(gamma: usize, eta: usize, rho: usize, rho_prime: usize, tau: usize, sec: usize, alpha: usize) -> Result<Self> {
        let params: Parameters = Self {
            gamma,
            eta,
            rho,
            rho_prime,
            tau,
            sec,
            alpha,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn gamma(&self) -> usize {
        self.gamma
    }

    pub fn eta(&self) -> usize {
        self.eta
    }

    pub fn rho(&self) -> usize {
        self.rho
    }

    pub fn rho_prime(&self) -> usize {
        self.rho_prime
    }

    pub fn tau(&self) -> usize {
        self.tau
    }

    pub fn sec(&self) -> usize {
        self.sec
    }

    pub fn alpha(&self) -> usize {
        self.alpha
    }

    /// Fingerprint of the parameter set, carried by keys generated under it.
    pub fn id(&self) -> u64 {
        utils::fingerprint::fingerprint(&self.to_words())
    }

    pub(crate) fn to_words(&self) -> [u64; 7] {
        [
            self.gamma as u64,
            self.eta as u64,
            self.rho as u64,
            self.rho_prime as u64,
            self.tau as u64,
            self.sec as u64,
            self.alpha as u64,
        ]
    }

    /// Exclusive upper bound of the blinding multiples: 2^{sec+eta} / p.
    pub fn xi_bound(&self, p: &Integer) -> Integer {
        (Integer::from(1) << (self.sec + self.eta) as u32) / p
    }

    /// 2^{rho}
    pub fn rho_bound(&self) -> Integer {
        Integer::from(1) << self.rho as u32
    }

    /// 2^{rho'}
    pub fn rho_prime_bound(&self) -> Integer {
        Integer::from(1) << self.rho_prime as u32
    }

    /// 2^{alpha}
    pub fn alpha_bound(&self) -> Integer {
        Integer::from(1) << self.alpha as u32
    }

    /// Worst-case magnitude of the noise of a fresh ciphertext:
    /// 2 * (tau * 2^{alpha+rho} + 2^{rho'}) + 1.
    pub fn fresh_noise_bound(&self) -> Integer {
        let terms: Integer = (Integer::from(1) << (self.alpha + self.rho) as u32) * self.tau as u64;
        ((terms + self.rho_prime_bound()) << 1u32) + 1u32
    }

    /// 2^{eta-2}, a lower bound on p/2 for any eta-bit prime p.
    /// Ciphertexts whose noise stays below it decrypt correctly.
    pub fn noise_threshold(&self) -> Integer {
        Integer::from(1) << self.eta.saturating_sub(2) as u32
    }

    /// Checks the relations between the parameters.
    pub fn validate(&self) -> Result<()> {
        let check = |ok: bool, msg: String| -> Result<()> {
            if ok {
                Ok(())
            } else {
                warn!("rejecting parameters {}: {}", self, msg);
                Err(Error::InvalidParameters(msg))
            }
        };

        // Every field is bounded before any relation is evaluated, so the sums
        // below are taken on u64 values of at most 32 bits and cannot wrap.
        let fields: [(&str, u64); 7] = [
            ("gamma", self.gamma as u64),
            ("eta", self.eta as u64),
            ("rho", self.rho as u64),
            ("rho_prime", self.rho_prime as u64),
            ("tau", self.tau as u64),
            ("sec", self.sec as u64),
            ("alpha", self.alpha as u64),
        ];
        fields.iter().try_for_each(|&(name, value)| {
            check(
                value <= MAX_BITS,
                format!("{}={} exceeds the supported bound {}", name, value, MAX_BITS),
            )
        })?;
        check(
            self.tau as u64 <= MAX_TAU,
            format!("tau={} exceeds the supported bound {}", self.tau, MAX_TAU),
        )?;

        let [gamma, eta, rho, rho_prime, tau, sec, alpha] = self.to_words();

        check(
            gamma >= eta + 2,
            format!("gamma={} < eta+2={}", gamma, eta + 2),
        )?;
        check(eta > rho, format!("eta={} <= rho={}", eta, rho))?;
        check(
            rho >= rho_prime,
            format!("rho={} < rho_prime={}", rho, rho_prime),
        )?;
        check(tau >= 1, "tau=0".to_string())?;
        check(sec >= 1, "sec=0".to_string())?;
        check(
            sec + eta <= MAX_BITS,
            format!("sec+eta={} exceeds the supported bound {}", sec + eta, MAX_BITS),
        )?;
        check(
            alpha + rho < eta,
            format!("alpha+rho={} >= eta={}", alpha + rho, eta),
        )?;

        let fresh: Integer = self.fresh_noise_bound();
        let threshold: Integer = self.noise_threshold();
        check(
            fresh < threshold,
            format!(
                "fresh noise bound of {} bits reaches the decryption threshold 2^{}",
                fresh.significant_bits(),
                self.eta.saturating_sub(2)
            ),
        )
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parameters: gamma={} eta={} rho={} rho_prime={} tau={} sec={} alpha={}",
            self.gamma, self.eta, self.rho, self.rho_prime, self.tau, self.sec, self.alpha
        )
    }
}

pub mod presets {
    use super::Parameters;

    /// Toy-scale parameters: gamma=200000, eta=27, rho=3, rho'=3, tau=20, sec=32, alpha=5.
    pub fn toy() -> Parameters {
        Parameters {
            gamma: 200_000,
            eta: 27,
            rho: 3,
            rho_prime: 3,
            tau: 20,
            sec: 32,
            alpha: 5,
        }
    }

    /// Same noise parameters as [toy] with short ciphertexts. Offers no security.
    pub fn tiny() -> Parameters {
        Parameters {
            gamma: 2048,
            ..toy()
        }
    }
}
