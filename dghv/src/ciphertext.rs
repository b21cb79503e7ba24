use std::{
    fmt,
    ops::{Add, Mul},
};

use rug::Integer;

/// Encryption of a single bit: one integer in the symmetric residue range modulo x0.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Ciphertext {
    pub(crate) data: Integer,
}

impl Ciphertext {
    pub fn data(&self) -> &Integer {
        &self.data
    }

    pub fn into_inner(self) -> Integer {
        self.data
    }
}

impl From<Integer> for Ciphertext {
    fn from(data: Integer) -> Self {
        Self { data }
    }
}

impl fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ciphertext: <{} bits>", self.data.significant_bits())
    }
}

// Plain integer arithmetic, left unreduced. See PublicKey::add and PublicKey::mul.

impl Add for &Ciphertext {
    type Output = Ciphertext;

    fn add(self, rhs: Self) -> Ciphertext {
        Ciphertext {
            data: Integer::from(&self.data + &rhs.data),
        }
    }
}

impl Mul for &Ciphertext {
    type Output = Ciphertext;

    fn mul(self, rhs: Self) -> Ciphertext {
        Ciphertext {
            data: Integer::from(&self.data * &rhs.data),
        }
    }
}
