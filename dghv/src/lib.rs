pub mod ciphertext;
pub mod decryption;
pub mod encryption;
pub mod error;
pub mod evaluator;
pub mod expander;
pub mod keygen;
pub mod keys;
pub mod modular;
pub mod noise;
pub mod params;
pub mod serialization;
#[cfg(test)]
mod tests;

pub use ciphertext::*;
pub use decryption::*;
pub use encryption::*;
pub use error::*;
pub use expander::*;
pub use keygen::*;
pub use keys::*;
pub use modular::*;
pub use params::*;
pub use serialization::*;

pub use sampling::source::{Source, new_seed};
