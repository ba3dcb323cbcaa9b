mod decrypt;
mod encrypt;
pub(crate) mod util;

use num_bigint_dig::BigUint;

use crate::ciphertext::Ciphertext;
use crate::error::Result;

/// Encrypts a single plaintext integer.
pub trait Encrypt {
    /// Encrypt `m`, which must be strictly smaller than the public modulus `n`.
    ///
    /// Every call draws fresh randomness, so encrypting the same value twice
    /// yields different ciphertexts.
    fn encrypt(&self, m: &BigUint) -> Result<Ciphertext>;
}

/// Decrypts a single ciphertext into its plaintext integer.
pub trait Decrypt {
    /// Recover the plaintext `m` from a ciphertext `c`.
    ///
    /// `c` must be a unit of `Z_{n²}`.
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint>;
}
