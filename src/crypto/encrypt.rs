// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{util, Encrypt};
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::PublicKey;

use num_bigint_dig::BigUint;
use num_traits::One;
use zeroize::Zeroizing;

impl Encrypt for PublicKey {
    fn encrypt(&self, m: &BigUint) -> Result<Ciphertext> {
        // Sample fresh randomness for probabilistic encryption.
        let r = util::sample_unit(&self.n)?;
        self.encrypt_with_nonce(m, &r)
    }
}

impl PublicKey {
    /// Encrypt `m` under the caller-supplied unit `r`.
    ///
    /// Every intermediate derived from `m` or `r` is wiped before returning.
    pub(crate) fn encrypt_with_nonce(&self, m: &BigUint, r: &BigUint) -> Result<Ciphertext> {
        if m >= &self.n {
            return Err(Error::EncryptionFailed("plaintext must be smaller than the modulus".into()));
        }

        let rn = Zeroizing::new(r.modpow(&self.n, &self.n_squared));

        // g^m = 1 + m·n because g = n + 1; m < n keeps it below n²
        let mn = Zeroizing::new(m * &self.n);
        let gm = Zeroizing::new(&*mn + BigUint::one());

        let product = Zeroizing::new(&*gm * &*rn);
        Ok(Ciphertext::new(&*product % &self.n_squared))
    }

    /// Multiply `ciphertext` by a fresh encryption of zero.
    ///
    /// The result decrypts to the same plaintext but is unlinkable to the input.
    pub fn rerandomize(&self, ciphertext: &Ciphertext) -> Result<Ciphertext> {
        self.check_ciphertext(ciphertext)?;

        let r = util::sample_unit(&self.n)?;
        let rn = Zeroizing::new(r.modpow(&self.n, &self.n_squared));

        Ok(Ciphertext::new((ciphertext.value() * &*rn) % &self.n_squared))
    }
}
