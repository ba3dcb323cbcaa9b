// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{util, Decrypt};
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::PrivateKey;

use num_bigint_dig::BigUint;
use zeroize::Zeroizing;

impl Decrypt for PrivateKey {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint> {
        let public = &self.public_key;
        if public.check_ciphertext(ciphertext).is_err() {
            return Err(Error::DecryptionFailed("ciphertext is not a unit modulo n²".into()));
        }

        // m = L(c^λ mod n²) · μ mod n
        let x = Zeroizing::new(ciphertext.value().modpow(&self.lambda, public.n_squared()));
        let l = util::l_function(&x, public.n())
            .map(Zeroizing::new)
            .ok_or_else(|| Error::DecryptionFailed("L function undefined".into()))?;

        let scaled = Zeroizing::new(&*l * &self.mu);
        Ok(&*scaled % public.n())
    }
}
