// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::ops::Deref;

use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::util;
use crate::error::{Error, Result};
use crate::keypair::PublicKey;

/// A Paillier ciphertext, an element of `Z*_{n²}`.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Ciphertext {
    value: BigUint,
}

impl Ciphertext {
    pub fn new(value: BigUint) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Minimal big-endian encoding; never carries a leading zero byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        util::biguint_to_bytes_minimal(&self.value)
    }
}

impl Deref for Ciphertext {
    type Target = BigUint;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> From<T> for Ciphertext
where
    T: AsRef<[u8]>,
{
    fn from(data: T) -> Self {
        Self { value: BigUint::from_bytes_be(data.as_ref()) }
    }
}

/// Homomorphic operations.
///
/// All of them work on ciphertexts alone and need only the public key.
impl PublicKey {
    /// Ensure `ciphertext` is a unit of `Z_{n²}`.
    pub(crate) fn check_ciphertext(&self, ciphertext: &Ciphertext) -> Result<()> {
        let c = ciphertext.value();
        if c.is_zero() || c >= &self.n_squared || !c.gcd(&self.n).is_one() {
            return Err(Error::InvalidCiphertext);
        }
        Ok(())
    }

    fn decode_ciphertext(&self, bytes: &[u8]) -> Result<Ciphertext> {
        let max = self.max_size();
        if bytes.len() > max {
            return Err(Error::Encoding { len: bytes.len(), max });
        }
        Ok(Ciphertext::from(bytes))
    }

    /// E(m₁) · E(m₂) = E(m₁ + m₂ mod n)
    pub fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        self.check_ciphertext(a)?;
        self.check_ciphertext(b)?;

        Ok(Ciphertext::new((a.value() * b.value()) % &self.n_squared))
    }

    /// E(m) · g^k = E(m + k mod n)
    pub fn add_plain(&self, ciphertext: &Ciphertext, k: &BigUint) -> Result<Ciphertext> {
        self.check_ciphertext(ciphertext)?;

        // g^k = 1 + k·n mod n²
        let gk = (BigUint::one() + (k % &self.n) * &self.n) % &self.n_squared;
        Ok(Ciphertext::new((ciphertext.value() * gk) % &self.n_squared))
    }

    /// E(m)^k = E(k · m mod n)
    pub fn scalar_mul(&self, ciphertext: &Ciphertext, k: &BigUint) -> Result<Ciphertext> {
        self.check_ciphertext(ciphertext)?;

        Ok(Ciphertext::new(ciphertext.value().modpow(k, &self.n_squared)))
    }

    /// Byte-level form of [`add`](Self::add) over minimal encodings.
    pub fn add_bytes<A: AsRef<[u8]>, B: AsRef<[u8]>>(&self, a: A, b: B) -> Result<Vec<u8>> {
        let a = self.decode_ciphertext(a.as_ref())?;
        let b = self.decode_ciphertext(b.as_ref())?;

        Ok(self.add(&a, &b)?.to_bytes())
    }

    /// Byte-level form of [`scalar_mul`](Self::scalar_mul); `k` is big-endian.
    pub fn scalar_mul_bytes<C: AsRef<[u8]>, K: AsRef<[u8]>>(
        &self,
        ciphertext: C,
        k: K,
    ) -> Result<Vec<u8>> {
        let c = self.decode_ciphertext(ciphertext.as_ref())?;
        let k = Zeroizing::new(BigUint::from_bytes_be(k.as_ref()));

        Ok(self.scalar_mul(&c, &k)?.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::crypto::{Decrypt, Encrypt};
    use crate::keypair::KeyPair;

    fn create_test_keypair() -> KeyPair {
        KeyPair::generate(512).unwrap()
    }

    #[test]
    fn homomorphic_addition() {
        let keypair = create_test_keypair();
        let public = keypair.public_key();

        let m1 = BigUint::from(50u32);
        let m2 = BigUint::from(25u32);

        let c1 = public.encrypt(&m1).unwrap();
        let c2 = public.encrypt(&m2).unwrap();
        let sum = public.add(&c1, &c2).unwrap();

        assert_eq!(keypair.decrypt(&sum).unwrap(), &m1 + &m2);
    }

    #[test]
    fn addition_wraps_modulo_n() {
        let keypair = create_test_keypair();
        let public = keypair.public_key();

        let m1 = public.n() - BigUint::one();
        let m2 = BigUint::from(3u32);

        let sum = public.add(&public.encrypt(&m1).unwrap(), &public.encrypt(&m2).unwrap()).unwrap();
        assert_eq!(keypair.decrypt(&sum).unwrap(), BigUint::from(2u32));
    }

    #[test]
    fn plaintext_addition_and_scalar_multiplication() {
        let keypair = create_test_keypair();
        let public = keypair.public_key();

        let c = public.encrypt(&BigUint::from(6u32)).unwrap();

        let shifted = public.add_plain(&c, &BigUint::from(4u32)).unwrap();
        assert_eq!(keypair.decrypt(&shifted).unwrap(), BigUint::from(10u32));

        let scaled = public.scalar_mul(&c, &BigUint::from(7u32)).unwrap();
        assert_eq!(keypair.decrypt(&scaled).unwrap(), BigUint::from(42u32));
    }

    #[test]
    fn rerandomized_ciphertext_decrypts_identically() {
        let keypair = create_test_keypair();
        let public = keypair.public_key();

        let c = public.encrypt(&BigUint::from(99u32)).unwrap();
        let fresh = public.rerandomize(&c).unwrap();

        assert_ne!(c, fresh);
        assert_eq!(keypair.decrypt(&fresh).unwrap(), BigUint::from(99u32));
    }

    #[test]
    fn byte_level_operations() {
        let keypair = create_test_keypair();
        let public = keypair.public_key();

        let c1 = public.encrypt(&BigUint::from(0x0100u32)).unwrap().to_bytes();
        let c2 = public.encrypt(&BigUint::from(0x0001u32)).unwrap().to_bytes();

        let sum = Ciphertext::from(public.add_bytes(&c1, &c2).unwrap());
        assert_eq!(keypair.decrypt(&sum).unwrap(), BigUint::from(0x0101u32));

        let doubled = Ciphertext::from(public.scalar_mul_bytes(&c1, [0x02]).unwrap());
        assert_eq!(keypair.decrypt(&doubled).unwrap(), BigUint::from(0x0200u32));
    }

    #[test]
    fn rejects_invalid_operands() {
        let keypair = create_test_keypair();
        let public = keypair.public_key();
        let valid = public.encrypt(&BigUint::one()).unwrap();

        let zero = Ciphertext::new(BigUint::zero());
        assert_eq!(public.add(&valid, &zero), Err(Error::InvalidCiphertext));

        let too_large = Ciphertext::new(public.n_squared().clone());
        assert_eq!(public.scalar_mul(&too_large, &BigUint::one()), Err(Error::InvalidCiphertext));
    }

    #[test]
    fn encoding_has_no_leading_zero() {
        let keypair = create_test_keypair();

        for _ in 0..16 {
            let bytes = keypair.public_key().encrypt(&BigUint::from(5u32)).unwrap().to_bytes();
            assert_ne!(bytes[0], 0);
            assert_eq!(Ciphertext::from(&bytes).to_bytes(), bytes);
        }
    }
}
