// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod util;

use crate::ciphertext::Ciphertext;
use crate::crypto::{Decrypt, Encrypt};
use crate::error::{Error, Result};
use crate::params::{self, MIN_SECURE_BITS};

use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public parameters of the cryptosystem.
///
/// The modulus is `n = pq`. The generator is fixed to `g = n + 1`, which
/// turns `g^m mod n²` into `1 + m·n mod n²`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) n_squared: BigUint,
    pub(crate) g: BigUint,
}

impl PublicKey {
    /// Construct a public key from its modulus.
    ///
    /// The modulus must be odd and greater than one.
    pub fn new(n: BigUint) -> Result<Self> {
        if n <= BigUint::one() || n.is_even() {
            return Err(Error::InvalidPublicKey);
        }

        let n_squared = &n * &n;
        let g = &n + BigUint::one();

        Ok(Self { n, n_squared, g })
    }

    /// Return the public modulus `n`.
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Return `n²`, the modulus of the ciphertext space.
    #[inline]
    pub fn n_squared(&self) -> &BigUint {
        &self.n_squared
    }

    /// Return the generator `g`.
    #[inline]
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Bit length of the modulus.
    #[inline]
    pub fn bits(&self) -> usize {
        self.n.bits()
    }

    /// Largest possible output of an encryption or decryption in bytes.
    ///
    /// Both directions are bounded by the byte length of `n²`.
    pub fn max_size(&self) -> usize {
        (self.n_squared.bits() + 7) / 8
    }
}

/// Secret key material.
///
/// Holds the factorization of the public modulus together with the
/// precomputed `lambda = lcm(p-1, q-1)` and `mu = lambda⁻¹ mod n`.
/// Sensitive fields are zeroized on drop.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) public_key: PublicKey,
    pub(crate) p: BigUint,
    pub(crate) q: BigUint,
    pub(crate) lambda: BigUint,
    pub(crate) mu: BigUint,
}

impl PrivateKey {
    /// Construct a private key from its prime factors.
    ///
    /// Validates that the factors are distinct, reconstruct the public
    /// modulus, and leave `lambda` invertible modulo `n`.
    pub fn new(public_key: PublicKey, p: BigUint, q: BigUint) -> Result<Self> {
        if p.is_zero() || q.is_zero() || p == q {
            return Err(Error::InvalidPrivateKey);
        }

        let n = public_key.n();
        if &(&p * &q) != n || !util::is_admissible(n, &p, &q) {
            return Err(Error::InvalidPrivateKey);
        }

        let lambda = util::carmichael(&p, &q);
        let mu = util::mod_inverse(&lambda, n).ok_or(Error::InvalidPrivateKey)?;

        Ok(Self { public_key, p, q, lambda, mu })
    }

    /// Return a reference to the associated public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

/// A complete key pair consisting of public and private components.
///
/// Secret material is zeroized when dropped.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct KeyPair {
    #[zeroize(skip)]
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Generate a key pair whose modulus has exactly `bits` bits.
    pub fn generate(bits: usize) -> Result<Self> {
        let bits = params::check_bits(i64::try_from(bits).unwrap_or(i64::MAX))?;

        if bits < MIN_SECURE_BITS {
            log::warn!(
                "{bits}-bit Paillier modulus is cryptographically weak; use at least {MIN_SECURE_BITS} bits"
            );
        }

        let (p, q) = util::generate_prime_pair(bits)?;
        Self::from_primes(p, q).map_err(|e| Error::Generation(e.to_string()))
    }

    /// Assemble a key pair from two known primes.
    pub fn from_primes(p: BigUint, q: BigUint) -> Result<Self> {
        let public = PublicKey::new(&p * &q)?;
        let secret = PrivateKey::new(public.clone(), p, q)?;

        Ok(Self { public, secret })
    }

    /// Return the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }
}

impl From<PrivateKey> for KeyPair {
    fn from(secret: PrivateKey) -> Self {
        Self { public: secret.public_key.clone(), secret }
    }
}

impl Encrypt for KeyPair {
    fn encrypt(&self, m: &BigUint) -> Result<Ciphertext> {
        self.public.encrypt(m)
    }
}

impl Decrypt for KeyPair {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint> {
        self.secret.decrypt(ciphertext)
    }
}
