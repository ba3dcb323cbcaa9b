// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::ciphertext::Ciphertext;
use crate::crypto::{util, Decrypt, Encrypt};
use crate::error::{Error, Result};
use crate::keypair::KeyPair;
use crate::params::KeyParameters;

use num_bigint_dig::BigUint;
use zeroize::Zeroizing;

/// Stateful session binding key generation parameters to (at most) one key pair.
///
/// A fresh context requests a [`DEFAULT_KEY_BITS`](crate::DEFAULT_KEY_BITS)
/// modulus and holds no key. [`keygen`](Self::keygen) or
/// [`assign_key`](Self::assign_key) installs one; encryption and decryption
/// then follow a two-phase protocol:
///
/// 1. [`encrypt_size`](Self::encrypt_size) / [`decrypt_size`](Self::decrypt_size)
///    report the largest possible output without touching the input.
/// 2. [`encrypt_into`](Self::encrypt_into) / [`decrypt_into`](Self::decrypt_into)
///    require a buffer at least that large and return the number of bytes
///    actually written.
#[allow(missing_debug_implementations)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct CryptoContext {
    params: Option<KeyParameters>,
    key: Option<KeyPair>,
}

impl CryptoContext {
    /// Create a context with default parameters and no key.
    pub fn new() -> Self {
        Self { params: Some(KeyParameters::new()), key: None }
    }

    /// Duplicate this context.
    ///
    /// Parameters are copied by value. An installed key pair is deep-cloned,
    /// so both contexts own independent key material.
    pub fn copy(&self) -> Result<Self> {
        let params = self.params.ok_or(Error::Internal)?;

        Ok(Self { params: Some(params), key: self.key.clone() })
    }

    /// Release parameters and key material.
    ///
    /// The key pair is zeroized as it is dropped. Every later operation
    /// except `cleanup` itself fails with [`Error::Internal`].
    pub fn cleanup(&mut self) {
        self.params = None;
        self.key = None;
    }

    /// Current key generation parameters.
    pub fn params(&self) -> Result<&KeyParameters> {
        self.params.as_ref().ok_or(Error::Internal)
    }

    pub(crate) fn params_mut(&mut self) -> Result<&mut KeyParameters> {
        self.params.as_mut().ok_or(Error::Internal)
    }

    /// Generate a key pair of the configured size and install it.
    ///
    /// Fails with [`Error::Binding`] without generating anything when a key
    /// is already installed; use [`take_key`](Self::take_key) first to
    /// replace it. A failed generation leaves the context without a key.
    pub fn keygen(&mut self) -> Result<&KeyPair> {
        let bits = self.params()?.bits();
        if self.key.is_some() {
            return Err(Error::Binding);
        }

        log::debug!("generating {bits}-bit Paillier key pair");
        let keypair = KeyPair::generate(bits)?;
        log::debug!("generated {}-bit Paillier key pair", keypair.public_key().bits());

        Ok(self.key.insert(keypair))
    }

    /// Install `key`, returning the previously held key pair if any.
    pub fn assign_key(&mut self, key: KeyPair) -> Result<Option<KeyPair>> {
        self.params()?;

        log::debug!("installing {}-bit Paillier key pair", key.public_key().bits());
        Ok(self.key.replace(key))
    }

    /// Remove and return the installed key pair.
    pub fn take_key(&mut self) -> Option<KeyPair> {
        self.key.take()
    }

    /// The installed key pair.
    pub fn key(&self) -> Result<&KeyPair> {
        self.params()?;
        self.key.as_ref().ok_or(Error::MissingKey)
    }

    /// Largest possible ciphertext length in bytes.
    pub fn encrypt_size(&self) -> Result<usize> {
        Ok(self.key()?.public_key().max_size())
    }

    /// Largest possible plaintext length in bytes.
    ///
    /// Uses the same bound as [`encrypt_size`](Self::encrypt_size).
    pub fn decrypt_size(&self) -> Result<usize> {
        Ok(self.key()?.public_key().max_size())
    }

    /// Encrypt big-endian plaintext `input` into `out`.
    ///
    /// `out` must hold at least [`encrypt_size`](Self::encrypt_size) bytes.
    /// Returns the length of the minimal ciphertext encoding written to the
    /// front of `out`.
    ///
    /// `input` longer than [`encrypt_size`](Self::encrypt_size) fails with
    /// [`Error::Encoding`] on its length alone, even when the excess bytes
    /// are leading zeros that would not change the value.
    pub fn encrypt_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize> {
        let public = self.key()?.public_key();
        let required = ensure_capacity(public.max_size(), out)?;

        let m = util::decode(input, required)?;
        let c = Zeroizing::new(public.encrypt(&m)?);

        util::write_minimal(c.value(), out)
    }

    /// Decrypt big-endian ciphertext `input` into `out`.
    ///
    /// `out` must hold at least [`decrypt_size`](Self::decrypt_size) bytes.
    /// Returns the length of the minimal plaintext encoding, which is zero
    /// when the plaintext is zero.
    ///
    /// As with [`encrypt_into`](Self::encrypt_into), oversized `input` fails
    /// with [`Error::Encoding`] by length, leading zeros included.
    pub fn decrypt_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize> {
        let keypair = self.key()?;
        let required = ensure_capacity(keypair.public_key().max_size(), out)?;

        let c = util::decode(input, required)?;
        let c = Zeroizing::new(Ciphertext::new(BigUint::clone(&c)));
        let m = Zeroizing::new(keypair.private_key().decrypt(&c)?);

        util::write_minimal(&m, out)
    }

    /// Encrypt into a freshly allocated buffer trimmed to the written length.
    pub fn encrypt_to_vec(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut out = allocate(self.encrypt_size()?)?;
        let len = self.encrypt_into(input, &mut out)?;
        out.truncate(len);
        Ok(out)
    }

    /// Decrypt into a freshly allocated buffer trimmed to the written length.
    pub fn decrypt_to_vec(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut out = allocate(self.decrypt_size()?)?;
        let len = self.decrypt_into(input, &mut out)?;
        out.truncate(len);
        Ok(out)
    }
}

impl Default for CryptoContext {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_capacity(required: usize, out: &[u8]) -> Result<usize> {
    if out.len() < required {
        return Err(Error::BufferTooSmall { required, capacity: out.len() });
    }
    Ok(required)
}

fn allocate(len: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|_| Error::Allocation)?;
    out.resize(len, 0);
    Ok(out)
}
