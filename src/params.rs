// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{Error, Result};

/// Modulus size used by a freshly initialized context.
pub const DEFAULT_KEY_BITS: usize = 4096;

/// Smallest modulus size considered acceptable outside of testing.
///
/// Generation still succeeds below this value, but a warning is logged.
pub const MIN_SECURE_BITS: usize = 2048;

/// Hard floor on the requested modulus size.
///
/// Can be lowered with the `allow-weak-keys` feature flag.
#[cfg(not(feature = "allow-weak-keys"))]
pub const MIN_KEY_BITS: usize = 512;

#[cfg(feature = "allow-weak-keys")]
pub const MIN_KEY_BITS: usize = 128;

/// Largest modulus size a context will generate.
pub const MAX_KEY_BITS: usize = 16384;

/// Key generation parameters held by a [`CryptoContext`](crate::CryptoContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyParameters {
    bits: usize,
}

impl KeyParameters {
    pub fn new() -> Self {
        Self { bits: DEFAULT_KEY_BITS }
    }

    /// Requested modulus size in bits.
    #[inline]
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Replace the requested modulus size.
    ///
    /// Leaves the parameters untouched when `bits` lies outside
    /// [`MIN_KEY_BITS`]`..=`[`MAX_KEY_BITS`].
    pub(crate) fn set_bits(&mut self, bits: i64) -> Result<()> {
        self.bits = check_bits(bits)?;
        Ok(())
    }
}

/// Validates a requested modulus size against the supported range.
pub(crate) fn check_bits(bits: i64) -> Result<usize> {
    let size = usize::try_from(bits)
        .ok()
        .filter(|size| *size >= MIN_KEY_BITS)
        .ok_or(Error::KeySizeTooSmall { min: MIN_KEY_BITS, actual: bits })?;

    if size > MAX_KEY_BITS {
        return Err(Error::KeySizeTooLarge { max: MAX_KEY_BITS, actual: bits });
    }
    Ok(size)
}

impl Default for KeyParameters {
    fn default() -> Self {
        Self::new()
    }
}
