// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration of a [`CryptoContext`].
//!
//! Requests arrive either as a numeric code with an integer value
//! ([`CryptoContext::ctrl`]) or as a name with an optional string value
//! ([`CryptoContext::ctrl_str`]). Both resolve to a [`ControlKey`] and then
//! to a validated setter; this is the only way to change the parameters of
//! a context after it has been created.

use std::fmt;
use std::str::FromStr;

use crate::context::CryptoContext;
use crate::error::{Error, Result};

/// Base of algorithm-specific control codes.
pub const CTRL_ALG_BASE: i32 = 0x1000;

/// Numeric code of the "set keygen bits" request.
pub const CTRL_KEYGEN_BITS: i32 = CTRL_ALG_BASE + 1;

/// Configuration requests understood by this scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    /// Modulus size for the next key generation.
    KeygenBits,
}

impl ControlKey {
    pub const ALL: [ControlKey; 1] = [ControlKey::KeygenBits];

    /// String name accepted by [`CryptoContext::ctrl_str`].
    pub fn name(self) -> &'static str {
        match self {
            ControlKey::KeygenBits => "bits",
        }
    }

    /// Numeric code accepted by [`CryptoContext::ctrl`].
    pub fn code(self) -> i32 {
        match self {
            ControlKey::KeygenBits => CTRL_KEYGEN_BITS,
        }
    }

    pub fn from_code(code: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.code() == code)
            .ok_or_else(|| Error::UnsupportedOperation(format!("control code {code:#x}")))
    }
}

impl FromStr for ControlKey {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == name)
            .ok_or_else(|| Error::UnsupportedOperation(name.to_owned()))
    }
}

impl fmt::Display for ControlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl CryptoContext {
    /// Set the modulus size used by the next [`keygen`](Self::keygen).
    ///
    /// Fails with [`Error::KeySizeTooSmall`] below
    /// [`MIN_KEY_BITS`](crate::MIN_KEY_BITS) and [`Error::KeySizeTooLarge`]
    /// above [`MAX_KEY_BITS`](crate::MAX_KEY_BITS), leaving the context
    /// unchanged.
    pub fn set_keygen_bits(&mut self, bits: i64) -> Result<()> {
        self.params_mut()?.set_bits(bits)?;
        log::debug!("keygen bits set to {bits}");
        Ok(())
    }

    /// Apply a numeric control request.
    pub fn ctrl(&mut self, code: i32, value: i64) -> Result<()> {
        self.apply(ControlKey::from_code(code)?, value)
    }

    /// Apply a named control request.
    ///
    /// The value is required and is parsed leniently: leading whitespace and
    /// an optional sign followed by decimal digits; anything else reads as
    /// zero and is then rejected by the setter.
    pub fn ctrl_str(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        let value = value.ok_or(Error::ValueMissing)?;
        let key = name.parse::<ControlKey>()?;

        self.apply(key, parse_int(value))
    }

    fn apply(&mut self, key: ControlKey, value: i64) -> Result<()> {
        match key {
            ControlKey::KeygenBits => self.set_keygen_bits(value),
        }
    }
}

/// Parses the leading integer of `s`, saturating on overflow.
fn parse_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
