// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Paillier Cryptosystem
//!
//! Probabilistic public-key encryption with additive homomorphism, based on
//! the decisional composite residuosity assumption for `n = pq`.
//!
//! Reference: [Paillier (1999), EUROCRYPT](https://link.springer.com/chapter/10.1007/3-540-48910-X_16)
//!
//! ## Usage
//!
//! A [`CryptoContext`] carries the key generation parameters and, once
//! generated, the key pair. Parameters change only through the control
//! interface ([`CryptoContext::ctrl`], [`CryptoContext::ctrl_str`]).
//! Plaintexts and ciphertexts travel as minimal big-endian byte strings;
//! the integer zero is the empty string.
//!
//! ## Security
//!
//! Moduli below [`MIN_KEY_BITS`] or above [`MAX_KEY_BITS`] are refused
//! outright, and anything below [`MIN_SECURE_BITS`] logs a warning. Private key material is zeroized on
//! drop via the `zeroize` crate, as are decoded plaintext integers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use paillier_pkey::CryptoContext;
//!
//! let mut ctx = CryptoContext::new();
//! ctx.ctrl_str("bits", Some("2048")).expect("valid key size");
//! ctx.keygen().expect("key generation failed");
//!
//! let mut ciphertext = vec![0u8; ctx.encrypt_size().unwrap()];
//! let len = ctx.encrypt_into(b"\x01\x02\x03", &mut ciphertext).expect("encryption failed");
//! ciphertext.truncate(len);
//!
//! let plaintext = ctx.decrypt_to_vec(&ciphertext).expect("decryption failed");
//! assert_eq!(plaintext, b"\x01\x02\x03");
//! ```

mod ciphertext;
mod context;
mod crypto;
mod ctrl;
mod error;
mod keypair;
mod method;
mod params;

pub use ciphertext::*;
pub use context::*;
pub use crypto::{Decrypt, Encrypt};
pub use ctrl::*;
pub use error::*;
pub use keypair::*;
pub use method::*;
pub use params::*;

pub use num_bigint_dig::BigUint;
