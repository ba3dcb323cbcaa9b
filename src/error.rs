// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur while configuring a context or running the scheme.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("allocation of key material failed")]
    Allocation,

    #[error("could not bind the generated key to its context: a key is already installed")]
    Binding,

    #[error("key generation failed: {0}")]
    Generation(String),

    #[error("output buffer too small: need {required} bytes, got {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },

    #[error("input of {len} bytes cannot be decoded (at most {max} bytes accepted)")]
    Encoding { len: usize, max: usize },

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("key size too small: must be at least {min} bits, got {actual}")]
    KeySizeTooSmall { min: usize, actual: i64 },

    #[error("ciphertext is invalid or out of range")]
    InvalidCiphertext,

    #[error("key size too large: must be at most {max} bits, got {actual}")]
    KeySizeTooLarge { max: usize, actual: i64 },

    #[error("control value missing")]
    ValueMissing,

    #[error("unsupported control operation: {0}")]
    UnsupportedOperation(String),

    #[error("no key pair installed in context")]
    MissingKey,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid private key")]
    InvalidPrivateKey,

    #[error("an internal error that should never have happened and signifies a bug")]
    Internal,
}

pub type Result<T> = std::result::Result<T, Error>;
