// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::context::CryptoContext;
use crate::error::Result;

/// Entry points a public-key dispatch framework calls on a scheme.
///
/// `encrypt` and `decrypt` fold the two-phase sizing protocol into one call:
/// with `out == None` they report the maximum output size, otherwise they
/// write into `out` and report the written length.
pub trait PkeyMethod {
    type Context;

    /// Numeric identifier the framework registers the scheme under.
    fn id(&self) -> i32;

    /// Name the framework looks the scheme up by.
    fn name(&self) -> &'static str;

    fn init(&self) -> Result<Self::Context>;

    fn copy(&self, src: &Self::Context) -> Result<Self::Context>;

    fn cleanup(&self, ctx: &mut Self::Context);

    fn keygen(&self, ctx: &mut Self::Context) -> Result<()>;

    fn encrypt(&self, ctx: &Self::Context, out: Option<&mut [u8]>, input: &[u8]) -> Result<usize>;

    fn decrypt(&self, ctx: &Self::Context, out: Option<&mut [u8]>, input: &[u8]) -> Result<usize>;

    fn ctrl(&self, ctx: &mut Self::Context, code: i32, value: i64) -> Result<()>;

    fn ctrl_str(&self, ctx: &mut Self::Context, name: &str, value: Option<&str>) -> Result<()>;
}

/// The Paillier scheme as seen by a dispatch framework.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaillierMethod;

impl PaillierMethod {
    /// ASCII "PA".
    pub const PKEY_ID: i32 = 0x5041;
    pub const NAME: &'static str = "paillier";
}

impl PkeyMethod for PaillierMethod {
    type Context = CryptoContext;

    fn id(&self) -> i32 {
        Self::PKEY_ID
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn init(&self) -> Result<CryptoContext> {
        Ok(CryptoContext::new())
    }

    fn copy(&self, src: &CryptoContext) -> Result<CryptoContext> {
        src.copy()
    }

    fn cleanup(&self, ctx: &mut CryptoContext) {
        ctx.cleanup();
    }

    fn keygen(&self, ctx: &mut CryptoContext) -> Result<()> {
        ctx.keygen().map(|_| ())
    }

    fn encrypt(&self, ctx: &CryptoContext, out: Option<&mut [u8]>, input: &[u8]) -> Result<usize> {
        match out {
            None => ctx.encrypt_size(),
            Some(out) => ctx.encrypt_into(input, out),
        }
    }

    fn decrypt(&self, ctx: &CryptoContext, out: Option<&mut [u8]>, input: &[u8]) -> Result<usize> {
        match out {
            None => ctx.decrypt_size(),
            Some(out) => ctx.decrypt_into(input, out),
        }
    }

    fn ctrl(&self, ctx: &mut CryptoContext, code: i32, value: i64) -> Result<()> {
        ctx.ctrl(code, value)
    }

    fn ctrl_str(&self, ctx: &mut CryptoContext, name: &str, value: Option<&str>) -> Result<()> {
        ctx.ctrl_str(name, value)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::ctrl::CTRL_KEYGEN_BITS;
    use crate::error::Error;

    /// Drives a scheme purely through its method table.
    fn roundtrip<M: PkeyMethod>(method: &M, ctx: &M::Context, message: &[u8]) -> Vec<u8> {
        let size = method.encrypt(ctx, None, message).unwrap();
        let mut ciphertext = vec![0u8; size];
        let len = method.encrypt(ctx, Some(&mut ciphertext), message).unwrap();
        ciphertext.truncate(len);

        let size = method.decrypt(ctx, None, &ciphertext).unwrap();
        let mut plaintext = vec![0u8; size];
        let len = method.decrypt(ctx, Some(&mut plaintext), &ciphertext).unwrap();
        plaintext.truncate(len);
        plaintext
    }

    #[test]
    fn scenario_through_method_table() {
        let method = PaillierMethod;
        assert_eq!(method.name(), "paillier");
        assert_eq!(method.id(), PaillierMethod::PKEY_ID);
        assert_ne!(method.id(), 0);

        let mut ctx = method.init().unwrap();
        method.ctrl_str(&mut ctx, "bits", Some("512")).unwrap();
        method.keygen(&mut ctx).unwrap();

        assert_eq!(roundtrip(&method, &ctx, &[0x01, 0x02, 0x03]), vec![0x01, 0x02, 0x03]);

        method.cleanup(&mut ctx);
        assert_eq!(method.encrypt(&ctx, None, &[]), Err(Error::Internal));
    }

    #[test]
    fn size_query_ignores_input() {
        let method = PaillierMethod;
        let mut ctx = method.init().unwrap();
        method.ctrl(&mut ctx, CTRL_KEYGEN_BITS, 512).unwrap();
        method.keygen(&mut ctx).unwrap();

        let expected = ctx.encrypt_size().unwrap();
        assert_eq!(method.encrypt(&ctx, None, &[0xFF; 4096]).unwrap(), expected);
        assert_eq!(method.decrypt(&ctx, None, &[]).unwrap(), expected);
    }

    #[test]
    fn short_buffer_through_method_table() {
        let method = PaillierMethod;
        let mut ctx = method.init().unwrap();
        method.ctrl(&mut ctx, CTRL_KEYGEN_BITS, 512).unwrap();
        method.keygen(&mut ctx).unwrap();

        let size = method.encrypt(&ctx, None, &[]).unwrap();
        let mut out = vec![0u8; size - 1];
        assert_eq!(
            method.encrypt(&ctx, Some(&mut out), &[0x01]),
            Err(Error::BufferTooSmall { required: size, capacity: size - 1 })
        );
    }

    #[test]
    fn copy_before_keygen_through_method_table() {
        let method = PaillierMethod;
        let mut src = method.init().unwrap();
        method.ctrl_str(&mut src, "bits", Some("3072")).unwrap();

        let dst = method.copy(&src).unwrap();
        assert_eq!(dst.params().unwrap().bits(), 3072);
        assert_eq!(method.encrypt(&dst, None, &[]), Err(Error::MissingKey));
    }
}
