// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Draws before a unit of `Z_n` is considered impossible to find.
const MAX_NONCE_ATTEMPTS: usize = 128;

/// L(x) = (x - 1) / n
///
/// Well-defined for `x = c^λ mod n²`, since such `x ≡ 1 (mod n)`.
#[inline]
pub fn l_function(x: &BigUint, n: &BigUint) -> Option<BigUint> {
    if x.is_zero() || n.is_zero() {
        return None;
    }
    Some((x - BigUint::one()) / n)
}

/// Samples a fresh `r` in `[1, n)` with `gcd(r, n) = 1`.
pub fn sample_unit(n: &BigUint) -> Result<Zeroizing<BigUint>> {
    let mut rng = OsRng;
    for _ in 0..MAX_NONCE_ATTEMPTS {
        let r = Zeroizing::new(rng.gen_biguint_range(&BigUint::one(), n));
        if r.gcd(n).is_one() {
            return Ok(r);
        }
    }

    Err(Error::EncryptionFailed("could not sample a nonce coprime to the modulus".into()))
}

/// Converts a non-negative integer into its minimal big-endian byte form.
///
/// Zero maps to the empty sequence. Every other value has no leading zero
/// byte, so the encoding is a bijection with [`decode`].
pub fn biguint_to_bytes_minimal(m: &BigUint) -> Vec<u8> {
    if m.is_zero() {
        return Vec::new();
    }
    m.to_bytes_be()
}

/// Decodes big-endian `input` as an unsigned integer.
///
/// Inputs longer than `max` bytes cannot represent a value of the key's
/// domain and are rejected. The empty sequence decodes to zero.
pub fn decode(input: &[u8], max: usize) -> Result<Zeroizing<BigUint>> {
    if input.len() > max {
        return Err(Error::Encoding { len: input.len(), max });
    }
    Ok(Zeroizing::new(BigUint::from_bytes_be(input)))
}

/// Writes the minimal encoding of `value` to the front of `out`.
///
/// Returns the number of bytes written; bytes past that length are left
/// untouched.
pub fn write_minimal(value: &BigUint, out: &mut [u8]) -> Result<usize> {
    let bytes = Zeroizing::new(biguint_to_bytes_minimal(value));
    if bytes.len() > out.len() {
        return Err(Error::BufferTooSmall { required: bytes.len(), capacity: out.len() });
    }

    out[..bytes.len()].copy_from_slice(&bytes);
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn zero_encodes_as_empty() {
        assert!(biguint_to_bytes_minimal(&BigUint::zero()).is_empty());
        assert!(decode(&[], 8).unwrap().is_zero());
    }

    #[test]
    fn encoding_has_no_leading_zero() {
        let value = BigUint::from(0x0102u32);
        assert_eq!(biguint_to_bytes_minimal(&value), vec![0x01, 0x02]);

        // non-canonical input still decodes to the same value
        assert_eq!(*decode(&[0x00, 0x01, 0x02], 8).unwrap(), value);
    }

    #[test]
    fn decode_rejects_oversized_input() {
        assert_eq!(decode(&[1, 2, 3], 2).err(), Some(Error::Encoding { len: 3, max: 2 }));
    }

    #[test]
    fn write_minimal_leaves_tail_untouched() {
        let mut out = [0xAAu8; 4];
        let len = write_minimal(&BigUint::from(0x0102u32), &mut out).unwrap();

        assert_eq!(len, 2);
        assert_eq!(out, [0x01, 0x02, 0xAA, 0xAA]);
    }

    #[test]
    fn write_minimal_of_zero_writes_nothing() {
        let mut out = [0xAAu8; 2];
        assert_eq!(write_minimal(&BigUint::zero(), &mut out).unwrap(), 0);
        assert_eq!(out, [0xAA, 0xAA]);
    }

    #[test]
    fn write_minimal_rejects_short_buffer() {
        let mut out = [0u8; 1];
        let result = write_minimal(&BigUint::from(0x0102u32), &mut out);
        assert_eq!(result, Err(Error::BufferTooSmall { required: 2, capacity: 1 }));
    }

    #[test]
    fn sampled_nonce_is_a_unit() {
        let n = BigUint::from(143u32);
        for _ in 0..32 {
            let r = sample_unit(&n).unwrap();
            assert!(!r.is_zero() && *r < n);
            assert!(r.gcd(&n).is_one());
        }
    }

    #[test]
    fn l_function_divides_out_modulus() {
        let n = BigUint::from(143u32);
        let x = &n * BigUint::from(7u32) + BigUint::one();
        assert_eq!(l_function(&x, &n), Some(BigUint::from(7u32)));
        assert_eq!(l_function(&BigUint::zero(), &n), None);
    }
}
