// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigUint, ModInverse, RandPrime};
use num_integer::Integer;
use num_traits::One;
use rand::rngs::OsRng;

use crate::error::{Error, Result};

/// Maximum number of prime pairs drawn before generation gives up.
const MAX_ATTEMPTS: usize = 64;

/// Draws two distinct primes `p`, `q` whose product has exactly `bits` bits
/// and satisfies `gcd(pq, (p-1)(q-1)) = 1`.
///
/// `gen_prime` forces the top two bits of each candidate, so a
/// `bits/2`-bit prime times a `bits - bits/2`-bit prime never drops a bit.
pub fn generate_prime_pair(bits: usize) -> Result<(BigUint, BigUint)> {
    let p_bits = bits / 2;
    let q_bits = bits - p_bits;

    let mut rng = OsRng;
    for _ in 0..MAX_ATTEMPTS {
        let p = rng.gen_prime(p_bits);
        let q = rng.gen_prime(q_bits);
        if p == q {
            continue;
        }

        let n = &p * &q;
        if n.bits() != bits || !is_admissible(&n, &p, &q) {
            continue;
        }

        return Ok((p, q));
    }

    Err(Error::Generation(format!("no suitable prime pair found after {MAX_ATTEMPTS} attempts")))
}

/// `gcd(n, (p-1)(q-1)) == 1`, which guarantees that `lambda` is invertible mod `n`.
pub fn is_admissible(n: &BigUint, p: &BigUint, q: &BigUint) -> bool {
    let phi = (p - BigUint::one()) * (q - BigUint::one());
    n.gcd(&phi).is_one()
}

/// Carmichael's function for `n = pq`: `lcm(p-1, q-1)`.
pub fn carmichael(p: &BigUint, q: &BigUint) -> BigUint {
    let p_minus_1 = p - BigUint::one();
    let q_minus_1 = q - BigUint::one();
    p_minus_1.lcm(&q_minus_1)
}

/// Computes `a⁻¹ mod m`, if it exists.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    a.mod_inverse(m).and_then(|inv| inv.to_biguint())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_pair_has_requested_size() {
        for bits in [512usize, 513] {
            let (p, q) = generate_prime_pair(bits).unwrap();
            assert_ne!(p, q);
            assert_eq!((&p * &q).bits(), bits);
        }
    }

    #[test]
    fn carmichael_of_small_primes() {
        // lcm(10, 12) = 60
        assert_eq!(carmichael(&BigUint::from(11u32), &BigUint::from(13u32)), BigUint::from(60u32));
    }

    #[test]
    fn inverse_exists_only_for_units() {
        let m = BigUint::from(143u32);
        assert_eq!(mod_inverse(&BigUint::from(60u32), &m), Some(BigUint::from(31u32)));
        assert_eq!(mod_inverse(&BigUint::from(11u32), &m), None);
    }

    #[test]
    fn equal_sized_primes_are_admissible() {
        let p = BigUint::from(11u32);
        let q = BigUint::from(13u32);
        assert!(is_admissible(&(&p * &q), &p, &q));

        // 3 divides (7-1), so gcd(21, 12) = 3
        let p = BigUint::from(3u32);
        let q = BigUint::from(7u32);
        assert!(!is_admissible(&(&p * &q), &p, &q));
    }
}
