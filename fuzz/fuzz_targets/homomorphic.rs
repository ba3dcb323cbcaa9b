#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use paillier_pkey::{Decrypt, Encrypt, KeyPair};

use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate(256).unwrap());
    let public = keypair.public_key();
    let n = public.n();

    let (m1_bytes, m2_bytes) = data.split_at(data.len() / 2);
    let m1 = BigUint::from_bytes_be(m1_bytes) % n;
    let m2 = BigUint::from_bytes_be(m2_bytes) % n;

    let c1 = public.encrypt(&m1).unwrap();
    let c2 = public.encrypt(&m2).unwrap();

    let sum = public.add(&c1, &c2).unwrap();
    assert_eq!(keypair.decrypt(&sum).unwrap(), (&m1 + &m2) % n);

    let product = public.scalar_mul(&c1, &m2).unwrap();
    assert_eq!(keypair.decrypt(&product).unwrap(), (&m1 * &m2) % n);
});
