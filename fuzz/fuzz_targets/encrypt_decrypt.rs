#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

use num_bigint_dig::BigUint;
use paillier_pkey::{CryptoContext, Error, KeyPair};

static CONTEXT: OnceLock<CryptoContext> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let ctx = CONTEXT.get_or_init(|| {
        let mut ctx = CryptoContext::new();
        ctx.assign_key(KeyPair::generate(256).unwrap()).unwrap();
        ctx
    });

    let n = ctx.key().unwrap().public_key().n().clone();
    let ciphertext = match ctx.encrypt_to_vec(data) {
        Ok(ct) => ct,
        Err(Error::EncryptionFailed(_)) | Err(Error::Encoding { .. }) => {
            // plaintext >= n or longer than the ciphertext bound
            assert!(BigUint::from_bytes_be(data) >= n || data.len() > ctx.encrypt_size().unwrap());
            return;
        }
        Err(err) => panic!("unexpected encryption error: {err}"),
    };

    assert!(ciphertext.first().map_or(false, |b| *b != 0), "ciphertext has a leading zero");

    let plaintext = ctx.decrypt_to_vec(&ciphertext).expect("decryption failed for valid ciphertext");
    assert_eq!(BigUint::from_bytes_be(data), BigUint::from_bytes_be(&plaintext));
    assert!(plaintext.first().map_or(true, |b| *b != 0), "plaintext has a leading zero");

    // whatever the input, decryption must return an error rather than panic
    let _ = ctx.decrypt_to_vec(data);
});
