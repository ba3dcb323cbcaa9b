#![no_main]

use libfuzzer_sys::fuzz_target;
use paillier_pkey::{CryptoContext, Error, DEFAULT_KEY_BITS, MAX_KEY_BITS, MIN_KEY_BITS};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (name, value) = text.split_once('=').unwrap_or((text, ""));

    let mut ctx = CryptoContext::new();
    match ctx.ctrl_str(name, Some(value)) {
        Ok(()) => {
            assert_eq!(name, "bits");
            let bits = ctx.params().unwrap().bits();
            assert!((MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits));
        }
        Err(Error::KeySizeTooSmall { .. })
        | Err(Error::KeySizeTooLarge { .. })
        | Err(Error::UnsupportedOperation(_)) => {
            assert_eq!(ctx.params().unwrap().bits(), DEFAULT_KEY_BITS);
        }
        Err(err) => panic!("unexpected control error: {err}"),
    }

    assert_eq!(ctx.ctrl_str(name, None), Err(Error::ValueMissing));
});
