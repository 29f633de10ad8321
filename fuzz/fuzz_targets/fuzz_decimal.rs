#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use bignat_core::BigNat;

fuzz_target!(|data: &str| {
    if data.len() > 5000 {
        return;
    }
    match data.parse::<BigNat>() {
        Ok(n) => {
            let reference = BigUint::parse_bytes(data.as_bytes(), 10).unwrap();
            assert_eq!(n.to_string(), reference.to_string());
            assert_eq!(BigUint::from(&n), reference);
        }
        Err(_) => {
            assert!(data.is_empty() || !data.bytes().all(|b| b.is_ascii_digit()));
        }
    }
});
