#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use bignat_core::{add, divmod, mul, BigNat, BigNatError};

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (dividend, divisor) = input;
    if dividend.len() > 3000 || divisor.len() > 3000 {
        return;
    }
    let b = BigNat::from(&BigUint::from_bytes_le(&dividend));
    let a = BigNat::from(&BigUint::from_bytes_le(&divisor));

    match divmod(&b, &a) {
        Ok((q, r)) => {
            assert!(r < a, "remainder not below divisor");
            assert_eq!(add(&mul(&q, &a), &r), b, "division law");
        }
        Err(err) => {
            assert!(a.is_zero());
            assert_eq!(err, BigNatError::DivisionByZero);
        }
    }
});
