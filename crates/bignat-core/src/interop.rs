//! Interop with the `num` crates: `BigUint` conversions and the
//! `Zero`/`One` identities.
//!
//! A 24-bit limb is exactly three little-endian bytes, so both directions
//! go through the byte representation.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::nat::BigNat;

impl From<&BigNat> for BigUint {
    fn from(n: &BigNat) -> Self {
        let bytes: Vec<u8> = n
            .limbs()
            .iter()
            .flat_map(|&d| {
                let [b0, b1, b2, _] = d.to_le_bytes();
                [b0, b1, b2]
            })
            .collect();
        BigUint::from_bytes_le(&bytes)
    }
}

impl From<&BigUint> for BigNat {
    fn from(n: &BigUint) -> Self {
        let digits = n
            .to_bytes_le()
            .chunks(3)
            .map(|chunk| {
                chunk
                    .iter()
                    .rev()
                    .fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
            })
            .collect();
        BigNat::from_limbs(digits)
    }
}

impl Zero for BigNat {
    fn zero() -> Self {
        BigNat::zero()
    }

    fn is_zero(&self) -> bool {
        BigNat::is_zero(self)
    }
}

impl One for BigNat {
    fn one() -> Self {
        BigNat::one()
    }

    fn is_one(&self) -> bool {
        BigNat::is_one(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_identities() {
        assert!(<BigNat as Zero>::zero().is_zero());
        assert!(<BigNat as One>::one().is_one());
        let sum: BigNat = [3u32, 4, 5].into_iter().map(BigNat::from).fold(Zero::zero(), |a, b| a + b);
        assert_eq!(sum, BigNat::from(12u32));
    }

    #[test]
    fn roundtrip_through_biguint() {
        for v in [0u64, 1, 0x00FF_FFFF, 0x0100_0000, u64::MAX] {
            let n = BigNat::from(v);
            let big = BigUint::from(&n);
            assert_eq!(big, BigUint::from(v));
            assert_eq!(BigNat::from(&big), n);
        }
    }

    #[test]
    fn multi_limb_values() {
        let n = BigNat::from_limbs(vec![0x00AB_CDEF, 0, 0x0012_3456, 0x0000_0007]);
        let big = BigUint::from(&n);
        assert_eq!(big.to_string(), n.to_string());
        assert_eq!(BigNat::from(&big), n);
    }
}
