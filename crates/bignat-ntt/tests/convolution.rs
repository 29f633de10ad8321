//! Property-based tests for the NTT pipeline.
//!
//! `num-bigint` serves as the reference multiplier.

use num_bigint::BigUint;
use proptest::prelude::*;

use bignat_ntt::field::{mod_add, mod_mul, principal_root_of_order, P};
use bignat_ntt::limb::BASE_MASK;
use bignat_ntt::transform::{convolve, inverse_transform, transform};

fn to_biguint(limbs: &[u32]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::ZERO, |acc, &d| (acc << 24u32) + BigUint::from(d))
}

fn limbs_strategy(max_len: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..=BASE_MASK, 0..max_len).prop_map(|mut v| {
        while v.last() == Some(&0) {
            v.pop();
        }
        v
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// NTT multiplication agrees with `BigUint` multiplication.
    #[test]
    fn multiply_matches_biguint(u in limbs_strategy(120), v in limbs_strategy(120)) {
        let got = bignat_ntt::multiply(&u, &v).unwrap();
        prop_assert_eq!(to_biguint(&got), to_biguint(&u) * to_biguint(&v));
        prop_assert!(got.last() != Some(&0), "product not normalized");
    }

    /// Squaring agrees with general multiplication.
    #[test]
    fn square_matches_multiply(u in limbs_strategy(80)) {
        prop_assert_eq!(bignat_ntt::square(&u).unwrap(), bignat_ntt::multiply(&u, &u).unwrap());
    }

    /// Forward then inverse transform is the identity.
    #[test]
    fn transform_roundtrip(exp in 0u32..8, seed in prop::collection::vec(0u32..P, 128)) {
        let len = 1usize << exp;
        let root = principal_root_of_order(exp).unwrap();
        let forward = transform(len, root, &seed).unwrap();
        prop_assert_eq!(inverse_transform(len, root, &forward).unwrap(), seed[..len].to_vec());
    }

    /// Convolution matches the quadratic definition.
    #[test]
    fn convolution_matches_definition(
        u in prop::collection::vec(0u32..P, 16),
        v in prop::collection::vec(0u32..P, 16),
    ) {
        let mut expected = vec![0u32; 16];
        for i in 0..16 {
            for j in 0..16 {
                let k = (i + j) % 16;
                expected[k] = mod_add(expected[k], mod_mul(u[i], v[j]));
            }
        }
        prop_assert_eq!(convolve(16, 4, &u, &v).unwrap(), expected);
    }
}
