//! Property-based tests for the arithmetic engine.
//!
//! `num_bigint::BigUint` serves as the reference implementation.

use num_bigint::BigUint;
use proptest::prelude::*;

use bignat_core::{
    add, bit_and, bit_or, bit_xor, checked_sub, compare, divmod, factorial, gcd, mul_karatsuba,
    mul_ntt, mul_schoolbook, mul_with, power, sub, BigNat, StrategyKind, Thresholds,
};

fn limb() -> impl Strategy<Value = u32> {
    prop_oneof![
        Just(0u32),
        Just(0x00FF_FFFF),
        0u32..=0x00FF_FFFF,
    ]
}

fn nat(max_limbs: usize) -> impl Strategy<Value = BigNat> {
    prop::collection::vec(limb(), 0..=max_limbs).prop_map(BigNat::from_limbs)
}

fn big(n: &BigNat) -> BigUint {
    BigUint::from(n)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_matches_reference(a in nat(40), b in nat(40)) {
        prop_assert_eq!(big(&add(&a, &b)), big(&a) + big(&b));
    }

    #[test]
    fn sub_saturates(a in nat(30), b in nat(30)) {
        let diff = sub(&a, &b);
        if a >= b {
            prop_assert_eq!(big(&diff), big(&a) - big(&b));
            prop_assert_eq!(checked_sub(&a, &b), Some(diff));
        } else {
            prop_assert!(diff.is_zero());
            prop_assert_eq!(checked_sub(&a, &b), None);
        }
    }

    #[test]
    fn compare_matches_reference(a in nat(12), b in nat(12)) {
        prop_assert_eq!(compare(&a, &b), big(&a).cmp(&big(&b)));
    }

    #[test]
    fn bitwise_matches_reference(a in nat(20), b in nat(20)) {
        prop_assert_eq!(big(&bit_and(&a, &b)), big(&a) & big(&b));
        prop_assert_eq!(big(&bit_or(&a, &b)), big(&a) | big(&b));
        prop_assert_eq!(big(&bit_xor(&a, &b)), big(&a) ^ big(&b));
    }

    #[test]
    fn multipliers_agree(a in nat(120), b in nat(120)) {
        let expected = big(&a) * big(&b);
        prop_assert_eq!(big(&mul_schoolbook(&a, &b)), expected.clone());
        prop_assert_eq!(big(&mul_karatsuba(&a, &b)), expected.clone());
        prop_assert_eq!(big(&mul_ntt(&a, &b).unwrap()), expected.clone());
        let tight = Thresholds { karatsuba_digits: 2, ntt_product_digits: 30 };
        prop_assert_eq!(big(&mul_with(&tight, &a, &b)), expected);
    }

    #[test]
    fn strategies_agree(a in nat(60), b in nat(60)) {
        let expected = mul_schoolbook(&a, &b);
        for kind in StrategyKind::ALL {
            let got = kind.build(Thresholds::default()).multiply(&a, &b).unwrap();
            prop_assert_eq!(&got, &expected, "strategy {}", kind);
        }
    }

    #[test]
    fn division_law(b in nat(30), a in nat(12)) {
        prop_assume!(!a.is_zero());
        let (q, r) = divmod(&b, &a).unwrap();
        prop_assert!(r < a);
        prop_assert_eq!(add(&mul_schoolbook(&q, &a), &r), b.clone());
        let (eq, er) = (big(&b) / big(&a), big(&b) % big(&a));
        prop_assert_eq!(big(&q), eq);
        prop_assert_eq!(big(&r), er);
    }

    #[test]
    fn decimal_roundtrip(a in nat(50)) {
        let s = a.to_string();
        prop_assert_eq!(&s, &big(&a).to_string());
        prop_assert_eq!(s.parse::<BigNat>().unwrap(), a);
    }

    #[test]
    fn biguint_roundtrip(a in nat(50)) {
        prop_assert_eq!(BigNat::from(&big(&a)), a);
    }

    #[test]
    fn gcd_matches_reference(a in nat(8), b in nat(8)) {
        use num_integer::Integer;
        prop_assert_eq!(big(&gcd(&a, &b)), big(&a).gcd(&big(&b)));
    }

    #[test]
    fn power_matches_reference(a in nat(4), e in 0u32..40) {
        prop_assert_eq!(big(&power(&a, e)), big(&a).pow(e));
    }
}

#[test]
fn factorial_matches_reference() {
    let mut expected = BigUint::from(1u32);
    for n in 1..=300u32 {
        expected *= n;
        if n % 50 == 0 {
            assert_eq!(big(&factorial(u64::from(n))), expected, "{n}!");
        }
    }
}

#[test]
fn huge_product_stays_exact() {
    let a = BigNat::from_limbs(vec![0x00FF_FFFF; 3000]);
    let product = bignat_core::mul(&a, &a);
    assert_eq!(big(&product), big(&a) * big(&a));
}
