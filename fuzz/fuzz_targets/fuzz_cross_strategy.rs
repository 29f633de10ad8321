#![no_main]

use libfuzzer_sys::fuzz_target;

use bignat_core::{BigNat, StrategyKind, Thresholds};

/// Split the input in two and pack each half into 24-bit limbs.
fn operands(data: &[u8]) -> (BigNat, BigNat) {
    let mid = data.len() / 2;
    let pack = |bytes: &[u8]| {
        BigNat::from_limbs(
            bytes
                .chunks(3)
                .map(|c| c.iter().rev().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
                .collect(),
        )
    };
    (pack(&data[..mid]), pack(&data[mid..]))
}

fuzz_target!(|data: &[u8]| {
    // Cap at 6000 bytes (1000 limbs per operand) to keep schoolbook fast
    if data.len() > 6000 {
        return;
    }
    let (a, b) = operands(data);

    let expected = StrategyKind::Schoolbook
        .build(Thresholds::default())
        .multiply(&a, &b)
        .unwrap();
    for kind in [StrategyKind::Karatsuba, StrategyKind::Ntt, StrategyKind::Adaptive] {
        let got = kind.build(Thresholds::default()).multiply(&a, &b).unwrap();
        assert_eq!(got, expected, "{kind} != schoolbook");
    }

    let tight = Thresholds {
        karatsuba_digits: 2,
        ntt_product_digits: 8,
    };
    assert_eq!(bignat_core::mul_with(&tight, &a, &b), expected);
});
