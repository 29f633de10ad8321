//! Golden file integration tests.
//!
//! Reads tests/testdata/bignat_golden.json and verifies every multiplication
//! strategy, division, factorial, power and gcd against known values.

use bignat_core::{
    divmod, factorial, factorial_with, gcd, power, power_with, BigNat, StrategyKind, Thresholds,
};
use bignat_tests::load_golden_data;

fn nat(s: &str) -> BigNat {
    s.parse().expect("golden operand is a decimal string")
}

// ---------------------------------------------------------------------------
// Golden: multiplication, every strategy
// ---------------------------------------------------------------------------

#[test]
fn golden_multiplication_all_strategies() {
    let data = load_golden_data().unwrap();
    for kind in StrategyKind::ALL {
        let multiplier = kind.build(Thresholds::default());
        for entry in &data.multiplication {
            let (a, b) = (nat(&entry.a), nat(&entry.b));
            let product = multiplier.multiply(&a, &b).unwrap();
            assert_eq!(product.to_string(), entry.product, "{kind}: {} * {}", entry.a, entry.b);
            let swapped = multiplier.multiply(&b, &a).unwrap();
            assert_eq!(swapped, product, "{kind}: product not commutative");
        }
    }
}

#[test]
fn golden_multiplication_operator() {
    let data = load_golden_data().unwrap();
    for entry in &data.multiplication {
        let product = nat(&entry.a) * nat(&entry.b);
        assert_eq!(product.to_string(), entry.product);
    }
}

// ---------------------------------------------------------------------------
// Golden: division
// ---------------------------------------------------------------------------

#[test]
fn golden_division() {
    let data = load_golden_data().unwrap();
    for entry in &data.division {
        let (q, r) = divmod(&nat(&entry.a), &nat(&entry.b)).unwrap();
        assert_eq!(q.to_string(), entry.quotient, "{} / {}", entry.a, entry.b);
        assert_eq!(r.to_string(), entry.remainder, "{} % {}", entry.a, entry.b);
    }
}

// ---------------------------------------------------------------------------
// Golden: number theory
// ---------------------------------------------------------------------------

#[test]
fn golden_factorial() {
    let data = load_golden_data().unwrap();
    let ntt = StrategyKind::Ntt.build(Thresholds::default());
    for entry in &data.factorial {
        assert_eq!(factorial(entry.n).to_string(), entry.value, "{}!", entry.n);
        assert_eq!(
            factorial_with(ntt.as_ref(), entry.n).unwrap().to_string(),
            entry.value,
            "{}! via ntt",
            entry.n
        );
    }
}

#[test]
fn golden_power() {
    let data = load_golden_data().unwrap();
    let karatsuba = StrategyKind::Karatsuba.build(Thresholds::default());
    for entry in &data.power {
        let base = nat(&entry.base);
        assert_eq!(
            power(&base, entry.exponent).to_string(),
            entry.value,
            "{}^{}",
            entry.base,
            entry.exponent
        );
        assert_eq!(
            power_with(karatsuba.as_ref(), &base, entry.exponent)
                .unwrap()
                .to_string(),
            entry.value
        );
    }
}

#[test]
fn golden_gcd() {
    let data = load_golden_data().unwrap();
    for entry in &data.gcd {
        let (a, b) = (nat(&entry.a), nat(&entry.b));
        assert_eq!(gcd(&a, &b).to_string(), entry.gcd, "gcd({}, {})", entry.a, entry.b);
        assert_eq!(gcd(&b, &a).to_string(), entry.gcd);
    }
}
