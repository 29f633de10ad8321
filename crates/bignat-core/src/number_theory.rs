//! Powers, greatest common divisor and factorial.

use std::convert::Infallible;

use bignat_ntt::limb::BASE_BITS;

use crate::division::divmod_nonzero;
use crate::error::BigNatError;
use crate::multiply::mul;
use crate::nat::BigNat;
use crate::strategy::Multiplier;

/// Right-to-left square-and-multiply over the exponent bits, least
/// significant first.
fn pow_by_squaring<E, I, F>(base: &BigNat, bits: I, mul: F) -> Result<BigNat, E>
where
    I: IntoIterator<Item = bool>,
    I::IntoIter: ExactSizeIterator,
    F: Fn(&BigNat, &BigNat) -> Result<BigNat, E>,
{
    let bits = bits.into_iter();
    let total = bits.len();
    let mut acc = BigNat::one();
    let mut x = base.clone();
    for (i, bit) in bits.enumerate() {
        if bit {
            acc = mul(&x, &acc)?;
        }
        if i + 1 < total {
            x = mul(&x, &x)?;
        }
    }
    Ok(acc)
}

fn u32_bits(exponent: u32) -> impl ExactSizeIterator<Item = bool> {
    let len = (u32::BITS - exponent.leading_zeros()) as usize;
    (0..len).map(move |i| (exponent >> i) & 1 == 1)
}

fn bignat_bits(exponent: &BigNat) -> impl ExactSizeIterator<Item = bool> + '_ {
    let per_limb = BASE_BITS as usize;
    let limbs = exponent.limbs();
    (0..exponent.bits()).map(move |i| (limbs[i / per_limb] >> (i % per_limb)) & 1 == 1)
}

/// `base^exponent` with the adaptive multiplier; `0^0 = 1`.
#[must_use]
pub fn power(base: &BigNat, exponent: u32) -> BigNat {
    pow_by_squaring(base, u32_bits(exponent), |a, b| {
        Ok::<_, Infallible>(mul(a, b))
    })
    .unwrap_or_else(|never| match never {})
}

/// `base^exponent` for an arbitrary-precision exponent.
#[must_use]
pub fn power_big(base: &BigNat, exponent: &BigNat) -> BigNat {
    pow_by_squaring(base, bignat_bits(exponent), |a, b| {
        Ok::<_, Infallible>(mul(a, b))
    })
    .unwrap_or_else(|never| match never {})
}

/// `base^exponent` using the given multiplier.
pub fn power_with(
    multiplier: &dyn Multiplier,
    base: &BigNat,
    exponent: u32,
) -> Result<BigNat, BigNatError> {
    pow_by_squaring(base, u32_bits(exponent), |a, b| multiplier.multiply(a, b))
}

/// `base^exponent` for an arbitrary-precision exponent using the given multiplier.
pub fn power_big_with(
    multiplier: &dyn Multiplier,
    base: &BigNat,
    exponent: &BigNat,
) -> Result<BigNat, BigNatError> {
    pow_by_squaring(base, bignat_bits(exponent), |a, b| multiplier.multiply(a, b))
}

/// Greatest common divisor by Euclid's algorithm; `gcd(0, 0) = 0`.
#[must_use]
pub fn gcd(a: &BigNat, b: &BigNat) -> BigNat {
    let (mut small, mut large) = if a < b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    };
    while !small.is_zero() {
        let (_, r) = divmod_nonzero(&large, &small);
        large = small;
        small = r;
    }
    large
}

fn product_range<E, F>(lo: u64, hi: u64, mul: &F) -> Result<BigNat, E>
where
    F: Fn(&BigNat, &BigNat) -> Result<BigNat, E>,
{
    if lo == hi {
        return Ok(BigNat::from(lo));
    }
    let mid = lo + (hi - lo) / 2;
    let left = product_range(lo, mid, mul)?;
    let right = product_range(mid + 1, hi, mul)?;
    mul(&left, &right)
}

/// `n!` as a balanced product tree; `0! = 1`.
#[must_use]
pub fn factorial(n: u64) -> BigNat {
    if n == 0 {
        return BigNat::one();
    }
    product_range(1, n, &|a: &BigNat, b: &BigNat| Ok::<_, Infallible>(mul(a, b)))
        .unwrap_or_else(|never| match never {})
}

/// `n!` using the given multiplier.
pub fn factorial_with(multiplier: &dyn Multiplier, n: u64) -> Result<BigNat, BigNatError> {
    if n == 0 {
        return Ok(BigNat::one());
    }
    product_range(1, n, &|a: &BigNat, b: &BigNat| multiplier.multiply(a, b))
}
