//! Decimal strings and native-width import/export.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use bignat_ntt::limb::{BASE, BASE_BITS};

use crate::arith::{add, scale};
use crate::constants::{DECIMAL_CHUNK, DECIMAL_CHUNK_DIGITS};
use crate::division::divmod_nonzero;
use crate::error::BigNatError;
use crate::multiply::mul;
use crate::nat::BigNat;

/// Base-10 rendering by divide and conquer over `10^(8 * 2^k)`.
#[must_use]
pub fn to_decimal_string(n: &BigNat) -> String {
    let Some(degn) = n.degree() else {
        return "0".to_string();
    };
    // powers[k] = 10^(8 * 2^k), up to the first one longer than n
    let mut powers = vec![BigNat::from(DECIMAL_CHUNK)];
    while powers.last().and_then(BigNat::degree).unwrap_or(0) <= degn {
        let last = &powers[powers.len() - 1];
        let next = mul(last, last);
        powers.push(next);
    }
    trace!(limbs = n.bound(), levels = powers.len(), "to_decimal_string");

    let mut out = String::new();
    collect_digits(n, &powers, true, &mut out);
    out
}

fn collect_digits(n: &BigNat, powers: &[BigNat], leading: bool, out: &mut String) {
    let Some((top, rest)) = powers.split_last() else {
        let chunk = n.small_value() + n.coeff(1) * BASE;
        if leading {
            if chunk != 0 {
                out.push_str(&chunk.to_string());
            }
        } else {
            out.push_str(&format!("{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS));
        }
        return;
    };
    let (q, r) = divmod_nonzero(n, top);
    if leading && q.is_zero() {
        collect_digits(&r, rest, true, out);
    } else {
        collect_digits(&q, rest, leading, out);
        collect_digits(&r, rest, false, out);
    }
}

/// Parse a non-empty string of ASCII decimal digits.
pub fn of_decimal_string(s: &str) -> Result<BigNat, BigNatError> {
    if s.is_empty() {
        return Err(BigNatError::Empty);
    }
    let mut acc = BigNat::zero();
    let mut chunk = 0u32;
    let mut chunk_len = 0;
    for (position, c) in s.chars().enumerate() {
        let d = c
            .to_digit(10)
            .ok_or(BigNatError::InvalidDigit { found: c, position })?;
        chunk = chunk * 10 + d;
        chunk_len += 1;
        if chunk_len == DECIMAL_CHUNK_DIGITS {
            acc = add(&scale(DECIMAL_CHUNK, &acc), &BigNat::from(chunk));
            chunk = 0;
            chunk_len = 0;
        }
    }
    if chunk_len > 0 {
        #[allow(clippy::cast_possible_truncation)]
        let weight = 10u32.pow(chunk_len as u32);
        acc = add(&scale(weight, &acc), &BigNat::from(chunk));
    }
    Ok(acc)
}

/// Export to `u32`.
pub fn to_u32(n: &BigNat) -> Result<u32, BigNatError> {
    match n.limbs() {
        [] => Ok(0),
        [d0] => Ok(*d0),
        [d0, d1] if *d1 <= 0xFF => Ok(d0 | (d1 << BASE_BITS)),
        _ => Err(BigNatError::Overflow { target: "u32" }),
    }
}

/// Export to `u64`.
pub fn to_u64(n: &BigNat) -> Result<u64, BigNatError> {
    let limb = |i: usize| u64::from(n.coeff(i));
    match n.bound() {
        0..=2 => Ok(limb(0) | (limb(1) << BASE_BITS)),
        3 if limb(2) <= 0xFFFF => Ok(limb(0) | (limb(1) << BASE_BITS) | (limb(2) << (2 * BASE_BITS))),
        _ => Err(BigNatError::Overflow { target: "u64" }),
    }
}

/// Approximate `f64` by Horner evaluation from the top limb; `inf` when too large.
#[must_use]
pub fn to_f64(n: &BigNat) -> f64 {
    let base = f64::from(BASE);
    n.limbs()
        .iter()
        .rev()
        .fold(0.0, |acc, &d| acc * base + f64::from(d))
}

impl fmt::Display for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &to_decimal_string(self))
    }
}

impl FromStr for BigNat {
    type Err = BigNatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        of_decimal_string(s)
    }
}

impl TryFrom<&BigNat> for u32 {
    type Error = BigNatError;

    fn try_from(n: &BigNat) -> Result<Self, Self::Error> {
        to_u32(n)
    }
}

impl TryFrom<&BigNat> for u64 {
    type Error = BigNatError;

    fn try_from(n: &BigNat) -> Result<Self, Self::Error> {
        to_u64(n)
    }
}
