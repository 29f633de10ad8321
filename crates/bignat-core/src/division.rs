//! Normalized schoolbook long division.
//!
//! The remainder buffer starts as a copy of the dividend. At each step a
//! trial quotient digit `f` for position `n` is estimated from the top limbs;
//! `f * divisor * base^n` is subtracted from the remainder and `f * base^n`
//! added to the quotient. The estimate never exceeds the true digit, so the
//! remainder stays non-negative and the loop repeats at the same position
//! until the estimate reaches zero, then moves one limb down.

use std::cmp::Ordering;

use tracing::trace;

use bignat_ntt::limb::{significant_len, split_limb, BASE, BASE_U64};

use crate::arith::shift_compare_limbs;
use crate::error::BigNatError;
use crate::nat::BigNat;

/// Subtract `f * a * base^n` from `x` in place.
///
/// # Panics
///
/// Panics if the result would be negative.
pub(crate) fn scale_sub_in_place(x: &mut [u32], f: u32, a: &[u32], n: usize) {
    let f = u64::from(f);
    let dega = a.len() - 1;
    let mut j = 0;
    let mut z = f * u64::from(a[0]);
    while z > 0 || j < dega {
        let idx = j + n;
        assert!(
            idx < x.len(),
            "scale_sub_in_place: pre-condition did not apply, result would be negative"
        );
        let (z_lo, mut z_hi) = split_limb(z);
        if z_lo <= x[idx] {
            x[idx] -= z_lo;
        } else {
            x[idx] += BASE - z_lo;
            z_hi += 1;
        }
        z = if j < dega {
            z_hi + f * u64::from(a[j + 1])
        } else {
            z_hi
        };
        j += 1;
    }
}

/// Add `f * a * base^n` to `x` in place, growing the buffer as needed.
pub(crate) fn scale_add_in_place(x: &mut Vec<u32>, f: u32, a: &[u32], n: usize) {
    let f = u64::from(f);
    let dega = a.len() - 1;
    let mut j = 0;
    let mut z = f * u64::from(a[0]);
    while z > 0 || j < dega {
        let idx = j + n;
        if idx >= x.len() {
            x.resize(idx + 1, 0);
        }
        let (lo, hi) = split_limb(u64::from(x[idx]) + (z & (BASE_U64 - 1)));
        x[idx] = lo;
        let z_hi = (z >> 24) + hi;
        z = if j < dega {
            z_hi + f * u64::from(a[j + 1])
        } else {
            z_hi
        };
        j += 1;
    }
}

/// Trial quotient digit for position `n`: never above the true digit, and
/// nonzero whenever `a * base^n <= x`.
pub(crate) fn remove_factor(x: &[u32], a: &[u32], n: usize) -> u32 {
    let xlen = significant_len(x);
    let dega = a.len() - 1;
    if xlen == 0 || xlen - 1 < dega + n {
        return 0;
    }
    let degx = xlen - 1;
    let top_two = || u64::from(x[degx]) * BASE_U64 + u64::from(x[degx - 1]);
    let f = if dega == 0 {
        let a0 = u64::from(a[0]);
        if degx == n {
            u64::from(x[n]) / a0
        } else {
            top_two() / a0
        }
    } else {
        let a_top = u64::from(a[dega]) + 1;
        if degx == dega + n {
            u64::from(x[degx]) / a_top
        } else {
            top_two() / a_top
        }
    };
    if f == 0 {
        return match shift_compare_limbs(a, n, &x[..xlen], 0) {
            Ordering::Greater => 0,
            _ => 1,
        };
    }
    // an under-estimate stays correct, the loop just repeats
    u32::try_from(f).unwrap_or(u32::MAX)
}

/// `(dividend / divisor, dividend % divisor)`.
pub fn divmod(dividend: &BigNat, divisor: &BigNat) -> Result<(BigNat, BigNat), BigNatError> {
    if divisor.is_zero() {
        return Err(BigNatError::DivisionByZero);
    }
    Ok(divmod_nonzero(dividend, divisor))
}

/// [`divmod`] for a divisor already known to be nonzero.
///
/// # Panics
///
/// Panics if `divisor` is zero.
pub(crate) fn divmod_nonzero(dividend: &BigNat, divisor: &BigNat) -> (BigNat, BigNat) {
    let Some(dega) = divisor.degree() else {
        panic!("attempt to divide by zero");
    };
    let Some(degb) = dividend.degree() else {
        return (BigNat::zero(), BigNat::zero());
    };
    if degb < dega {
        return (BigNat::zero(), dividend.clone());
    }
    trace!(dividend = dividend.bound(), divisor = divisor.bound(), "divmod");

    let a = divisor.limbs();
    let mut x = dividend.limbs().to_vec();
    let mut quotient = BigNat::create_zeroed(degb - dega + 2);
    let one = [1u32];
    let mut p = degb;
    let m = dega;
    let mut n = p - m;
    loop {
        let f = remove_factor(&x, a, n);
        if f > 0 {
            scale_sub_in_place(&mut x, f, a, n);
            scale_add_in_place(quotient.digits_mut(), f, &one, n);
        } else if n == 0 {
            break;
        } else if p == m + n {
            n -= 1;
        } else {
            n -= 1;
            p -= 1;
        }
    }

    quotient.normalize();
    (quotient, BigNat::from_limbs(x))
}

/// `dividend / divisor`.
pub fn div(dividend: &BigNat, divisor: &BigNat) -> Result<BigNat, BigNatError> {
    divmod(dividend, divisor).map(|(q, _)| q)
}

/// `dividend % divisor`.
pub fn rem(dividend: &BigNat, divisor: &BigNat) -> Result<BigNat, BigNatError> {
    divmod(dividend, divisor).map(|(_, r)| r)
}
