//! Addition, saturating subtraction, comparison, limb shifts, bitwise
//! operations and scalar multiplication.
//!
//! Every function returns a fresh normalized value; operands are borrowed.

use std::cmp::Ordering;

use bignat_ntt::limb::{split_limb, BASE, BASE_BITS};

use crate::nat::BigNat;

pub(crate) fn add_limbs(p: &[u32], q: &[u32]) -> BigNat {
    let (long, short) = if p.len() >= q.len() { (p, q) } else { (q, p) };
    let mut r = BigNat::create_zeroed(long.len() + 1);
    let digits = r.digits_mut();
    let mut carry = 0u32;
    for (i, &a) in long.iter().enumerate() {
        let s = a + short.get(i).copied().unwrap_or(0) + carry;
        digits[i] = s & (BASE - 1);
        carry = s >> BASE_BITS;
    }
    digits[long.len()] = carry;
    r.normalize();
    r
}

/// `p - q`, or `None` when `q > p`.
pub(crate) fn sub_limbs(p: &[u32], q: &[u32]) -> Option<BigNat> {
    if q.len() > p.len() {
        return None;
    }
    let mut r = BigNat::create_zeroed(p.len());
    let digits = r.digits_mut();
    let mut borrow = 0u32;
    for (i, &a) in p.iter().enumerate() {
        let b = q.get(i).copied().unwrap_or(0) + borrow;
        if a >= b {
            digits[i] = a - b;
            borrow = 0;
        } else {
            digits[i] = a + BASE - b;
            borrow = 1;
        }
    }
    if borrow != 0 {
        return None;
    }
    r.normalize();
    Some(r)
}

/// Compare two normalized limb slices.
pub(crate) fn cmp_limbs(p: &[u32], q: &[u32]) -> Ordering {
    p.len()
        .cmp(&q.len())
        .then_with(|| p.iter().rev().cmp(q.iter().rev()))
}

/// `p + q`.
#[must_use]
pub fn add(p: &BigNat, q: &BigNat) -> BigNat {
    add_limbs(p.limbs(), q.limbs())
}

/// `p - q`, saturating at zero when `q > p`.
#[must_use]
pub fn sub(p: &BigNat, q: &BigNat) -> BigNat {
    checked_sub(p, q).unwrap_or_default()
}

/// `p - q`, or `None` when `q > p`.
#[must_use]
pub fn checked_sub(p: &BigNat, q: &BigNat) -> Option<BigNat> {
    sub_limbs(p.limbs(), q.limbs())
}

/// Three-way comparison: bound first, then limbs from the top.
#[must_use]
pub fn compare(p: &BigNat, q: &BigNat) -> Ordering {
    cmp_limbs(p.limbs(), q.limbs())
}

#[must_use]
pub fn equal(p: &BigNat, q: &BigNat) -> bool {
    p.limbs() == q.limbs()
}

#[must_use]
pub fn lt(p: &BigNat, q: &BigNat) -> bool {
    compare(p, q) == Ordering::Less
}

#[must_use]
pub fn gt(p: &BigNat, q: &BigNat) -> bool {
    compare(p, q) == Ordering::Greater
}

#[must_use]
pub fn lte(p: &BigNat, q: &BigNat) -> bool {
    compare(p, q) != Ordering::Greater
}

#[must_use]
pub fn gte(p: &BigNat, q: &BigNat) -> bool {
    compare(p, q) != Ordering::Less
}

#[must_use]
pub fn min<'a>(p: &'a BigNat, q: &'a BigNat) -> &'a BigNat {
    if lt(p, q) {
        p
    } else {
        q
    }
}

#[must_use]
pub fn max<'a>(p: &'a BigNat, q: &'a BigNat) -> &'a BigNat {
    if lt(p, q) {
        q
    } else {
        p
    }
}

/// Compare `p * base^pn` with `q * base^qn` without building the shifts.
#[must_use]
pub fn shift_compare(p: &BigNat, pn: usize, q: &BigNat, qn: usize) -> Ordering {
    shift_compare_limbs(p.limbs(), pn, q.limbs(), qn)
}

pub(crate) fn shift_compare_limbs(p: &[u32], pn: usize, q: &[u32], qn: usize) -> Ordering {
    match (p.is_empty(), q.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }
    let top_p = p.len() + pn;
    let top_q = q.len() + qn;
    if top_p != top_q {
        return top_p.cmp(&top_q);
    }
    let digit = |x: &[u32], shift: usize, i: usize| {
        i.checked_sub(shift)
            .and_then(|j| x.get(j).copied())
            .unwrap_or(0)
    };
    // both shifted values are zero below min(pn, qn)
    let floor = pn.min(qn);
    for i in (floor..top_p).rev() {
        match digit(p, pn, i).cmp(&digit(q, qn, i)) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

/// `x * base^d`.
#[must_use]
pub fn shift_up(d: usize, x: &BigNat) -> BigNat {
    if x.is_zero() {
        return BigNat::zero();
    }
    let mut digits = vec![0u32; d + x.bound()];
    digits[d..].copy_from_slice(x.limbs());
    BigNat::from_limbs(digits)
}

/// `x / base^d`; zero when `d >= bound`.
#[must_use]
pub fn shift_down(d: usize, x: &BigNat) -> BigNat {
    x.as_limbs().shift_down(d).to_bignat()
}

/// Limb-wise AND over the shorter operand.
#[must_use]
pub fn bit_and(p: &BigNat, q: &BigNat) -> BigNat {
    let digits = p
        .limbs()
        .iter()
        .zip(q.limbs())
        .map(|(&a, &b)| a & b)
        .collect();
    BigNat::from_limbs(digits)
}

/// Limb-wise OR over the longer operand.
#[must_use]
pub fn bit_or(p: &BigNat, q: &BigNat) -> BigNat {
    combine_longest(p, q, |a, b| a | b)
}

/// Limb-wise XOR over the longer operand.
#[must_use]
pub fn bit_xor(p: &BigNat, q: &BigNat) -> BigNat {
    combine_longest(p, q, |a, b| a ^ b)
}

fn combine_longest(p: &BigNat, q: &BigNat, op: impl Fn(u32, u32) -> u32) -> BigNat {
    let len = p.bound().max(q.bound());
    let digits = (0..len).map(|i| op(p.coeff(i), q.coeff(i))).collect();
    BigNat::from_limbs(digits)
}

/// `k * p` for a native scalar.
#[must_use]
pub fn scale(k: u32, p: &BigNat) -> BigNat {
    scale_limbs(k, p.limbs())
}

pub(crate) fn scale_limbs(k: u32, p: &[u32]) -> BigNat {
    if k == 0 || p.is_empty() {
        return BigNat::zero();
    }
    // k < 2^32 spans at most two extra limbs
    let mut r = BigNat::create_zeroed(p.len() + 2);
    let digits = r.digits_mut();
    let mut carry = 0u64;
    for (i, &a) in p.iter().enumerate() {
        let (lo, hi) = split_limb(u64::from(a) * u64::from(k) + carry);
        digits[i] = lo;
        carry = hi;
    }
    let mut i = p.len();
    while carry > 0 {
        let (lo, hi) = split_limb(carry);
        digits[i] = lo;
        carry = hi;
        i += 1;
    }
    r.normalize();
    r
}

impl PartialOrd for BigNat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNat {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
