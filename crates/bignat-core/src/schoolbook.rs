//! Quadratic schoolbook multiplication.

use bignat_ntt::limb::{contribute, split_limb};

use crate::nat::BigNat;

/// `p * q` by the classic double loop, with one-limb fast paths.
#[must_use]
pub fn mul_schoolbook(p: &BigNat, q: &BigNat) -> BigNat {
    schoolbook_limbs(p.limbs(), q.limbs())
}

pub(crate) fn schoolbook_limbs(p: &[u32], q: &[u32]) -> BigNat {
    match (p, q) {
        ([], _) | (_, []) => BigNat::zero(),
        ([a], [b]) => both_small(*a, *b),
        ([a], long) | (long, [a]) => one_small(long, *a),
        _ => neither_small(p, q),
    }
}

fn both_small(a: u32, b: u32) -> BigNat {
    let (lo, hi) = split_limb(u64::from(a) * u64::from(b));
    // hi < 2^24 since both limbs are below 2^24
    #[allow(clippy::cast_possible_truncation)]
    BigNat::from_limbs(vec![lo, hi as u32])
}

fn one_small(p: &[u32], q: u32) -> BigNat {
    let mut r = BigNat::create_zeroed(p.len() + 1);
    let digits = r.digits_mut();
    let q = u64::from(q);
    let mut carry = 0u64;
    for (i, &a) in p.iter().enumerate() {
        let (lo, hi) = split_limb(carry + u64::from(a) * q);
        digits[i] = lo;
        carry = hi;
    }
    contribute(digits, p.len(), carry);
    r.normalize();
    r
}

fn neither_small(p: &[u32], q: &[u32]) -> BigNat {
    let mut r = BigNat::create_zeroed(p.len() + q.len());
    let digits = r.digits_mut();
    for (i, &a) in p.iter().enumerate() {
        let a = u64::from(a);
        let mut carry = 0u64;
        let mut k = i;
        for &b in q {
            let (lo, hi) = split_limb(u64::from(digits[k]) + carry + a * u64::from(b));
            digits[k] = lo;
            carry = hi;
            k += 1;
        }
        contribute(digits, k, carry);
    }
    r.normalize();
    r
}
