//! Karatsuba multiplication over limb views.

use tracing::trace;

use crate::arith::{add, add_limbs, shift_up, sub};
use crate::constants::MIN_DIGITS_KARATSUBA;
use crate::nat::BigNat;
use crate::schoolbook::schoolbook_limbs;
use crate::view::Limbs;

/// One Karatsuba level, delegating the three sub-products to `mul`.
///
/// Operands whose larger bound is at most [`MIN_DIGITS_KARATSUBA`] go
/// straight to schoolbook.
pub fn rec_mul_karatsuba<F>(mul: &F, p: Limbs<'_>, q: Limbs<'_>) -> BigNat
where
    F: Fn(Limbs<'_>, Limbs<'_>) -> BigNat,
{
    let bmax = p.bound().max(q.bound());
    if bmax <= MIN_DIGITS_KARATSUBA {
        return schoolbook_limbs(p.as_slice(), q.as_slice());
    }
    let k = bmax / 2;
    trace!(bp = p.bound(), bq = q.bound(), k, "karatsuba split");

    let (a0, a1) = (p.restrict_to(k), p.shift_down(k));
    let (b0, b1) = (q.restrict_to(k), q.shift_down(k));
    let q0 = mul(a0, b0);
    let q2 = mul(a1, b1);
    let sa = add_limbs(a0.as_slice(), a1.as_slice());
    let sb = add_limbs(b0.as_slice(), b1.as_slice());
    let q1 = mul(sa.as_limbs(), sb.as_limbs());

    // q1 >= q0 + q2, so the subtraction never saturates
    let middle = sub(&q1, &add(&q0, &q2));
    add(&q0, &shift_up(k, &add(&middle, &shift_up(k, &q2))))
}

/// Karatsuba recursing into itself.
#[must_use]
pub fn mul_karatsuba(p: &BigNat, q: &BigNat) -> BigNat {
    karatsuba_limbs(p.as_limbs(), q.as_limbs())
}

fn karatsuba_limbs(p: Limbs<'_>, q: Limbs<'_>) -> BigNat {
    rec_mul_karatsuba(&karatsuba_limbs, p, q)
}
