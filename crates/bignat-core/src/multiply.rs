//! Multiplication entry points and the size-based dispatcher.

use std::fmt;

use tracing::{debug, trace};

use bignat_ntt::{predicted_result_bits, NTT_CAPACITY_BITS};

use crate::error::BigNatError;
use crate::karatsuba::rec_mul_karatsuba;
use crate::nat::BigNat;
use crate::schoolbook::schoolbook_limbs;
use crate::thresholds::Thresholds;
use crate::view::Limbs;

/// Which algorithm the dispatcher picked for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulMethod {
    Schoolbook,
    Karatsuba,
    Ntt,
}

impl fmt::Display for MulMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Schoolbook => "schoolbook",
            Self::Karatsuba => "karatsuba",
            Self::Ntt => "ntt",
        })
    }
}

/// `p * q` through the NTT pipeline.
///
/// Fails with [`BigNatError::Ntt`] when the product exceeds the descriptor
/// table (`2^27` bits).
pub fn mul_ntt(p: &BigNat, q: &BigNat) -> Result<BigNat, BigNatError> {
    let digits = bignat_ntt::multiply(p.limbs(), q.limbs())?;
    Ok(BigNat::from_limbs(digits))
}

/// `p^2` through the NTT pipeline, transforming the operand once.
pub fn square_ntt(p: &BigNat) -> Result<BigNat, BigNatError> {
    let digits = bignat_ntt::square(p.limbs())?;
    Ok(BigNat::from_limbs(digits))
}

/// Algorithm the adaptive dispatcher uses for operands of these sizes.
#[must_use]
pub fn select_method(thresholds: &Thresholds, p: Limbs<'_>, q: Limbs<'_>) -> MulMethod {
    let (bp, bq) = (p.bound(), q.bound());
    if bp <= 1 || bq <= 1 || (bp <= thresholds.karatsuba_digits && bq <= thresholds.karatsuba_digits)
    {
        MulMethod::Schoolbook
    } else if bp + bq < thresholds.ntt_product_digits {
        MulMethod::Karatsuba
    } else if predicted_result_bits(p.as_slice(), q.as_slice()) < NTT_CAPACITY_BITS {
        MulMethod::Ntt
    } else {
        MulMethod::Karatsuba
    }
}

/// `p * q` with the default [`Thresholds`].
#[must_use]
pub fn mul(p: &BigNat, q: &BigNat) -> BigNat {
    mul_with(&Thresholds::default(), p, q)
}

/// `p * q`, choosing schoolbook, Karatsuba or NTT by operand size.
///
/// Products beyond the NTT capacity stay on Karatsuba, so this never fails.
#[must_use]
pub fn mul_with(thresholds: &Thresholds, p: &BigNat, q: &BigNat) -> BigNat {
    let method = select_method(thresholds, p.as_limbs(), q.as_limbs());
    debug!(bp = p.bound(), bq = q.bound(), %method, "multiply");
    adaptive_limbs(thresholds, p.as_limbs(), q.as_limbs())
}

fn adaptive_limbs(thresholds: &Thresholds, p: Limbs<'_>, q: Limbs<'_>) -> BigNat {
    match select_method(thresholds, p, q) {
        MulMethod::Schoolbook => schoolbook_limbs(p.as_slice(), q.as_slice()),
        MulMethod::Karatsuba => {
            rec_mul_karatsuba(&|x, y| adaptive_limbs(thresholds, x, y), p, q)
        }
        MulMethod::Ntt => match bignat_ntt::multiply(p.as_slice(), q.as_slice()) {
            Ok(digits) => BigNat::from_limbs(digits),
            Err(err) => {
                trace!(%err, "ntt rejected operands, using karatsuba");
                rec_mul_karatsuba(&|x, y| adaptive_limbs(thresholds, x, y), p, q)
            }
        },
    }
}
