//! Bounded, read-only views over limb storage.

use bignat_ntt::limb::significant_len;

use crate::nat::BigNat;

/// A normalized window over another value's limbs.
///
/// Produced by [`BigNat::restrict_to`] and used by Karatsuba to split operands
/// without copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limbs<'a> {
    digits: &'a [u32],
}

impl<'a> Limbs<'a> {
    /// View over `digits`, trimmed of trailing zero limbs.
    #[must_use]
    pub fn new(digits: &'a [u32]) -> Self {
        Self {
            digits: &digits[..significant_len(digits)],
        }
    }

    pub(crate) fn from_normalized(digits: &'a [u32]) -> Self {
        debug_assert_eq!(significant_len(digits), digits.len());
        Self { digits }
    }

    /// The low `min(d, bound)` limbs.
    #[must_use]
    pub fn restrict_to(self, d: usize) -> Self {
        Self::new(&self.digits[..d.min(self.digits.len())])
    }

    /// The limbs from index `d` upward, i.e. the value divided by `base^d`.
    #[must_use]
    pub fn shift_down(self, d: usize) -> Self {
        Self {
            digits: self.digits.get(d..).unwrap_or(&[]),
        }
    }

    #[must_use]
    pub fn as_slice(self) -> &'a [u32] {
        self.digits
    }

    #[must_use]
    pub fn bound(self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.digits.is_empty()
    }

    /// Copy the viewed limbs into an owned value.
    #[must_use]
    pub fn to_bignat(self) -> BigNat {
        BigNat::from_limbs(self.digits.to_vec())
    }
}

impl<'a> From<&'a BigNat> for Limbs<'a> {
    fn from(n: &'a BigNat) -> Self {
        n.as_limbs()
    }
}
