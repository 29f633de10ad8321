//! The `BigNat` value type: a natural number stored as base-2^24 limbs.

use std::hash::{Hash, Hasher};

use bignat_ntt::limb::{bit_length, significant_len, BASE_BITS, BASE_MASK};

use crate::view::Limbs;

/// Arbitrary-precision natural number.
///
/// Limbs are least significant first, each below `2^24`. A normalized value
/// has no trailing zero limbs, so zero is the empty vector and `bound()` is
/// the number of significant limbs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigNat {
    digits: Vec<u32>,
}

impl BigNat {
    /// `length` zero limbs, not yet normalized.
    pub(crate) fn create_zeroed(length: usize) -> Self {
        Self {
            digits: vec![0; length],
        }
    }

    /// Wrap a limb vector, normalizing it.
    ///
    /// # Panics
    ///
    /// Panics if a limb is `2^24` or larger.
    #[must_use]
    pub fn from_limbs(digits: Vec<u32>) -> Self {
        assert!(
            digits.iter().all(|&d| d <= BASE_MASK),
            "limb out of range for base 2^{BASE_BITS}"
        );
        let mut n = Self { digits };
        n.normalize();
        n
    }

    /// Drop trailing zero limbs.
    pub(crate) fn normalize(&mut self) {
        let len = significant_len(&self.digits);
        self.digits.truncate(len);
    }

    pub(crate) fn digits_mut(&mut self) -> &mut Vec<u32> {
        &mut self.digits
    }

    /// Zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self { digits: Vec::new() }
    }

    /// One.
    #[must_use]
    pub fn one() -> Self {
        Self { digits: vec![1] }
    }

    /// Two.
    #[must_use]
    pub fn two() -> Self {
        Self { digits: vec![2] }
    }

    /// Import a signed value, clamping negatives to zero.
    #[must_use]
    pub fn from_i32(n: i32) -> Self {
        u32::try_from(n).map_or_else(|_| Self::zero(), Self::from)
    }

    /// Import a signed value, clamping negatives to zero.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        u64::try_from(n).map_or_else(|_| Self::zero(), Self::from)
    }

    /// Number of significant limbs.
    #[must_use]
    pub fn bound(&self) -> usize {
        self.digits.len()
    }

    /// Index of the most significant limb; `None` for zero.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.digits.len().checked_sub(1)
    }

    /// The normalized limbs, least significant first.
    #[must_use]
    pub fn limbs(&self) -> &[u32] {
        &self.digits
    }

    /// Borrow the whole value as a view.
    #[must_use]
    pub fn as_limbs(&self) -> Limbs<'_> {
        Limbs::from_normalized(&self.digits)
    }

    /// View of the low `min(d, bound)` limbs, trimmed of trailing zeros.
    #[must_use]
    pub fn restrict_to(&self, d: usize) -> Limbs<'_> {
        self.as_limbs().restrict_to(d)
    }

    /// Limb `i`, or zero past the bound.
    #[must_use]
    pub fn coeff(&self, i: usize) -> u32 {
        self.digits.get(i).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.digits == [1]
    }

    /// At most one significant limb.
    #[must_use]
    pub fn is_small(&self) -> bool {
        self.digits.len() <= 1
    }

    /// Limb 0, or 0 for zero.
    #[must_use]
    pub fn small_value(&self) -> u32 {
        self.coeff(0)
    }

    /// Bit length; zero has 0 bits.
    #[must_use]
    pub fn bits(&self) -> usize {
        bit_length(&self.digits)
    }

    /// Rolling limb hash `h = d[i] + (h << 3)` over the limbs, least
    /// significant first.
    #[must_use]
    pub fn hash_value(&self) -> u32 {
        self.digits
            .iter()
            .fold(0u32, |h, &d| d.wrapping_add(h.wrapping_shl(3)))
    }
}

impl From<u32> for BigNat {
    fn from(n: u32) -> Self {
        let mut v = Self::create_zeroed(2);
        v.digits[0] = n & BASE_MASK;
        v.digits[1] = n >> BASE_BITS;
        v.normalize();
        v
    }
}

impl From<u64> for BigNat {
    #[allow(clippy::cast_possible_truncation)]
    fn from(n: u64) -> Self {
        let mask = u64::from(BASE_MASK);
        let mut v = Self::create_zeroed(3);
        v.digits[0] = (n & mask) as u32;
        v.digits[1] = ((n >> BASE_BITS) & mask) as u32;
        v.digits[2] = (n >> (2 * BASE_BITS)) as u32;
        v.normalize();
        v
    }
}

impl Hash for BigNat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_value());
    }
}
