//! Base-2^24 limb constants and carry helpers shared by the NTT pipeline
//! and the `BigNat` arithmetic.

/// Number of bits in one limb.
pub const BASE_BITS: u32 = 24;

/// The limb base, 2^24.
pub const BASE: u32 = 1 << BASE_BITS;

/// Mask selecting the low 24 bits of a word.
pub const BASE_MASK: u32 = BASE - 1;

/// `BASE` widened to 64 bits for accumulator arithmetic.
pub const BASE_U64: u64 = BASE as u64;

/// Low-bit masks: `BIT_MASKS[i] == 2^i - 1` for `i` in `0..=24`.
pub const BIT_MASKS: [u32; 25] = {
    let mut table = [0u32; 25];
    let mut i = 0;
    while i < 25 {
        table[i] = (1u32 << i) - 1;
        i += 1;
    }
    table
};

/// Powers of two below the base: `TWO_POWERS[i] == 2^i` for `i` in `0..24`.
pub const TWO_POWERS: [u64; 24] = {
    let mut table = [0u64; 24];
    let mut i = 0;
    while i < 24 {
        table[i] = 1u64 << i;
        i += 1;
    }
    table
};

/// Split a 64-bit accumulator into (low limb, carry).
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn split_limb(acc: u64) -> (u32, u64) {
    ((acc & u64::from(BASE_MASK)) as u32, acc >> BASE_BITS)
}

/// Add `carry` into `digits` starting at index `i`, propagating upward.
///
/// The caller guarantees the buffer is long enough to absorb the carry.
pub fn contribute(digits: &mut [u32], mut i: usize, mut carry: u64) {
    while carry > 0 {
        let (lo, hi) = split_limb(u64::from(digits[i]) + carry);
        digits[i] = lo;
        carry = hi;
        i += 1;
    }
}

/// Number of significant bits in a single limb.
#[inline]
#[must_use]
pub fn word_bits(word: u32) -> usize {
    (u32::BITS - word.leading_zeros()) as usize
}

/// Number of significant bits in a normalized limb slice.
#[must_use]
pub fn bit_length(limbs: &[u32]) -> usize {
    match limbs.last() {
        None => 0,
        Some(&top) => (limbs.len() - 1) * BASE_BITS as usize + word_bits(top),
    }
}

/// Length of `limbs` once trailing zero limbs are dropped.
#[must_use]
pub fn significant_len(limbs: &[u32]) -> usize {
    limbs.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
}
