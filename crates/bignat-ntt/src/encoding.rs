//! Encoding descriptors: how limb vectors are cut into polynomial
//! coefficients for a given product size.
//!
//! A descriptor with `L`-bit coefficients and transform length `K = 2^k`
//! satisfies `k + 2L = 30`, so every coefficient of the cyclic product
//! (a sum of at most `K` products of two `L`-bit values) stays below `2^30`
//! and survives reduction mod `P` exactly.

use crate::error::NttError;
use crate::field::{MAX_BITS_INSIDE_FP, TWO_ADICITY};
use crate::limb::BASE_BITS;

/// Number of descriptors in [`ENCODING_TABLE`].
pub const DESCRIPTOR_COUNT: usize = 13;

/// Parameters for one polynomial encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingDescriptor {
    /// Bits per coefficient (`L`).
    pub limb_split_bits: u32,
    /// `2^L`.
    pub two_to_limb_split_bits: u32,
    /// Transform length exponent (`k`).
    pub transform_length_exponent: u32,
    /// Transform length (`K = 2^k`).
    pub transform_length: usize,
    /// Result bit-width this descriptor can hold (`L * K`).
    pub max_result_bits: usize,
    /// Coefficients per limb when `L` divides 24, otherwise `24 / L` rounded down.
    pub values_per_limb: u32,
    /// `limb_weights[i] == 2^(L*i)` for `i < values_per_limb`; zero beyond.
    pub limb_weights: [u32; BASE_BITS as usize],
}

impl EncodingDescriptor {
    const fn build(limb_split_bits: u32) -> Self {
        let k = MAX_BITS_INSIDE_FP - 2 * limb_split_bits;
        let transform_length = 1usize << k;
        let values_per_limb = BASE_BITS / limb_split_bits;
        let mut limb_weights = [0u32; BASE_BITS as usize];
        let mut i = 0;
        while i < values_per_limb {
            limb_weights[i as usize] = 1u32 << (limb_split_bits * i);
            i += 1;
        }
        Self {
            limb_split_bits,
            two_to_limb_split_bits: 1u32 << limb_split_bits,
            transform_length_exponent: k,
            transform_length,
            max_result_bits: limb_split_bits as usize * transform_length,
            values_per_limb,
            limb_weights,
        }
    }

    /// Whether coefficients never straddle a limb boundary.
    #[must_use]
    pub const fn divides_limb(&self) -> bool {
        self.values_per_limb * self.limb_split_bits == BASE_BITS
    }

    /// Whether the field has a root of unity of the required order.
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        self.transform_length_exponent <= TWO_ADICITY
    }
}

/// Descriptors ordered by increasing capability (`L = 13` down to `L = 1`).
pub const ENCODING_TABLE: [EncodingDescriptor; DESCRIPTOR_COUNT] = {
    let mut table = [EncodingDescriptor::build(13); DESCRIPTOR_COUNT];
    let mut i = 0;
    while i < DESCRIPTOR_COUNT {
        #[allow(clippy::cast_possible_truncation)]
        let bits = 13 - i as u32;
        table[i] = EncodingDescriptor::build(bits);
        i += 1;
    }
    table
};

/// Largest result bit-width any usable descriptor supports.
pub const NTT_CAPACITY_BITS: usize = {
    let mut cap = 0;
    let mut i = 0;
    while i < DESCRIPTOR_COUNT {
        if ENCODING_TABLE[i].is_usable() && ENCODING_TABLE[i].max_result_bits > cap {
            cap = ENCODING_TABLE[i].max_result_bits;
        }
        i += 1;
    }
    cap
};

/// Pick the smallest descriptor able to hold a product of `bits` bits.
pub fn descriptor_for_result_bits(bits: usize) -> Result<&'static EncodingDescriptor, NttError> {
    ENCODING_TABLE
        .iter()
        .find(|d| d.is_usable() && d.max_result_bits > bits)
        .ok_or(NttError::CapacityExceeded {
            bits,
            capacity: NTT_CAPACITY_BITS,
        })
}
