//! Conversion between limb vectors and NTT coefficient vectors.

use crate::encoding::EncodingDescriptor;
use crate::field::MAX_BITS_INSIDE_FP;
use crate::limb::{contribute, significant_len, BASE_BITS, BIT_MASKS, TWO_POWERS};

/// Cut `limbs` into `transform_length` coefficients of `limb_split_bits` bits,
/// least significant first, zero padded.
///
/// Bits beyond `limb_split_bits * transform_length` are dropped; callers pick
/// a descriptor wide enough for the whole product.
#[must_use]
pub fn encode_as_polynomial(desc: &EncodingDescriptor, limbs: &[u32]) -> Vec<u32> {
    let len = desc.transform_length;
    let mut coeffs = vec![0u32; len];
    let total_bits = limbs.len() * BASE_BITS as usize;
    let l = desc.limb_split_bits as usize;

    if desc.divides_limb() {
        let split = desc.values_per_limb as usize;
        let mask = desc.two_to_limb_split_bits - 1;
        for (i, c) in coeffs.iter_mut().enumerate().take(total_bits.div_ceil(l)) {
            *c = (limbs[i / split] / desc.limb_weights[i % split]) & mask;
        }
        return coeffs;
    }

    let mask = BIT_MASKS[l];
    for (i, c) in coeffs.iter_mut().enumerate() {
        let pos = i * l;
        if pos >= total_bits {
            break;
        }
        *c = extract_bits(limbs, pos, l) & mask;
    }
    coeffs
}

/// Read up to 24 bits starting at bit `pos`, crossing into the next limb
/// when needed.
fn extract_bits(limbs: &[u32], pos: usize, width: usize) -> u32 {
    let base = BASE_BITS as usize;
    let j = pos / base;
    let d = pos % base;
    let lo = limbs[j] >> d;
    if d + width <= base {
        return lo;
    }
    let hi = limbs.get(j + 1).copied().unwrap_or(0);
    lo | (hi << (base - d))
}

/// Evaluate the coefficient vector at `x = 2^limb_split_bits` into a
/// normalized limb vector.
///
/// Coefficients are the reduced outputs of a convolution, each below `2^30`.
#[must_use]
pub fn decode_from_polynomial(desc: &EncodingDescriptor, coeffs: &[u32]) -> Vec<u32> {
    let Some(top) = coeffs.iter().rposition(|&c| c != 0) else {
        return Vec::new();
    };
    let base = BASE_BITS as usize;
    let l = desc.limb_split_bits as usize;
    let result_bits = MAX_BITS_INSIDE_FP as usize + l * top + 2;
    let mut digits = vec![0u32; result_bits / base + 1];

    for (i, &c) in coeffs[..=top].iter().enumerate() {
        if c == 0 {
            continue;
        }
        let pos = i * l;
        contribute(&mut digits, pos / base, u64::from(c) * TWO_POWERS[pos % base]);
    }

    digits.truncate(significant_len(&digits));
    digits
}
