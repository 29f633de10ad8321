//! Limb-slice multiplication through the NTT pipeline.
//!
//! Pick a descriptor from the predicted product width, encode both operands,
//! convolve, decode.

use tracing::debug;

use crate::encoding::descriptor_for_result_bits;
use crate::error::NttError;
use crate::field::{mod_mul, principal_root_of_order};
use crate::limb::bit_length;
use crate::poly::{decode_from_polynomial, encode_as_polynomial};
use crate::transform::{convolve, inverse_transform, transform};

/// Bit-width bound of `u * v`: the sum of the operand widths.
#[must_use]
pub fn predicted_result_bits(u: &[u32], v: &[u32]) -> usize {
    bit_length(u) + bit_length(v)
}

/// Multiply two normalized limb slices (base 2^24, least significant first).
///
/// Returns a normalized limb vector; the empty vector is zero.
///
/// # Errors
///
/// [`NttError::CapacityExceeded`] when the product is wider than the
/// largest usable descriptor.
pub fn multiply(u: &[u32], v: &[u32]) -> Result<Vec<u32>, NttError> {
    if u.is_empty() || v.is_empty() {
        return Ok(Vec::new());
    }
    let bits = predicted_result_bits(u, v);
    let desc = descriptor_for_result_bits(bits)?;
    debug!(
        bits,
        limb_split_bits = desc.limb_split_bits,
        transform_length = desc.transform_length,
        "ntt multiply"
    );

    let pu = encode_as_polynomial(desc, u);
    let pv = encode_as_polynomial(desc, v);
    let product = convolve(
        desc.transform_length,
        desc.transform_length_exponent,
        &pu,
        &pv,
    )?;
    Ok(decode_from_polynomial(desc, &product))
}

/// Square a normalized limb slice, transforming the operand once.
pub fn square(u: &[u32]) -> Result<Vec<u32>, NttError> {
    if u.is_empty() {
        return Ok(Vec::new());
    }
    let desc = descriptor_for_result_bits(2 * bit_length(u))?;
    let pu = encode_as_polynomial(desc, u);
    let root = principal_root_of_order(desc.transform_length_exponent)?;
    let mut fu = transform(desc.transform_length, root, &pu)?;
    for x in &mut fu {
        *x = mod_mul(*x, *x);
    }
    let product = inverse_transform(desc.transform_length, root, &fu)?;
    Ok(decode_from_polynomial(desc, &product))
}
