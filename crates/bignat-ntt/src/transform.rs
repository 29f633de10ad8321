//! Number-theoretic transform over `F_p`.
//!
//! Recursive radix-2 Cooley-Tukey. Instead of a bit-reversal pass, each level
//! reads the input through a (stride, offset) pair: the even half of a
//! sub-problem is the input at `offset, offset + 2*stride, ...` and the odd
//! half starts at `offset + stride`.

use crate::error::NttError;
use crate::field::{
    mod_add, mod_inverse, mod_mul, mod_sub, principal_root_of_order, P, TWO_ADICITY,
};

/// Forward transform of the first `length` entries of `values` with the
/// given root of unity.
///
/// `length` must be a power of two no larger than `2^27` and `root` should
/// have order exactly `length` for the result to be a DFT.
pub fn transform(length: usize, root: u32, values: &[u32]) -> Result<Vec<u32>, NttError> {
    check_length(length, values.len())?;
    let mut out = vec![0u32; length];
    recurse(values, 0, 1, root, &mut out);
    Ok(out)
}

/// Inverse of [`transform`]: transform with `root^-1`, then scale by `length^-1`.
#[allow(clippy::cast_possible_truncation)]
pub fn inverse_transform(length: usize, root: u32, values: &[u32]) -> Result<Vec<u32>, NttError> {
    check_length(length, values.len())?;
    let mut out = vec![0u32; length];
    recurse(values, 0, 1, mod_inverse(root), &mut out);
    // length <= 2^27 < P, so the cast is exact
    let scale = mod_inverse(length as u32);
    for x in &mut out {
        *x = mod_mul(*x, scale);
    }
    Ok(out)
}

/// Cyclic convolution of `u` and `v` of length `2^order_exponent`.
pub fn convolve(
    length: usize,
    order_exponent: u32,
    u: &[u32],
    v: &[u32],
) -> Result<Vec<u32>, NttError> {
    let root = principal_root_of_order(order_exponent)?;
    if length != 1usize << order_exponent {
        return Err(NttError::InvalidLength(length));
    }
    let fu = transform(length, root, u)?;
    let fv = transform(length, root, v)?;
    let pointwise: Vec<u32> = fu.iter().zip(&fv).map(|(&a, &b)| mod_mul(a, b)).collect();
    inverse_transform(length, root, &pointwise)
}

fn check_length(length: usize, available: usize) -> Result<(), NttError> {
    if length == 0 || !length.is_power_of_two() || length.trailing_zeros() > TWO_ADICITY {
        return Err(NttError::InvalidLength(length));
    }
    if available < length {
        return Err(NttError::InputTooShort {
            expected: length,
            found: available,
        });
    }
    Ok(())
}

/// Transform the `out.len()` inputs `input[offset + i*stride]` into `out`.
fn recurse(input: &[u32], offset: usize, stride: usize, root: u32, out: &mut [u32]) {
    let n = out.len();
    if n == 1 {
        out[0] = input[offset] % P;
        return;
    }
    let half = n / 2;
    let root_sq = mod_mul(root, root);
    {
        let (even, odd) = out.split_at_mut(half);
        recurse(input, offset, stride * 2, root_sq, even);
        recurse(input, offset + stride, stride * 2, root_sq, odd);
    }

    let mut wj = 1u32;
    for j in 0..half {
        let even = out[j];
        let t = mod_mul(wj, out[j + half]);
        out[j] = mod_add(even, t);
        out[j + half] = mod_sub(even, t);
        wj = mod_mul(wj, root);
    }
}
