//! Arithmetic in the prime field `F_p`, `p = 15 * 2^27 + 1`.
//!
//! The multiplicative group has order `15 * 2^27`, so the field holds a
//! primitive `2^n`-th root of unity for every `n <= 27`. Values are kept
//! reduced in `[0, p)` and products go through a 64-bit intermediate.

use crate::error::NttError;

/// The prime modulus, 2 013 265 921.
pub const P: u32 = 2_013_265_921;

/// `P` widened for intermediate products.
pub const P64: u64 = P as u64;

/// Largest `n` such that `2^n` divides `P - 1`.
pub const TWO_ADICITY: u32 = 27;

/// Odd part of `P - 1`.
pub const ODD_FACTOR: u32 = 15;

/// A generator of the multiplicative group.
pub const GENERATOR: u32 = 31;

/// Primitive `2^27`-th root of unity, `GENERATOR^ODD_FACTOR mod P`.
pub const ROOT_OF_UNITY: u32 = 440_564_289;

/// Bits a convolution coefficient may occupy before reduction can lose
/// information (`2^30 < P`).
pub const MAX_BITS_INSIDE_FP: u32 = 30;

/// Multiply two reduced values mod `P`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mod_mul(a: u32, b: u32) -> u32 {
    ((u64::from(a) * u64::from(b)) % P64) as u32
}

/// Add two reduced values mod `P`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mod_add(a: u32, b: u32) -> u32 {
    ((u64::from(a) + u64::from(b)) % P64) as u32
}

/// Subtract two reduced values mod `P`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mod_sub(a: u32, b: u32) -> u32 {
    ((u64::from(a) + P64 - u64::from(b)) % P64) as u32
}

/// `base^exponent mod P` for a 32-bit exponent.
#[must_use]
pub fn mod_pow(base: u32, exponent: u32) -> u32 {
    mod_pow_wide(base, u64::from(exponent))
}

/// `base^exponent mod P` for a 64-bit exponent, by square-and-multiply.
#[must_use]
pub fn mod_pow_wide(base: u32, mut exponent: u64) -> u32 {
    let mut acc = 1u32;
    let mut x = base % P;
    while exponent > 0 {
        if exponent & 1 == 1 {
            acc = mod_mul(acc, x);
        }
        x = mod_mul(x, x);
        exponent >>= 1;
    }
    acc
}

/// Multiplicative inverse by Fermat's little theorem. `mod_inverse(0)` is 0.
#[must_use]
pub fn mod_inverse(x: u32) -> u32 {
    mod_pow_wide(x, P64 - 2)
}

/// A primitive `2^n`-th root of unity.
pub fn principal_root_of_order(n: u32) -> Result<u32, NttError> {
    if n > TWO_ADICITY {
        return Err(NttError::OrderTooLarge(n));
    }
    Ok(mod_pow(ROOT_OF_UNITY, 1u32 << (TWO_ADICITY - n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulus_shape() {
        assert_eq!(u64::from(ODD_FACTOR) << TWO_ADICITY, P64 - 1);
        assert_eq!(mod_pow(GENERATOR, ODD_FACTOR), ROOT_OF_UNITY);
    }

    #[test]
    fn add_sub_wrap() {
        assert_eq!(mod_add(P - 1, 2), 1);
        assert_eq!(mod_sub(1, 2), P - 1);
        assert_eq!(mod_sub(5, 5), 0);
    }

    #[test]
    fn mul_reduces() {
        assert_eq!(mod_mul(P - 1, P - 1), 1);
        assert_eq!(mod_mul(123_456, 0), 0);
    }

    #[test]
    fn pow_small_cases() {
        assert_eq!(mod_pow(7, 0), 1);
        assert_eq!(mod_pow(0, 0), 1);
        assert_eq!(mod_pow(2, 10), 1024);
        assert_eq!(mod_pow(3, 5), 243);
    }

    #[test]
    fn pow_entry_points_agree() {
        for e in [1u32, 2, 17, 1_000_003, u32::MAX] {
            assert_eq!(mod_pow(12_345, e), mod_pow_wide(12_345, u64::from(e)));
        }
    }

    #[test]
    fn fermat_little_theorem() {
        assert_eq!(mod_pow_wide(GENERATOR, P64 - 1), 1);
    }

    #[test]
    fn inverse_roundtrip() {
        for x in [1u32, 2, 31, 65_536, P - 1] {
            assert_eq!(mod_mul(x, mod_inverse(x)), 1, "inverse of {x}");
        }
        assert_eq!(mod_inverse(0), 0);
    }

    #[test]
    fn root_orders_are_exact() {
        for n in 1..=TWO_ADICITY {
            let w = principal_root_of_order(n).unwrap();
            assert_eq!(mod_pow_wide(w, 1u64 << n), 1, "w^(2^{n}) != 1");
            assert_eq!(mod_pow_wide(w, 1u64 << (n - 1)), P - 1, "order of w below 2^{n}");
        }
        assert_eq!(principal_root_of_order(0).unwrap(), 1);
    }

    #[test]
    fn root_beyond_two_adicity() {
        assert_eq!(
            principal_root_of_order(28),
            Err(NttError::OrderTooLarge(28))
        );
    }
}
