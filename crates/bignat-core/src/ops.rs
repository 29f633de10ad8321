//! Operator overloads for `BigNat`.
//!
//! `-` saturates at zero, `*` uses the adaptive multiplier with default
//! thresholds, and `/` and `%` panic on a zero divisor like the primitive
//! integer types. The fallible forms live in [`crate::arith`] and
//! [`crate::division`].

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Rem, Shl, Shr, Sub};

use crate::arith::{add, bit_and, bit_or, bit_xor, shift_down, shift_up, sub};
use crate::division::divmod_nonzero;
use crate::multiply::mul;
use crate::nat::BigNat;

fn quotient(a: &BigNat, b: &BigNat) -> BigNat {
    divmod_nonzero(a, b).0
}

fn remainder(a: &BigNat, b: &BigNat) -> BigNat {
    divmod_nonzero(a, b).1
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $func:path) => {
        impl $trait<&BigNat> for &BigNat {
            type Output = BigNat;

            fn $method(self, rhs: &BigNat) -> BigNat {
                $func(self, rhs)
            }
        }

        impl $trait<BigNat> for BigNat {
            type Output = BigNat;

            fn $method(self, rhs: BigNat) -> BigNat {
                $func(&self, &rhs)
            }
        }

        impl $trait<&BigNat> for BigNat {
            type Output = BigNat;

            fn $method(self, rhs: &BigNat) -> BigNat {
                $func(&self, rhs)
            }
        }

        impl $trait<BigNat> for &BigNat {
            type Output = BigNat;

            fn $method(self, rhs: BigNat) -> BigNat {
                $func(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);
forward_binop!(Mul, mul, mul);
forward_binop!(Div, div, quotient);
forward_binop!(Rem, rem, remainder);
forward_binop!(BitAnd, bitand, bit_and);
forward_binop!(BitOr, bitor, bit_or);
forward_binop!(BitXor, bitxor, bit_xor);

/// Shift by whole limbs (`x * base^d`).
impl Shl<usize> for &BigNat {
    type Output = BigNat;

    fn shl(self, d: usize) -> BigNat {
        shift_up(d, self)
    }
}

/// Shift by whole limbs (`x / base^d`).
impl Shr<usize> for &BigNat {
    type Output = BigNat;

    fn shr(self, d: usize) -> BigNat {
        shift_down(d, self)
    }
}
