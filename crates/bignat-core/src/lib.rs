//! # bignat-core
//!
//! Arbitrary-precision natural numbers in base `2^24`.
//!
//! Addition, saturating subtraction, comparison, limb shifts and bitwise
//! operations; schoolbook, Karatsuba and NTT multiplication behind an
//! adaptive dispatcher; long division; decimal conversion; powers, gcd and
//! factorial.
//!
//! # Example
//! ```
//! use bignat_core::BigNat;
//!
//! let a: BigNat = "123456789012345678901234567890".parse().unwrap();
//! let b = BigNat::from(1_000_000_007u64);
//! let (q, r) = bignat_core::divmod(&(&a * &b), &b).unwrap();
//! assert_eq!(q, a);
//! assert!(r.is_zero());
//! ```

pub mod arith;
pub mod constants;
pub mod convert;
pub mod division;
pub mod error;
mod interop;
pub mod karatsuba;
pub mod multiply;
pub mod nat;
pub mod number_theory;
mod ops;
pub mod schoolbook;
pub mod strategy;
pub mod thresholds;
pub mod view;

pub use arith::{
    add, bit_and, bit_or, bit_xor, checked_sub, compare, equal, gt, gte, lt, lte, max, min, scale,
    shift_compare, shift_down, shift_up, sub,
};
pub use constants::exit_codes;
pub use convert::{of_decimal_string, to_decimal_string, to_f64, to_u32, to_u64};
pub use division::{div, divmod, rem};
pub use error::BigNatError;
pub use karatsuba::{mul_karatsuba, rec_mul_karatsuba};
pub use multiply::{mul, mul_ntt, mul_with, select_method, square_ntt, MulMethod};
pub use nat::BigNat;
pub use number_theory::{factorial, factorial_with, gcd, power, power_big, power_big_with, power_with};
pub use schoolbook::mul_schoolbook;
pub use strategy::{
    AdaptiveStrategy, KaratsubaStrategy, Multiplier, NttStrategy, SchoolbookStrategy,
    StrategyKind, UnknownStrategy,
};
pub use thresholds::Thresholds;
pub use view::Limbs;
