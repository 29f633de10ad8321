//! Compile-time tuning constants for the arithmetic engine.

use bignat_ntt::limb::BASE_BITS;
use bignat_ntt::NTT_CAPACITY_BITS;

/// Karatsuba falls back to schoolbook when the larger operand has at most
/// this many limbs.
pub const MIN_DIGITS_KARATSUBA: usize = 16;

/// Combined operand limbs below which the adaptive dispatcher prefers
/// Karatsuba over the NTT (64 000 bits).
pub const PRODUCT_DIGITS_UPPER_SCHOOLBOOK: usize = 64_000 / BASE_BITS as usize;

/// Product limbs the NTT descriptor table can hold.
pub const PRODUCT_DIGITS_UPPER_NTT: usize = NTT_CAPACITY_BITS / BASE_BITS as usize;

/// Decimal digits per leaf when converting to a string; `10^8` fits a limb pair.
pub const DECIMAL_CHUNK_DIGITS: usize = 8;

/// `10^DECIMAL_CHUNK_DIGITS`.
pub const DECIMAL_CHUNK: u32 = 100_000_000;

/// Process exit codes shared by the command-line driver.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed operand or arithmetic domain error.
    pub const ERROR_INPUT: i32 = 2;
    /// Strategy results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
