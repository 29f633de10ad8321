//! Error type for `BigNat` operations.

use bignat_ntt::NttError;

/// Recoverable failures of the arithmetic engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigNatError {
    /// A decimal string with no characters.
    #[error("empty decimal string")]
    Empty,

    /// A character outside `0..=9` in a decimal string.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        found: char,
        /// Character index in the input.
        position: usize,
    },

    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The value does not fit the requested native type.
    #[error("value does not fit in {target}")]
    Overflow {
        /// Name of the native type.
        target: &'static str,
    },

    /// The NTT multiplier rejected the operands.
    #[error(transparent)]
    Ntt(#[from] NttError),
}
