//! Error type for the NTT engine.

/// Errors raised by the finite-field transform and the multiplication pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NttError {
    /// The predicted product is wider than every usable encoding descriptor.
    #[error("product of {bits} bits exceeds the NTT capacity of {capacity} bits")]
    CapacityExceeded {
        /// Predicted result bit-width.
        bits: usize,
        /// Largest result bit-width the descriptor table supports.
        capacity: usize,
    },

    /// Transform length is zero or not a power of two.
    #[error("transform length {0} is not a power of two")]
    InvalidLength(usize),

    /// The field has no root of unity of the requested 2-power order.
    #[error("no root of unity of order 2^{0} in the field")]
    OrderTooLarge(u32),

    /// Fewer input values than the transform length.
    #[error("transform expects {expected} values, found {found}")]
    InputTooShort {
        /// Required number of values.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
}
