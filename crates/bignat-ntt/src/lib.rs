//! # bignat-ntt
//!
//! Number-theoretic transform multiplication of base-2^24 limb vectors over
//! the prime field `p = 2013265921 = 15 * 2^27 + 1`.

pub mod encoding;
pub mod error;
pub mod field;
pub mod limb;
pub mod memory_est;
pub mod multiply;
pub mod poly;
pub mod transform;

// Re-exports
pub use encoding::{descriptor_for_result_bits, EncodingDescriptor, ENCODING_TABLE, NTT_CAPACITY_BITS};
pub use error::NttError;
pub use memory_est::estimate_ntt_memory;
pub use multiply::{multiply, predicted_result_bits, square};
