//! Memory estimation for NTT multiplication.

use crate::encoding::descriptor_for_result_bits;
use crate::error::NttError;
use crate::limb::BASE_BITS;

/// Estimate the peak bytes the pipeline allocates for a product of
/// `result_bits` bits.
///
/// Counts the two encoded operands, their two transforms, the pointwise
/// product, the inverse transform and the decoded limb buffer.
pub fn estimate_ntt_memory(result_bits: usize) -> Result<usize, NttError> {
    let desc = descriptor_for_result_bits(result_bits)?;
    let word = std::mem::size_of::<u32>();
    let poly_bytes = desc.transform_length * word * 6;
    let limb_bytes = (result_bits / BASE_BITS as usize + 2) * word;
    Ok(poly_bytes + limb_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::NTT_CAPACITY_BITS;

    #[test]
    fn estimate_small() {
        // L = 13, K = 16
        assert_eq!(estimate_ntt_memory(100).unwrap(), 16 * 4 * 6 + 6 * 4);
    }

    #[test]
    fn estimate_grows_with_size() {
        let small = estimate_ntt_memory(1_000).unwrap();
        let large = estimate_ntt_memory(1_000_000).unwrap();
        assert!(large > small);
    }

    #[test]
    fn estimate_beyond_capacity() {
        assert!(estimate_ntt_memory(NTT_CAPACITY_BITS).is_err());
    }
}
