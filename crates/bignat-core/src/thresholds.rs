//! Dispatch thresholds for the adaptive multiplier (serializable).

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_DIGITS_KARATSUBA, PRODUCT_DIGITS_UPPER_SCHOOLBOOK};

/// Limb counts at which the adaptive multiplier changes algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Operands both at or below this many limbs use schoolbook.
    pub karatsuba_digits: usize,
    /// Combined operand limbs at or above which the NTT is tried.
    pub ntt_product_digits: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            karatsuba_digits: MIN_DIGITS_KARATSUBA,
            ntt_product_digits: PRODUCT_DIGITS_UPPER_SCHOOLBOOK,
        }
    }
}

impl Thresholds {
    /// Replace zero thresholds with the defaults.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.karatsuba_digits == 0 {
            self.karatsuba_digits = MIN_DIGITS_KARATSUBA;
        }
        if self.ntt_product_digits == 0 {
            self.ntt_product_digits = PRODUCT_DIGITS_UPPER_SCHOOLBOOK;
        }
        self
    }

    /// The NTT threshold must leave room for Karatsuba.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.karatsuba_digits > 0 && self.ntt_product_digits > 2 * self.karatsuba_digits
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(text).map(Self::normalize)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
