//! Multiplication strategy trait and implementations.
//!
//! `Multiplier` is the narrow interface the number-theoretic routines and
//! the CLI use. Each algorithm is available on its own, plus the adaptive
//! dispatcher that switches by operand size.

use std::fmt;
use std::str::FromStr;

use crate::error::BigNatError;
use crate::karatsuba::mul_karatsuba;
use crate::multiply::{mul_ntt, mul_with, square_ntt};
use crate::nat::BigNat;
use crate::schoolbook::mul_schoolbook;
use crate::thresholds::Thresholds;

/// Narrow interface for multiplication operations.
pub trait Multiplier: Send + Sync {
    /// Multiply two natural numbers.
    fn multiply(&self, a: &BigNat, b: &BigNat) -> Result<BigNat, BigNatError>;

    /// Square a natural number (may be optimized over multiply).
    fn square(&self, a: &BigNat) -> Result<BigNat, BigNatError> {
        self.multiply(a, a)
    }

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// Quadratic schoolbook multiplication at every size.
pub struct SchoolbookStrategy;

impl SchoolbookStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SchoolbookStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for SchoolbookStrategy {
    fn multiply(&self, a: &BigNat, b: &BigNat) -> Result<BigNat, BigNatError> {
        Ok(mul_schoolbook(a, b))
    }

    fn name(&self) -> &'static str {
        "schoolbook"
    }
}

/// Karatsuba recursion down to schoolbook leaves.
pub struct KaratsubaStrategy;

impl KaratsubaStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for KaratsubaStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for KaratsubaStrategy {
    fn multiply(&self, a: &BigNat, b: &BigNat) -> Result<BigNat, BigNatError> {
        Ok(mul_karatsuba(a, b))
    }

    fn name(&self) -> &'static str {
        "karatsuba"
    }
}

/// NTT-only multiplication; products past the transform capacity fail.
pub struct NttStrategy;

impl NttStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NttStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for NttStrategy {
    fn multiply(&self, a: &BigNat, b: &BigNat) -> Result<BigNat, BigNatError> {
        mul_ntt(a, b)
    }

    fn square(&self, a: &BigNat) -> Result<BigNat, BigNatError> {
        square_ntt(a)
    }

    fn name(&self) -> &'static str {
        "ntt"
    }
}

/// Size-based selection between the three algorithms.
pub struct AdaptiveStrategy {
    thresholds: Thresholds,
}

impl AdaptiveStrategy {
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }
}

impl Default for AdaptiveStrategy {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

impl Multiplier for AdaptiveStrategy {
    fn multiply(&self, a: &BigNat, b: &BigNat) -> Result<BigNat, BigNatError> {
        Ok(mul_with(&self.thresholds, a, b))
    }

    fn name(&self) -> &'static str {
        "adaptive"
    }
}

/// Named multiplication algorithms, as selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Schoolbook,
    Karatsuba,
    Ntt,
    Adaptive,
}

impl StrategyKind {
    /// Every strategy, in comparison order.
    pub const ALL: [Self; 4] = [Self::Schoolbook, Self::Karatsuba, Self::Ntt, Self::Adaptive];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Schoolbook => "schoolbook",
            Self::Karatsuba => "karatsuba",
            Self::Ntt => "ntt",
            Self::Adaptive => "adaptive",
        }
    }

    /// Instantiate the strategy; only the adaptive one reads `thresholds`.
    #[must_use]
    pub fn build(self, thresholds: Thresholds) -> Box<dyn Multiplier> {
        match self {
            Self::Schoolbook => Box::new(SchoolbookStrategy::new()),
            Self::Karatsuba => Box::new(KaratsubaStrategy::new()),
            Self::Ntt => Box::new(NttStrategy::new()),
            Self::Adaptive => Box::new(AdaptiveStrategy::new(thresholds)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
