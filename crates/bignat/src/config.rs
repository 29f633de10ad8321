//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use bignat_core::{StrategyKind, Thresholds};

use crate::errors::CliError;

/// Operation to perform on the operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Divmod,
    Pow,
    Gcd,
    Factorial,
    And,
    Or,
    Xor,
    Cmp,
    Bits,
}

impl Operation {
    /// Whether the result depends on the selected multiplier.
    #[must_use]
    pub fn uses_multiplier(self) -> bool {
        matches!(self, Self::Mul | Self::Pow | Self::Factorial)
    }

    /// Whether the operation reads a second operand.
    #[must_use]
    pub fn is_binary(self) -> bool {
        !matches!(self, Self::Factorial | Self::Bits)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Rem => "rem",
            Self::Divmod => "divmod",
            Self::Pow => "pow",
            Self::Gcd => "gcd",
            Self::Factorial => "factorial",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Cmp => "cmp",
            Self::Bits => "bits",
        }
    }
}

/// bignat: arbitrary-precision natural number calculator.
#[derive(Parser, Debug)]
#[command(name = "bignat", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Operation to perform.
    #[arg(value_enum, required_unless_present = "completion")]
    pub op: Option<Operation>,

    /// First operand (decimal).
    #[arg(required_unless_present = "completion")]
    pub a: Option<String>,

    /// Second operand (decimal), for binary operations.
    pub b: Option<String>,

    /// Multiplication strategy: schoolbook, karatsuba, ntt, adaptive, or all.
    #[arg(short, long, default_value = "adaptive", env = "BIGNAT_STRATEGY")]
    pub strategy: String,

    /// Verbose output (never abbreviate results).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output the result).
    #[arg(short, long)]
    pub quiet: bool,

    /// JSON file with adaptive dispatch thresholds.
    #[arg(long)]
    pub thresholds: Option<PathBuf>,

    /// Limb count at or below which both operands use schoolbook (0 = default).
    #[arg(long, default_value = "0", env = "BIGNAT_KARATSUBA_THRESHOLD")]
    pub karatsuba_threshold: usize,

    /// Combined limb count from which the NTT is used (0 = default).
    #[arg(long, default_value = "0", env = "BIGNAT_NTT_THRESHOLD")]
    pub ntt_threshold: usize,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Strategies to run, in comparison order.
    pub fn strategies(&self) -> Result<Vec<StrategyKind>, CliError> {
        if self.strategy.eq_ignore_ascii_case("all") {
            return Ok(StrategyKind::ALL.to_vec());
        }
        let kind = self
            .strategy
            .parse::<StrategyKind>()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(vec![kind])
    }

    /// Dispatch thresholds: the JSON file if given, then flag overrides.
    pub fn resolve_thresholds(&self) -> Result<Thresholds, CliError> {
        let mut thresholds = match &self.thresholds {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    CliError::Config(format!("cannot read {}: {e}", path.display()))
                })?;
                Thresholds::from_json(&text).map_err(|e| {
                    CliError::Config(format!("invalid thresholds in {}: {e}", path.display()))
                })?
            }
            None => Thresholds::default(),
        };
        if self.karatsuba_threshold > 0 {
            thresholds.karatsuba_digits = self.karatsuba_threshold;
        }
        if self.ntt_threshold > 0 {
            thresholds.ntt_product_digits = self.ntt_threshold;
        }
        let thresholds = thresholds.normalize();
        if !thresholds.is_valid() {
            return Err(CliError::Config(format!(
                "ntt threshold ({}) must exceed twice the karatsuba threshold ({})",
                thresholds.ntt_product_digits, thresholds.karatsuba_digits
            )));
        }
        Ok(thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("bignat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parse_operation_and_operands() {
        let cfg = config(&["mul", "12", "34", "-s", "ntt"]);
        assert_eq!(cfg.op, Some(Operation::Mul));
        assert_eq!(cfg.a.as_deref(), Some("12"));
        assert_eq!(cfg.b.as_deref(), Some("34"));
        assert_eq!(cfg.strategies().unwrap(), vec![StrategyKind::Ntt]);
    }

    #[test]
    fn all_strategies() {
        let cfg = config(&["mul", "1", "2", "--strategy", "all"]);
        assert_eq!(cfg.strategies().unwrap().len(), 4);
    }

    #[test]
    fn unknown_strategy_is_config_error() {
        let cfg = config(&["mul", "1", "2", "--strategy", "fft"]);
        assert!(matches!(cfg.strategies(), Err(CliError::Config(_))));
    }

    #[test]
    fn threshold_overrides() {
        let cfg = config(&["mul", "1", "2", "--karatsuba-threshold", "8"]);
        let t = cfg.resolve_thresholds().unwrap();
        assert_eq!(t.karatsuba_digits, 8);
        assert_eq!(t.ntt_product_digits, Thresholds::default().ntt_product_digits);
    }

    #[test]
    fn inconsistent_thresholds_rejected() {
        let cfg = config(&[
            "mul",
            "1",
            "2",
            "--karatsuba-threshold",
            "100",
            "--ntt-threshold",
            "150",
        ]);
        assert!(matches!(cfg.resolve_thresholds(), Err(CliError::Config(_))));
    }

    #[test]
    fn operation_traits() {
        assert!(Operation::Pow.uses_multiplier());
        assert!(!Operation::Add.uses_multiplier());
        assert!(!Operation::Bits.is_binary());
        assert!(Operation::Cmp.is_binary());
        assert_eq!(Operation::Divmod.name(), "divmod");
    }

    #[test]
    fn completion_needs_no_operands() {
        let cfg = config(&["--completion", "bash"]);
        assert!(cfg.op.is_none());
        assert!(cfg.completion.is_some());
    }
}
