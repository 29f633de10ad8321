//! Operation execution across strategies and result analysis.

use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use bignat_core::{
    add, bit_and, bit_or, bit_xor, compare, div, divmod, factorial_with, gcd, power_big_with, rem,
    sub, to_u64, BigNat, Multiplier, StrategyKind, Thresholds,
};

use crate::config::Operation;
use crate::errors::CliError;

/// Parsed operands for one invocation.
#[derive(Debug, Clone)]
pub struct Operands {
    pub a: BigNat,
    pub b: Option<BigNat>,
}

impl Operands {
    /// Parse the decimal operands the operation needs.
    pub fn parse(op: Operation, a: &str, b: Option<&str>) -> Result<Self, CliError> {
        let a = a.parse::<BigNat>().map_err(|source| CliError::Operand {
            name: "first",
            source,
        })?;
        let b = if op.is_binary() {
            let text = b.ok_or(CliError::MissingOperand(op.name()))?;
            Some(text.parse::<BigNat>().map_err(|source| CliError::Operand {
                name: "second",
                source,
            })?)
        } else {
            None
        };
        Ok(Self { a, b })
    }

    fn second(&self, op: Operation) -> Result<&BigNat, CliError> {
        self.b.as_ref().ok_or(CliError::MissingOperand(op.name()))
    }
}

/// Result of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Value(BigNat),
    QuotRem(BigNat, BigNat),
    Compared(Ordering),
    Bits(usize),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::QuotRem(q, r) => write!(f, "{q}\n{r}"),
            Self::Compared(ord) => f.write_str(match ord {
                Ordering::Less => "-1",
                Ordering::Equal => "0",
                Ordering::Greater => "1",
            }),
            Self::Bits(n) => write!(f, "{n}"),
        }
    }
}

/// One strategy's run of the operation.
#[derive(Debug)]
pub struct OperationResult {
    pub strategy: String,
    pub outcome: Result<Outcome, CliError>,
    pub duration: Duration,
}

/// Evaluate `op` with the given multiplier.
pub fn evaluate(
    op: Operation,
    operands: &Operands,
    multiplier: &dyn Multiplier,
) -> Result<Outcome, CliError> {
    let a = &operands.a;
    let outcome = match op {
        Operation::Add => Outcome::Value(add(a, operands.second(op)?)),
        Operation::Sub => Outcome::Value(sub(a, operands.second(op)?)),
        Operation::Mul => Outcome::Value(multiplier.multiply(a, operands.second(op)?)?),
        Operation::Div => Outcome::Value(div(a, operands.second(op)?)?),
        Operation::Rem => Outcome::Value(rem(a, operands.second(op)?)?),
        Operation::Divmod => {
            let (q, r) = divmod(a, operands.second(op)?)?;
            Outcome::QuotRem(q, r)
        }
        Operation::Pow => Outcome::Value(power_big_with(multiplier, a, operands.second(op)?)?),
        Operation::Gcd => Outcome::Value(gcd(a, operands.second(op)?)),
        Operation::Factorial => {
            let n = to_u64(a).map_err(|source| CliError::Operand {
                name: "first",
                source,
            })?;
            Outcome::Value(factorial_with(multiplier, n)?)
        }
        Operation::And => Outcome::Value(bit_and(a, operands.second(op)?)),
        Operation::Or => Outcome::Value(bit_or(a, operands.second(op)?)),
        Operation::Xor => Outcome::Value(bit_xor(a, operands.second(op)?)),
        Operation::Cmp => Outcome::Compared(compare(a, operands.second(op)?)),
        Operation::Bits => Outcome::Bits(a.bits()),
    };
    Ok(outcome)
}

/// Run `op` once per strategy. Operations that never multiply run once,
/// with the first strategy.
pub fn execute_operation(
    op: Operation,
    operands: &Operands,
    strategies: &[StrategyKind],
    thresholds: Thresholds,
) -> Vec<OperationResult> {
    let kinds = if op.uses_multiplier() {
        strategies
    } else {
        &strategies[..strategies.len().min(1)]
    };
    kinds
        .iter()
        .map(|&kind| {
            let multiplier = kind.build(thresholds);
            let start = Instant::now();
            let outcome = evaluate(op, operands, multiplier.as_ref());
            let duration = start.elapsed();
            debug!(op = op.name(), strategy = %kind, ?duration, ok = outcome.is_ok(), "operation finished");
            OperationResult {
                strategy: multiplier.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Check that every successful strategy agrees.
pub fn analyze_comparison_results(results: &[OperationResult]) -> Result<(), CliError> {
    let mut valid = results.iter().filter_map(|r| r.outcome.as_ref().ok());
    let Some(first) = valid.next() else {
        return Err(CliError::NoResults);
    };
    if valid.any(|outcome| outcome != first) {
        return Err(CliError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bignat_core::BigNatError;

    fn operands(op: Operation, a: &str, b: Option<&str>) -> Operands {
        Operands::parse(op, a, b).unwrap()
    }

    fn run(op: Operation, a: &str, b: Option<&str>) -> Outcome {
        let multiplier = StrategyKind::Adaptive.build(Thresholds::default());
        evaluate(op, &operands(op, a, b), multiplier.as_ref()).unwrap()
    }

    #[test]
    fn basic_operations() {
        assert_eq!(run(Operation::Add, "40", Some("2")).to_string(), "42");
        assert_eq!(run(Operation::Sub, "2", Some("40")).to_string(), "0");
        assert_eq!(run(Operation::Mul, "123", Some("456")).to_string(), "56088");
        assert_eq!(
            run(Operation::Divmod, "1000000007", Some("97")).to_string(),
            "10309278\n41"
        );
        assert_eq!(run(Operation::Pow, "2", Some("10")).to_string(), "1024");
        assert_eq!(run(Operation::Gcd, "48", Some("18")).to_string(), "6");
        assert_eq!(run(Operation::Factorial, "5", None).to_string(), "120");
        assert_eq!(run(Operation::Xor, "12", Some("10")).to_string(), "6");
        assert_eq!(run(Operation::Cmp, "3", Some("5")).to_string(), "-1");
        assert_eq!(run(Operation::Cmp, "5", Some("5")).to_string(), "0");
        assert_eq!(run(Operation::Bits, "255", None).to_string(), "8");
    }

    #[test]
    fn division_by_zero() {
        let multiplier = StrategyKind::Adaptive.build(Thresholds::default());
        let ops = operands(Operation::Div, "1", Some("0"));
        assert!(matches!(
            evaluate(Operation::Div, &ops, multiplier.as_ref()),
            Err(CliError::Arithmetic(BigNatError::DivisionByZero))
        ));
    }

    #[test]
    fn operand_errors() {
        assert!(matches!(
            Operands::parse(Operation::Add, "1", None),
            Err(CliError::MissingOperand("add"))
        ));
        assert!(matches!(
            Operands::parse(Operation::Add, "1", Some("x")),
            Err(CliError::Operand { name: "second", .. })
        ));
        assert!(Operands::parse(Operation::Bits, "7", None).unwrap().b.is_none());
    }

    #[test]
    fn all_strategies_agree() {
        let ops = operands(Operation::Pow, "987654321987654321", Some("50"));
        let results = execute_operation(
            Operation::Pow,
            &ops,
            &StrategyKind::ALL,
            Thresholds::default(),
        );
        assert_eq!(results.len(), 4);
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn non_multiplying_ops_run_once() {
        let ops = operands(Operation::Add, "1", Some("2"));
        let results = execute_operation(
            Operation::Add,
            &ops,
            &StrategyKind::ALL,
            Thresholds::default(),
        );
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn mismatch_detected() {
        let result = |v: u32| OperationResult {
            strategy: "x".into(),
            outcome: Ok(Outcome::Value(BigNat::from(v))),
            duration: Duration::ZERO,
        };
        assert!(matches!(
            analyze_comparison_results(&[result(1), result(2)]),
            Err(CliError::Mismatch)
        ));
        assert!(analyze_comparison_results(&[result(1), result(1)]).is_ok());
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(CliError::NoResults)
        ));
    }
}
