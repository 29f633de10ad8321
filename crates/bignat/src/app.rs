//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use crate::completion::generate_completion;
use crate::config::{AppConfig, Operation};
use crate::errors::CliError;
use crate::output::{describe_ntt_plan, format_number, write_to_file};
use crate::presenter::CliPresenter;
use crate::runner::{analyze_comparison_results, execute_operation, Operands, Outcome};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let (Some(op), Some(a)) = (config.op, config.a.as_deref()) else {
        return Err(CliError::Config("an operation and an operand are required".into()).into());
    };
    run_cli(config, op, a)
}

fn run_cli(config: &AppConfig, op: Operation, a: &str) -> Result<()> {
    let strategies = config.strategies()?;
    let thresholds = config.resolve_thresholds()?;
    let operands = Operands::parse(op, a, config.b.as_deref())?;
    info!(
        op = op.name(),
        strategies = strategies.len(),
        karatsuba_digits = thresholds.karatsuba_digits,
        ntt_product_digits = thresholds.ntt_product_digits,
        "running"
    );

    let results = execute_operation(op, &operands, &strategies, thresholds);

    let presenter = CliPresenter::new(config.verbose, config.quiet);
    let operand_details = config.details.then(|| details_for(op, &operands));
    let compared = results.len() > 1;
    let mut shown = false;
    for result in &results {
        match &result.outcome {
            Ok(outcome) if !(shown && config.quiet) => {
                let details = operand_details.as_deref().map(|d| {
                    outcome_details(outcome).map_or_else(|| d.to_string(), |o| format!("{d}\n{o}"))
                });
                presenter.present_result(
                    op,
                    &result.strategy,
                    outcome,
                    result.duration,
                    details.as_deref(),
                );
                shown = true;
            }
            Ok(_) => {}
            Err(err) if compared => presenter.present_error(&result.strategy, &err.to_string()),
            Err(_) => {}
        }
    }

    if compared {
        presenter.present_comparison(&results);
        analyze_comparison_results(&results)?;
    }

    // first success, or the last failure
    let outcome = results
        .into_iter()
        .map(|r| r.outcome)
        .reduce(|first, next| first.or(next))
        .unwrap_or(Err(CliError::NoResults))?;

    if let Some(path) = &config.output {
        write_to_file(path, &outcome)
            .with_context(|| format!("cannot write {}", path.display()))?;
    }
    Ok(())
}

/// Operand sizes, plus the NTT plan for products.
fn details_for(op: Operation, operands: &Operands) -> String {
    let mut lines = vec![format!(
        "Operand limbs: {}{}",
        format_number(operands.a.bound() as u64),
        operands
            .b
            .as_ref()
            .map(|b| format!(", {}", format_number(b.bound() as u64)))
            .unwrap_or_default()
    )];
    if let (Operation::Mul, Some(b)) = (op, &operands.b) {
        lines.push(describe_ntt_plan(&operands.a, b));
    }
    lines.join("\n")
}

fn outcome_details(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Value(v) | Outcome::QuotRem(v, _) => Some(format!(
            "Result bits: {}\nResult digits: {}",
            format_number(v.bits() as u64),
            format_number(v.to_string().len() as u64)
        )),
        Outcome::Compared(_) | Outcome::Bits(_) => None,
    }
}
