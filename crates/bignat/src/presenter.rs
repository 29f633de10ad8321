//! CLI result presenter.

use std::time::Duration;

use crate::config::Operation;
use crate::output::{format_duration, format_outcome};
use crate::runner::{OperationResult, Outcome};

/// Prints results to stdout and errors to stderr.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Render one result; the `details` lines are produced by the caller.
    #[must_use]
    pub fn render_result(
        &self,
        op: Operation,
        strategy: &str,
        outcome: &Outcome,
        duration: Duration,
        details: Option<&str>,
    ) -> String {
        if self.quiet {
            return outcome.to_string();
        }
        let mut lines = vec![format!("Operation: {}", op.name())];
        if op.uses_multiplier() {
            lines.push(format!("Strategy: {strategy}"));
        }
        lines.push(format!("Duration: {}", format_duration(duration)));
        if let Some(details) = details {
            lines.push(details.to_string());
        }
        lines.push(format!("Result: {}", format_outcome(outcome, self.verbose)));
        lines.join("\n")
    }

    pub fn present_result(
        &self,
        op: Operation,
        strategy: &str,
        outcome: &Outcome,
        duration: Duration,
        details: Option<&str>,
    ) {
        println!("{}", self.render_result(op, strategy, outcome, duration, details));
    }

    /// Render the per-strategy timing table.
    #[must_use]
    pub fn render_comparison(&self, results: &[OperationResult]) -> Option<String> {
        if self.quiet {
            return None;
        }
        let mut out = format!("\nComparison Results:\n{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() { "ERROR" } else { "OK" };
            out.push_str(&format!(
                "\n  {:<20} {:>10} [{}]",
                result.strategy,
                format_duration(result.duration),
                status,
            ));
        }
        Some(out)
    }

    pub fn present_comparison(&self, results: &[OperationResult]) {
        if let Some(table) = self.render_comparison(results) {
            println!("{table}");
        }
    }

    pub fn present_error(&self, strategy: &str, error: &str) {
        eprintln!("Error ({strategy}): {error}");
    }
}
