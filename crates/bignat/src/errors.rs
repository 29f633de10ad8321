//! Error handling and exit codes.

use bignat_core::exit_codes;
use bignat_core::BigNatError;

/// Failures surfaced by the command-line driver.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An operand could not be parsed or is out of range.
    #[error("invalid {name} operand: {source}")]
    Operand {
        name: &'static str,
        #[source]
        source: BigNatError,
    },

    /// A binary operation was given one operand.
    #[error("operation {0} needs a second operand")]
    MissingOperand(&'static str),

    /// An arithmetic failure such as division by zero.
    #[error(transparent)]
    Arithmetic(#[from] BigNatError),

    /// Bad strategy name or thresholds.
    #[error("configuration error: {0}")]
    Config(String),

    /// Strategies disagreed on the result.
    #[error("strategies produced different results")]
    Mismatch,

    /// No strategy produced a result.
    #[error("no valid results")]
    NoResults,
}

/// Map a driver error to the process exit code.
pub fn handle_error(err: &CliError) -> i32 {
    match err {
        CliError::Operand { .. }
        | CliError::MissingOperand(_)
        | CliError::Arithmetic(BigNatError::DivisionByZero) => exit_codes::ERROR_INPUT,
        CliError::Config(_) => exit_codes::ERROR_CONFIG,
        CliError::Mismatch => exit_codes::ERROR_MISMATCH,
        CliError::Arithmetic(_) | CliError::NoResults => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
