//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use bignat_core::BigNat;
use bignat_ntt::{descriptor_for_result_bits, estimate_ntt_memory, predicted_result_bits};

use crate::runner::Outcome;

/// Abbreviate a long decimal string unless `verbose`.
#[must_use]
pub fn format_decimal(s: &str, verbose: bool) -> String {
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s.to_string()
    }
}

/// Format an outcome for display, abbreviating long values.
#[must_use]
pub fn format_outcome(outcome: &Outcome, verbose: bool) -> String {
    match outcome {
        Outcome::Value(v) => format_decimal(&v.to_string(), verbose),
        Outcome::QuotRem(q, r) => format!(
            "{} remainder {}",
            format_decimal(&q.to_string(), verbose),
            format_decimal(&r.to_string(), verbose)
        ),
        other => other.to_string(),
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// NTT plan for multiplying `a` by `b`: descriptor and memory estimate.
#[must_use]
pub fn describe_ntt_plan(a: &BigNat, b: &BigNat) -> String {
    let bits = predicted_result_bits(a.limbs(), b.limbs());
    let mut out = format!("Predicted product bits: {}", format_number(bits as u64));
    match (descriptor_for_result_bits(bits), estimate_ntt_memory(bits)) {
        (Ok(desc), Ok(bytes)) => {
            let _ = write!(
                out,
                "\nNTT descriptor: {}-bit coefficients, transform length 2^{}\nNTT memory estimate: {} bytes",
                desc.limb_split_bits,
                desc.transform_length_exponent,
                format_number(bytes as u64)
            );
        }
        (Err(e), _) | (_, Err(e)) => {
            let _ = write!(out, "\nNTT descriptor: none ({e})");
        }
    }
    out
}

/// Write an outcome to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, outcome: &Outcome) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{outcome}")?;
    Ok(())
}
