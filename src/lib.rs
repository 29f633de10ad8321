//! Shared fixtures for the workspace-level integration tests.
//!
//! The golden file holds reference values generated independently of this
//! workspace.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Contents of `tests/testdata/bignat_golden.json`.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub multiplication: Vec<ProductEntry>,
    pub division: Vec<DivisionEntry>,
    pub factorial: Vec<FactorialEntry>,
    pub power: Vec<PowerEntry>,
    pub gcd: Vec<GcdEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ProductEntry {
    pub a: String,
    pub b: String,
    pub product: String,
}

#[derive(Debug, Deserialize)]
pub struct DivisionEntry {
    pub a: String,
    pub b: String,
    pub quotient: String,
    pub remainder: String,
}

#[derive(Debug, Deserialize)]
pub struct FactorialEntry {
    pub n: u64,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct PowerEntry {
    pub base: String,
    pub exponent: u32,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct GcdEntry {
    pub a: String,
    pub b: String,
    pub gcd: String,
}

/// Read and parse the golden file.
pub fn load_golden_data() -> Result<GoldenData> {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/bignat_golden.json"
    );
    let data = std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    serde_json::from_str(&data).context("failed to parse golden JSON")
}
