//! bignat library: application logic for the natural-number calculator.

pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod output;
pub mod presenter;
pub mod runner;
