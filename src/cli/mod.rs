//! Command Line Interface (CLI) layer for romcalc.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the single read-evaluate-print
//! cycle. It wires standard input and output to `romcalc::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
