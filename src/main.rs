//! romcalc CLI entrypoint.
//!
//! Parses flags, runs one read-evaluate-print cycle through the `cli` module,
//! and maps any failure to a single error line and exit status 1.
//! For programmatic use, prefer the library API (`romcalc::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Ошибка: {e}");
            ExitCode::FAILURE
        }
    }
}
