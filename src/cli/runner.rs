use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use romcalc::{evaluate_line, read_expression};

use super::args::CliArgs;
use super::errors::AppError;

const PROMPT: &str = "Введите выражение: ";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// One read-evaluate-print cycle over arbitrary streams.
pub fn run_with_io<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    prompt: bool,
) -> Result<(), AppError> {
    if prompt {
        write!(writer, "{PROMPT}")?;
        writer.flush()?;
    }

    let line = read_expression(reader)?;
    info!("Evaluating: {:?}", line.trim_end());

    let evaluation = evaluate_line(&line)?;
    info!("Result: {} ({} notation)", evaluation.value, evaluation.system);

    writeln!(writer, "{evaluation}")?;
    writer.flush()?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(stdin.lock(), stdout.lock(), !args.quiet)
}
