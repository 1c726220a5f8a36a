use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "romcalc",
    version,
    about = "Evaluate one expression like `III + IV` or `7 * 1` read from standard input"
)]
pub struct CliArgs {
    /// Do not print the input prompt (useful when piping input)
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Enable logging to stderr (filter with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
