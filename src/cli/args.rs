use crate::io::DEFAULT_LEDGER_PATH;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Record, list and total expenses from an interactive menu
#[derive(Parser, Debug)]
#[command(name = "expense-ledger")]
#[command(about = "Record, list and total expenses from an interactive menu", long_about = None)]
pub struct CliArgs {
    /// Ledger file loaded at startup and written on exit
    #[arg(
        long = "file",
        value_name = "PATH",
        default_value = DEFAULT_LEDGER_PATH,
        help = "Ledger file loaded at startup and saved on exit"
    )]
    pub ledger_file: PathBuf,

    /// Diagnostic verbosity, written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log filter for diagnostics on stderr, e.g. 'warn', 'info' or 'expense_ledger=debug'"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Build the log filter from `--log-level`
    ///
    /// An unparsable directive falls back to `warn` and prints a warning to
    /// stderr, so a typo never hides the malformed-line diagnostics.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level).unwrap_or_else(|e| {
            eprintln!(
                "Warning: invalid log level '{}' ({}), using 'warn'",
                self.log_level, e
            );
            EnvFilter::new("warn")
        })
    }
}
