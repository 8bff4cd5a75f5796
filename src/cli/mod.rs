// CLI module
// Command-line arguments and logging setup

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr tracing subscriber configured by `args`
pub fn init_logging(args: &CliArgs) {
    tracing_subscriber::fmt()
        .with_env_filter(args.to_env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
