// CLI module
// Argument parsing and the interactive shell

mod args;
mod shell;

pub use args::CliArgs;
pub use shell::Shell;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments or the --help flag), clap displays
/// an error message or help text and exits the process.
///
/// # Returns
///
/// Returns a `CliArgs` struct with the parsed command-line arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
