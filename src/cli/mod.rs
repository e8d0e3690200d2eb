//! CLI entry handling.
//!
//! The dispatcher runs early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use wikiquiz::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! // continue to the TUI
//! ```

pub mod args;

pub use args::{parse_args, usage, CliCommand, RunOptions};

use crate::config::AppConfig;

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle commands that do not start the TUI.
///
/// Returns the process exit code for those, `None` for `Run`.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("wikiquiz {}", VERSION);
            Some(0)
        }
        CliCommand::Help => {
            print!("{}", usage());
            Some(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, usage());
            Some(2)
        }
        CliCommand::Run(_) => None,
    }
}

/// Environment configuration with command-line overrides applied.
pub fn resolve_config(options: &RunOptions, base: AppConfig) -> AppConfig {
    let mut config = base;
    if let Some(url) = &options.api_url {
        config = config.with_api_base_url(url.clone());
    }
    if let Some(path) = &options.log_file {
        config = config.with_log_file(path.clone());
    }
    config
}
