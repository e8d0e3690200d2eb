//! Command-line argument parsing.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI, optionally overriding configuration
    Run(RunOptions),
    /// Unusable arguments; carries the message to print
    Invalid(String),
}

/// Overrides given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub api_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Parse command-line arguments (program name first) into a command.
///
/// `--version` and `--help` win over everything else. Unknown flags are
/// ignored.
///
/// # Examples
///
/// ```
/// use wikiquiz::cli::args::{parse_args, CliCommand, RunOptions};
///
/// let args = vec!["wikiquiz".to_string(), "--api-url=http://q:1".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Run(RunOptions { api_url: Some("http://q:1".to_string()), log_file: None })
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api-url" => match inline.or_else(|| args.next()) {
                Some(url) if !url.is_empty() => options.api_url = Some(url),
                _ => return CliCommand::Invalid("--api-url requires a value".to_string()),
            },
            "--log-file" => match inline.or_else(|| args.next()) {
                Some(path) if !path.is_empty() => options.log_file = Some(PathBuf::from(path)),
                _ => return CliCommand::Invalid("--log-file requires a value".to_string()),
            },
            _ => {}
        }
    }

    CliCommand::Run(options)
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "wikiquiz {}\n\
         Turn Wikipedia articles into quizzes from the terminal.\n\n\
         USAGE:\n    wikiquiz [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   --api-url <URL>    Quiz API base URL (env: WIKIQUIZ_API_URL, default: http://localhost:8000)\n\
         \x20   --log-file <PATH>  Log file (env: WIKIQUIZ_LOG_FILE, default: ~/.wikiquiz/wikiquiz.log)\n\
         \x20   -V, --version      Print version\n\
         \x20   -h, --help         Print this help\n",
        super::VERSION
    )
}
