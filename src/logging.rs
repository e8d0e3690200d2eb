//! File logging.
//!
//! The TUI owns stdout, so tracing output goes to a log file
//! (`~/.wikiquiz/wikiquiz.log` by default). Directives come from
//! `WIKIQUIZ_LOG` and default to `info`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LOG_FILTER_ENV};

const DEFAULT_FILTER: &str = "info";

/// Open `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `config.log_file`.
///
/// Returns false when logging stays off: no log file configured, the file
/// could not be opened, or a subscriber was already installed.
pub fn init(config: &AppConfig) -> bool {
    let Some(path) = &config.log_file else {
        return false;
    };
    let file = match open_log_file(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("logs").join("wikiquiz.log");

        let file = open_log_file(&path);
        assert!(file.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_open_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wikiquiz.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        assert!(open_log_file(&blocker.join("wikiquiz.log")).is_err());
    }

    #[test]
    fn test_init_without_log_file_is_disabled() {
        let config = AppConfig::default().without_log_file();
        assert!(!init(&config));
    }
}
