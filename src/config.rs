//! Runtime configuration.
//!
//! Values come from the environment first (`WIKIQUIZ_API_URL`,
//! `WIKIQUIZ_LOG_FILE`) and are then overridden by command-line flags.

use std::path::PathBuf;

/// Base URL used when `WIKIQUIZ_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

pub const API_URL_ENV: &str = "WIKIQUIZ_API_URL";
pub const LOG_FILE_ENV: &str = "WIKIQUIZ_LOG_FILE";
/// `EnvFilter` directives for the log file.
pub const LOG_FILTER_ENV: &str = "WIKIQUIZ_LOG";

const DATA_DIR: &str = ".wikiquiz";
const LOG_FILE_NAME: &str = "wikiquiz.log";

/// Application configuration.
///
/// # Example
///
/// ```
/// use wikiquiz::config::AppConfig;
///
/// let config = AppConfig::default().with_api_base_url("http://quiz.local:9000");
/// assert_eq!(config.api_base_url, "http://quiz.local:9000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the quiz API
    pub api_base_url: String,
    /// Log file path; `None` disables logging
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn without_log_file(mut self) -> Self {
        self.log_file = None;
        self
    }

    /// Build from `WIKIQUIZ_API_URL` and `WIKIQUIZ_LOG_FILE`. Empty values
    /// count as unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_env(API_URL_ENV) {
            config = config.with_api_base_url(url);
        }
        if let Some(path) = non_empty_env(LOG_FILE_ENV) {
            config = config.with_log_file(path);
        }
        config
    }
}

/// `~/.wikiquiz/wikiquiz.log`, if a home directory is known.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR).join(LOG_FILE_NAME))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
