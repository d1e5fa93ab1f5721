//! Logging configuration from environment variables

use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory the rolling log files land in
    pub log_dir: PathBuf,
    /// Filter directives (e.g. "info,desk=debug")
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let log_dir = std::env::var("SALESDESK_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Self {
            log_dir,
            filter: std::env::var("SALESDESK_LOG")
                .unwrap_or_else(|_| "info,desk=debug".to_string()),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.filter.contains("debug")
    }
}
