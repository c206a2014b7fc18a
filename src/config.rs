//! This module defines the logger configuration surface.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The default message template.
///
/// Placeholders are substituted in a fixed order; see
/// [`format_message`](crate::format_message) for the exact semantics.
pub const DEFAULT_LOG_FORMAT: &str =
    "[%timestamp%] %level% %message%\n -> File: %file%:%line% (Function: %function%)\n";

/// Configuration for a [`Logger`](crate::Logger).
///
/// All fields have defaults, so a host application can embed this in its
/// own config file and override only what it needs. The template string is
/// not validated: a placeholder that does not appear in it is simply never
/// substituted, and unrecognized text passes through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Write formatted lines to stderr, colorized per level.
    pub console_output: bool,
    /// Append formatted lines to `log_filename`.
    pub file_output: bool,
    /// Reserved for a future remote transport. Currently inert: emission
    /// never reads it, and enabling it has no effect.
    pub remote_logging: bool,
    /// Message template containing `%timestamp%`, `%level%`, `%message%`,
    /// `%file%`, `%line%` and `%function%` placeholders.
    pub log_format: String,
    /// Target path for file output, opened in append mode per write.
    pub log_filename: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_output: true,
            file_output: false,
            remote_logging: false,
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            log_filename: PathBuf::from("error_log.txt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let config = LogConfig::default();
        assert!(config.console_output);
        assert!(!config.file_output);
        assert!(!config.remote_logging);
        assert_eq!(config.log_format, DEFAULT_LOG_FORMAT);
        assert_eq!(config.log_filename, PathBuf::from("error_log.txt"));
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let config: LogConfig =
            serde_json::from_str(r#"{"file_output": true, "log_filename": "app.log"}"#)
                .expect("valid config json");
        assert!(config.console_output);
        assert!(config.file_output);
        assert_eq!(config.log_filename, PathBuf::from("app.log"));
        assert_eq!(config.log_format, DEFAULT_LOG_FORMAT);
    }
}
