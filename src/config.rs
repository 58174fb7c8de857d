use serde::Deserialize;
use std::fs;

use crate::error::LoggerError;
use crate::severity::Severity;

/// Log settings as read from a TOML settings file.
///
/// ```toml
/// level = "DEBUG"
/// directory = "out/logs/"
/// enabled = true
/// ```
///
/// Missing keys fall back to the defaults below. `directory` is passed to
/// the initializer as-is and must end with a path separator.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    #[serde(default = "default_level")]
    pub level: Severity,
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_level() -> Severity {
    Severity::Info
}

fn default_directory() -> String {
    "logs/".to_string()
}

fn default_enabled() -> bool {
    true
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: default_level(),
            directory: default_directory(),
            enabled: default_enabled(),
        }
    }
}

pub fn read_config(file_path: &str) -> Result<LogSettings, LoggerError> {
    let contents = fs::read_to_string(file_path).map_err(|e| LoggerError::ReadSettings {
        path: file_path.to_string(),
        source: e,
    })?;
    let settings: LogSettings = toml::from_str(&contents).map_err(|e| LoggerError::ParseSettings {
        path: file_path.to_string(),
        source: e,
    })?;

    log::debug!("Log settings loaded from {}", file_path);
    Ok(settings)
}
