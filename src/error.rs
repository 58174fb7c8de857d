use std::io;
use thiserror::Error;

/// Failures while setting up the log file sink or reading log settings.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("cannot create log file {path}: {source}; read/write permission is required on the log directory")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("logging was already initialized for this process")]
    AlreadyInitialized,

    #[error("cannot read log settings from {path}: {source}")]
    ReadSettings {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid log settings in {path}: {source}")]
    ParseSettings {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
