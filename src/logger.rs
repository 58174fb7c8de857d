use simplelog::*;
use std::fs::{self, File};

use chrono::{DateTime, Local};
use once_cell::sync::OnceCell;

use crate::error::LoggerError;
use crate::severity::Severity;

const LOG_FILE_SUFFIX: &str = "-ucc.log";

// File name of the active sink, set once on successful init.
static ACTIVE_LOG_FILE: OnceCell<String> = OnceCell::new();

/// Handle to the installed logging configuration.
///
/// Returned by [`init_logger`]; startup code keeps it and hands it to
/// whatever needs the log file path for display or reporting.
#[derive(Debug, Clone)]
pub struct LoggerHandle {
    file_name: String,
}

impl LoggerHandle {
    /// Path of the log file this process writes to.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Wires the process-wide logger to a single timestamped log file.
///
/// Creates `<log_dir><timestamp>-ucc.log` (overwriting any file of the same
/// name), attaches the default layout with caller file/line per record, and
/// installs a [`WriteLogger`] filtering everything below `threshold`. The
/// file handle is unbuffered, so each record reaches the OS as it is
/// written. `log_dir` is used verbatim and must end with a path separator.
///
/// May be called once per process; a second call returns
/// [`LoggerError::AlreadyInitialized`] without touching the first sink.
pub fn init_logger(threshold: Severity, log_dir: &str) -> Result<LoggerHandle, LoggerError> {
    if ACTIVE_LOG_FILE.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let file_name = generate_log_file_name(log_dir);

    let config = ConfigBuilder::new()
        .set_time_format_custom(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .set_location_level(LevelFilter::Error)
        .build();

    let file = match File::create(&file_name) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Unable to create a log file in {log_dir}: read/write permission is required ({e})");
            return Err(LoggerError::Create {
                path: file_name,
                source: e,
            });
        }
    };

    if WriteLogger::init(threshold.to_level_filter(), config, file).is_err() {
        // A foreign logger got installed first; drop the orphan file.
        let _ = fs::remove_file(&file_name);
        return Err(LoggerError::AlreadyInitialized);
    }

    let _ = ACTIVE_LOG_FILE.set(file_name.clone());
    Ok(LoggerHandle { file_name })
}

/// Builds the log file name for `log_dir` from the current wall-clock time.
///
/// Two calls within the same second return the same name. `log_dir` is
/// concatenated as given, no separator is inserted or normalized.
pub fn generate_log_file_name(log_dir: &str) -> String {
    log_file_name_at(log_dir, &Local::now())
}

fn log_file_name_at(log_dir: &str, when: &DateTime<Local>) -> String {
    format!("{}{}{}", log_dir, when.format("%Y-%m-%d-%H:%M:%S"), LOG_FILE_SUFFIX)
}

/// File name computed by the last successful [`init_logger`] call, or
/// `None` if logging was never initialized.
pub fn current_log_file_name() -> Option<&'static str> {
    ACTIVE_LOG_FILE.get().map(String::as_str)
}
