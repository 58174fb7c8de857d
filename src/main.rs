use std::{env, fs};

use ucc_log::{fatal, log, read_config, LogSettings, Severity};

const SETTINGS_FILE: &str = "logging.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match read_config(SETTINGS_FILE) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}; falling back to default log settings");
            LogSettings::default()
        }
    };

    if !settings.enabled {
        println!("Logging disabled by {SETTINGS_FILE}");
        return Ok(());
    }

    // UCC_LOG_LEVEL=TRACE overrides the settings file
    let threshold = match env::var("UCC_LOG_LEVEL") {
        Ok(value) => value.parse::<Severity>().unwrap_or(settings.level),
        Err(_) => settings.level,
    };

    fs::create_dir_all(&settings.directory)?;

    let handle = match ucc_log::init_logger(threshold, &settings.directory) {
        Ok(handle) => handle,
        Err(e) => {
            // Keep running without a log file
            eprintln!("{e}");
            return Ok(());
        }
    };
    println!("Writing {threshold} and above to {}", handle.file_name());

    log::trace!("trace record");
    log::debug!("debug record");
    log::info!("logging online");
    log::warn!("warn record");
    log::error!("error record");
    fatal!("fatal record");

    Ok(())
}
