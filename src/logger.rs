//! Logging setup.
//!
//! The crate logs through the `log` facade. When logging is enabled in the
//! configuration, records are written by `fern` to `treehole.log` in the
//! platform data directory; otherwise no logger is installed and records are
//! dropped.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Install the file logger if enabled.
///
/// Returns the log file path when a logger was installed.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config.level_filter()?;
    let log_path = get_log_file_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let log_file =
        fern::log_file(&log_path).with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("reqwest", level.min(log::LevelFilter::Info))
        .chain(log_file)
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging to {}", log_path.display());
    Ok(Some(log_path))
}

/// Location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
