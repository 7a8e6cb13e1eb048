//! Logging setup for the demo binary.
//!
//! The widget itself only talks to the `log` facade; this module wires the
//! facade to a fern file dispatcher when the configuration asks for it.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::LoggingConfig;

/// Initialize file logging according to the configuration.
///
/// When logging is disabled this is a no-op and `log` macros go nowhere.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] [{}] {}",
                Utc::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&config.file).with_context(|| format!("Failed to open log file: {}", config.file))?)
        .apply()
        .context("Failed to install logger")?;

    Ok(())
}
