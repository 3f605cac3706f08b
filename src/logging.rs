//! Logging setup: console output plus an append-only log file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::{Level, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, time::LocalTime};
use tracing_subscriber::prelude::*;

use crate::config::LogLevel;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence, then `verbose` (debug), then the configured level.
/// If the log file cannot be opened, logging continues on the console only.
///
/// # Arguments
/// * `level` - Level resolved from configuration
/// * `verbose` - Force debug output
/// * `log_file` - File to append log lines to
pub fn init(level: LogLevel, verbose: bool, log_file: &Path) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level(level, verbose)).into())
        .from_env_lossy();

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(LocalTime::new(time::macros::format_description!("[hour]:[minute]:[second]")));

    let (file_layer, file_error) = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_timer(LocalTime::new(time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")));
            (Some(layer), None)
        }
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry().with(filter).with(console_layer).with(file_layer).init();

    if let Some(e) = file_error {
        warn!("Cannot open log file {}: {}, logging to console only", log_file.display(), e);
    }
}

fn default_level(level: LogLevel, verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { level.as_tracing_level() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_configured_level() {
        assert_eq!(default_level(LogLevel::Error, true), Level::DEBUG);
        assert_eq!(default_level(LogLevel::Warning, false), Level::WARN);
        assert_eq!(default_level(LogLevel::Critical, false), Level::ERROR);
    }
}
