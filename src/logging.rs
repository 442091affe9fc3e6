//! Logging initialization.
//!
//! Logs always go to stderr. With `logging.to_file` set they are also
//! written to `annual-report-{datetime}.log` in the configured log directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Keeps the file writer alive. Dropping it flushes buffered log lines.
pub struct LoggingHandle {
    pub _guard: Option<WorkerGuard>,
    /// Path to the log file when file logging is enabled.
    pub log_file_path: Option<PathBuf>,
}

/// Level directive applied when `RUST_LOG` is unset.
fn default_directive(config: &LoggingConfig, debug_override: bool) -> String {
    if debug_override {
        "debug".to_string()
    } else {
        config.level.to_ascii_lowercase()
    }
}

fn log_file_name(now: DateTime<Utc>) -> String {
    format!("annual-report-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Install the global subscriber. Call once, before the window opens.
pub fn init_logging(config: &LoggingConfig, debug_override: bool) -> Result<LoggingHandle> {
    let directive = default_directive(config, debug_override);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard, log_file_path) = if config.to_file {
        let logs_dir = config.logs_path();
        std::fs::create_dir_all(&logs_dir)
            .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

        let log_filename = log_file_name(Utc::now());
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(non_blocking);

        (Some(layer), Some(guard), Some(log_file_path))
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(LoggingHandle {
        _guard: guard,
        log_file_path,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_debug_override_wins() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(default_directive(&config, true), "debug");
        assert_eq!(default_directive(&config, false), "warn");
    }

    #[test]
    fn test_directive_is_lowercased() {
        let config = LoggingConfig {
            level: "INFO".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(default_directive(&config, false), "info");
    }

    #[test]
    fn test_log_file_name_format() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(log_file_name(now), "annual-report-20260304T050607Z.log");
    }
}
