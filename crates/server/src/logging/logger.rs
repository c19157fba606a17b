// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use polkadot_assets_api_config::LogConfig;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
}

impl<'a> From<&'a LogConfig> for LoggingConfig<'a> {
    fn from(config: &'a LogConfig) -> Self {
        Self {
            level: &config.level,
            json_format: config.json,
            strip_ansi: config.strip_ansi,
            write_to_file: config.write,
            write_path: &config.write_path,
            write_max_file_size: config.write_max_file_size,
            write_max_files: config.write_max_files,
        }
    }
}

/// Env filter for a configured level. `http` enables request logs on top of `info`.
pub fn env_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let directives = if level == "http" {
        "info,http=debug"
    } else {
        level
    };
    EnvFilter::try_new(directives).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

/// Initialize tracing with console output and, optionally, size-rotated files.
///
/// # Log Rotation
/// When a log file reaches `write_max_file_size`, it is rotated:
/// - Current: logs.log
/// - After rotation: logs.log.1, logs.log.2, etc.
/// - Keeps up to `write_max_files` files in total
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = env_filter(config.level)?;

    let console_layer = if config.json_format {
        fmt::layer().json().boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi)
            .boxed()
    };

    let file_layer = if config.write_to_file {
        std::fs::create_dir_all(config.write_path)?;

        let log_file_path = PathBuf::from(config.write_path).join("logs.log");
        // write_max_files counts the current file too.
        let file_appender = BasicRollingFileAppender::new(
            log_file_path,
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            config.write_max_files.saturating_sub(1),
        )?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // The writer must outlive every log call.
        std::mem::forget(guard);

        let layer = if config.json_format {
            fmt::layer().json().with_writer(non_blocking).boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed()
        };
        Some(layer)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_levels() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(env_filter(level).is_ok(), "{level}");
        }
        let http = env_filter("http").unwrap().to_string();
        assert!(http.contains("http=debug"), "{http}");
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        let err = env_filter("info,[").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLogLevel { level, .. } if level == "info,["));
    }

    #[test]
    fn test_from_log_config() {
        let config = LogConfig {
            level: "http".to_string(),
            write: true,
            ..LogConfig::default()
        };
        let logging = LoggingConfig::from(&config);
        assert_eq!(logging.level, "http");
        assert!(logging.write_to_file);
        assert_eq!(logging.write_max_files, config.write_max_files);
    }
}
