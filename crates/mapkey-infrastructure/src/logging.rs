//! Structured logging with tracing
//!
//! Installs the global subscriber described by [`LoggingConfig`]: plain or
//! JSON output on stderr, plus an optional daily-rotated log file. Stdout is
//! left to command output.

use crate::config::LoggingConfig;
use crate::constants::{LOG_FILE_PREFIX, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;
use mapkey_domain::error::{Error, Result};
use std::path::Path;
use tracing::{info, warn, Level};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize logging with the provided configuration
///
/// `MAPKEY_LOG` takes precedence over the configured level when it holds a
/// valid filter directive. Fails if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = match EnvFilter::try_from_env(LOG_FILTER_ENV) {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.level)?,
    };

    let file_appender = match &config.file_output {
        Some(path) => Some(file_appender(path, config.max_files)?),
        None => None,
    };

    // Layer types differ between the json and plain formatters
    if config.json_format {
        let console = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry
                .with(console)
                .with(file)
                .try_init()
                .config_context("Failed to install tracing subscriber")?;
        } else {
            registry
                .with(console)
                .try_init()
                .config_context("Failed to install tracing subscriber")?;
        }
    } else {
        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry
                .with(console)
                .with(file)
                .try_init()
                .config_context("Failed to install tracing subscriber")?;
        } else {
            registry
                .with(console)
                .try_init()
                .config_context("Failed to install tracing subscriber")?;
        }
    }

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Filter admitting events at `level` and above
///
/// Built from the parsed level, so aliases such as `warning` select the
/// level instead of being read as a target name.
pub fn level_filter(level: &str) -> Result<EnvFilter> {
    let level = parse_log_level(level)?;
    Ok(EnvFilter::default().add_directive(LevelFilter::from_level(level).into()))
}

/// Daily-rotated appender writing next to `path`, named after its file stem
fn file_appender(path: &Path, max_files: usize) -> Result<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(LOG_FILE_PREFIX);

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .max_log_files(max_files.max(1))
        .build(directory)
        .with_config_context(|| format!("Failed to open log directory {}", directory.display()))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
