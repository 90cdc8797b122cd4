//! Configuration types

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_MAX_FILES};
use mapkey_application::SettingsTable;
use mapkey_domain::DuplicatePolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Registry composition settings
    pub registry: RegistryConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Per-key provider settings, keyed by key label
    pub settings: SettingsTable,
}

/// Registry composition configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// What a second registration under the same key does
    pub duplicate_policy: DuplicatePolicy,

    /// Fail composition when a closed key set is not fully bound
    pub require_complete: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            require_complete: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,

    /// Maximum number of rotated files to keep
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
            max_files: LOG_MAX_FILES,
        }
    }
}
