//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `mapkey_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "mapkey.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "mapkey";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "MAPKEY";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "MAPKEY_LOG";

/// Default file name prefix for rotated log files
pub const LOG_FILE_PREFIX: &str = "mapkey";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 7;
