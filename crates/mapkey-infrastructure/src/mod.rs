//! # mapkey infrastructure layer
//!
//! Cross-cutting concerns around the registry:
//!
//! - `config` - Figment-based configuration loading and validation
//! - `logging` - tracing subscriber setup
//! - `di` - composition of registries from declarative entries
//! - `error_ext` - context helpers for foreign errors

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig, RegistryConfig};
pub use di::{compose_closed_registry, compose_registry};
pub use logging::init_logging;
