//! Registry composition
//!
//! Turns a family's declarative entries plus the loaded [`AppConfig`] into a
//! published registry.
//!
//! ```text
//! AppConfig ──┐
//!             ├─→ RegistryBuilder ─→ Arc<KeyedRegistry>
//! linkme ─────┘      (policy,            (shared, read-only)
//! entries            settings)
//! ```
//!
//! [`AppConfig`]: crate::config::AppConfig

pub mod bootstrap;

pub use bootstrap::{compose_closed_registry, compose_registry};
