//! # mapkey application layer
//!
//! Keyed multi-binding registries and the objects built on top of them.
//!
//! ```text
//! ProviderEntry slices ─┐
//!                       ├─> RegistryBuilder ──build()──> Arc<KeyedRegistry> ──> InstanceScope
//! register(key, p) ─────┘      (composition)               (read-only)          (per owner cache)
//! ```

pub mod registry;
pub mod scope;

pub use registry::{
    Binding, KeyedRegistry, ProviderContext, ProviderEntry, RegistryBuilder, SettingsTable,
};
pub use scope::InstanceScope;
