//! Keyed Multi-Binding Registry
//!
//! Associates each variant of a family with a provider under a distinct key
//! and resolves providers by key at lookup time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Registry Composition Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Variant declares:  #[linkme::distributed_slice(FAMILY)]     │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Family declares:   #[linkme::distributed_slice]             │
//! │                        pub static FAMILY: [ProviderEntry] = [..]│
//! │                              ↓                                  │
//! │  3. Builder collects:  builder.register_entries(&FAMILY, ..)    │
//! │                              ↓                                  │
//! │  4. Caller resolves:   registry.create(&Kind::Home)             │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut builder = KeyedRegistry::<SurfaceKind, dyn Surface>::builder();
//! builder.register(SurfaceKind::Home, || Ok(Arc::new(Home::default()) as Arc<dyn Surface>))?;
//! let registry = Arc::new(builder.build());
//!
//! let home = registry.create(&SurfaceKind::Home)?;
//! ```

pub mod binding;
pub mod builder;
pub mod entry;
pub mod keyed;
pub mod typed;

pub use binding::Binding;
pub use builder::RegistryBuilder;
pub use entry::{ProviderContext, ProviderEntry, SettingsTable};
pub use keyed::KeyedRegistry;
