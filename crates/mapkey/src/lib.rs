//! # mapkey
//!
//! Keyed multi-binding registry: a family of interchangeable variants is
//! composed once, published as an immutable registry, and looked up by key.
//!
//! ## Example
//!
//! ```ignore
//! use mapkey::{AppContext, SurfaceKind};
//!
//! let context = AppContext::new(mapkey::infrastructure::AppConfig::default())?;
//! let home = context.surface(SurfaceKind::Home)?;
//! println!("{}", home.render());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - key contracts, provider port, errors
//! - `application` - builder, registry, scopes, declarative entries
//! - `infrastructure` - configuration, logging, composition helpers
//! - `surfaces` - sample family registered through linkme slices
//! - `context` - composition root for the sample family
//! - `commands` - CLI command implementations

/// Domain layer - keys, provider port and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use mapkey_domain::*;
}

/// Application layer - registries and scopes
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use mapkey_application::*;
}

/// Infrastructure layer - config, logging and composition
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use mapkey_infrastructure::*;
}

pub mod commands;
pub mod context;
pub mod surfaces;

// Re-export commonly used types at the crate root
pub use application::{InstanceScope, KeyedRegistry, ProviderEntry, RegistryBuilder};
pub use context::AppContext;
pub use domain::*;
pub use surfaces::{Surface, SurfaceKind};
