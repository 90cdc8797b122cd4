//! Domain Port Interfaces
//!
//! Traits at the seams between the registry and the code that contributes
//! or consumes variants.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`Provider`] | Factory producing one variant's instances |
//! | [`Variant`] | Instance that can be held by an instance scope |

/// Provider port
pub mod provider;
/// Scoped variant port
pub mod variant;

pub use provider::{Provider, SharedProvider};
pub use variant::Variant;
