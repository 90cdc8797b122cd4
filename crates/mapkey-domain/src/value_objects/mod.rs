//! Domain Value Objects
//!
//! Immutable values that identify bindings and govern how a registry is
//! composed.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`RegistryKey`] | Contract every registry identifier satisfies |
//! | [`ClosedKeySet`] | Key types whose legitimate values are enumerable |
//! | [`TypeKey`] | The concrete variant type used as identifier |
//! | [`DuplicatePolicy`] | What a second registration under one key does |

/// Registry key contracts
pub mod key;
/// Duplicate registration policy
pub mod policy;
/// Type identity keys
pub mod type_key;

pub use key::{ClosedKeySet, RegistryKey};
pub use policy::DuplicatePolicy;
pub use type_key::TypeKey;
