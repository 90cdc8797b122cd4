//! # mapkey domain
//!
//! Keys, provider contracts and errors shared by every mapkey layer.
//!
//! A family is a set of related implementations of one abstraction. Each
//! implementation ("variant") is bound under a distinct [`RegistryKey`],
//! either a closed enumeration ([`ClosedKeySet`]) or the variant type itself
//! ([`TypeKey`]).

/// Domain layer constants
pub mod constants;
/// Error handling types
pub mod error;
/// Provider and variant ports
pub mod ports;
/// Keys and composition policies
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Provider, SharedProvider, Variant};
pub use value_objects::{ClosedKeySet, DuplicatePolicy, RegistryKey, TypeKey};
