//! Type identity keys
//!
//! A [`TypeKey`] uses the concrete variant type itself as the registry
//! identifier. Equality and hashing go through [`TypeId`] only; the captured
//! type name is kept for diagnostics.

use std::any::{TypeId, type_name};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::TYPE_PATH_SEPARATOR;
use crate::value_objects::key::RegistryKey;

/// Identifier derived from a concrete type
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for the type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying type id
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path
    ///
    /// Generic arguments are kept verbatim: `a::Wrapper<b::Inner>` becomes
    /// `Wrapper<b::Inner>`.
    pub fn short_name(&self) -> &'static str {
        let head_end = self.name.find('<').unwrap_or(self.name.len());
        let start = self.name[..head_end]
            .rfind(TYPE_PATH_SEPARATOR)
            .map_or(0, |idx| idx + TYPE_PATH_SEPARATOR.len());
        &self.name[start..]
    }

    /// Whether this key identifies `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for TypeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// Labels name the identifier in errors and settings lookups, so they carry
// the full path; `Display` stays short for listings.
impl RegistryKey for TypeKey {
    fn label(&self) -> String {
        self.name.to_string()
    }
}
