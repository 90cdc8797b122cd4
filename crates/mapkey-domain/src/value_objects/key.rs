//! Registry key contracts

use std::fmt;
use std::hash::Hash;

/// Identifier naming one variant within a family
///
/// Keys are compared by `Eq`/`Hash`; `Display` provides the label used in
/// diagnostics, error messages and configuration lookups.
pub trait RegistryKey: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Check that the key is acceptable as an identifier
    ///
    /// Returns a human-readable reason on rejection.
    fn validate(&self) -> std::result::Result<(), String> {
        Ok(())
    }

    /// Label for diagnostics and settings lookups
    fn label(&self) -> String {
        self.to_string()
    }
}

/// Key type whose legitimate values form a closed, known set
///
/// Registries keyed by a closed set can be checked for full coverage at
/// composition time.
pub trait ClosedKeySet: RegistryKey {
    /// Every legitimate key value
    fn variants() -> &'static [Self];
}

impl RegistryKey for String {
    fn validate(&self) -> std::result::Result<(), String> {
        validate_tag(self)
    }
}

impl RegistryKey for &'static str {
    fn validate(&self) -> std::result::Result<(), String> {
        validate_tag(self)
    }
}

fn validate_tag(tag: &str) -> std::result::Result<(), String> {
    if tag.trim().is_empty() {
        Err("key tag cannot be empty".to_string())
    } else {
        Ok(())
    }
}
