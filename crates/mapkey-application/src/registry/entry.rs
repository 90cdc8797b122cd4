//! Declarative provider entries
//!
//! A family declares a distributed slice of entries; variants contribute to
//! it from anywhere in the final binary. Entries are collected at link time,
//! so adding a variant never touches the family's own code.
//!
//! ```ignore
//! #[linkme::distributed_slice]
//! pub static SURFACES: [ProviderEntry<SurfaceKind, dyn Surface>] = [..];
//!
//! #[linkme::distributed_slice(SURFACES)]
//! static HOME: ProviderEntry<SurfaceKind, dyn Surface> = ProviderEntry {
//!     key: || SurfaceKind::Home,
//!     aliases: &[],
//!     description: "Landing surface",
//!     factory: |ctx| Ok(Arc::new(Home::from_context(ctx))),
//! };
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use mapkey_domain::RegistryKey;
use mapkey_domain::error::Result;

use crate::registry::binding::Binding;

/// Per-key provider settings, keyed by key label then setting name
pub type SettingsTable = BTreeMap<String, BTreeMap<String, String>>;

/// Registry entry contributed by a variant
///
/// Keys are produced by functions because type identities cannot be
/// computed in a `static` initializer.
pub struct ProviderEntry<K: 'static, T: ?Sized + 'static> {
    /// Key the variant is bound under
    pub key: fn() -> K,
    /// Further keys served when they have no binding of their own
    pub aliases: &'static [fn() -> K],
    /// Human-readable description
    pub description: &'static str,
    /// Factory creating variant instances
    pub factory: fn(&ProviderContext) -> Result<Arc<T>>,
}

impl<K: RegistryKey, T: ?Sized + 'static> ProviderEntry<K, T> {
    /// Key the entry binds
    pub fn key(&self) -> K {
        (self.key)()
    }

    /// Alias keys of the entry
    pub fn alias_keys(&self) -> Vec<K> {
        self.aliases.iter().map(|alias| alias()).collect()
    }

    /// Turn the entry into a binding whose provider carries the settings
    /// configured for its key
    pub fn to_binding(&self, settings: &SettingsTable) -> Binding<K, T> {
        let key = self.key();
        let context = ProviderContext::new(
            key.label(),
            settings.get(&key.label()).cloned().unwrap_or_default(),
        );
        let factory = self.factory;

        Binding::from_provider(key, move || factory(&context))
            .with_description(self.description)
            .with_aliases(self.alias_keys())
    }
}

/// Settings handed to an entry factory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderContext {
    key: String,
    settings: BTreeMap<String, String>,
}

impl ProviderContext {
    /// Create a context for the key labelled `key`
    pub fn new(key: impl Into<String>, settings: BTreeMap<String, String>) -> Self {
        Self {
            key: key.into(),
            settings,
        }
    }

    /// Label of the key being provided
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Look up a setting
    pub fn setting(&self, name: &str) -> Option<&str> {
        self.settings.get(name).map(String::as_str)
    }

    /// Look up a setting, falling back to `default`
    pub fn setting_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.setting(name).unwrap_or(default)
    }

    /// All settings for this key
    pub fn settings(&self) -> &BTreeMap<String, String> {
        &self.settings
    }
}
