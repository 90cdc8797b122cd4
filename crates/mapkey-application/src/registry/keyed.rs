//! Read-only keyed registry

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use mapkey_domain::error::{Error, Result};
use mapkey_domain::{ClosedKeySet, RegistryKey, SharedProvider};

use crate::registry::binding::Binding;
use crate::registry::builder::RegistryBuilder;

/// Immutable mapping from key to provider
///
/// Produced by [`RegistryBuilder::build`]. There is no way to add or remove
/// bindings afterwards, so a registry behind an `Arc` can be read from any
/// number of threads without locking.
pub struct KeyedRegistry<K, T: ?Sized> {
    bindings: HashMap<K, Binding<K, T>>,
    /// alias key -> keys of the bindings declaring it
    aliases: HashMap<K, Vec<K>>,
}

impl<K: RegistryKey, T: ?Sized> KeyedRegistry<K, T> {
    /// Start composing a registry
    pub fn builder() -> RegistryBuilder<K, T> {
        RegistryBuilder::new()
    }

    pub(crate) fn from_bindings(bindings: HashMap<K, Binding<K, T>>) -> Self {
        let mut aliases: HashMap<K, Vec<K>> = HashMap::new();
        for binding in bindings.values() {
            for alias in binding.aliases() {
                aliases
                    .entry(alias.clone())
                    .or_default()
                    .push(binding.key().clone());
            }
        }
        Self { bindings, aliases }
    }

    /// Find the binding serving `key`
    ///
    /// An exact binding wins. Otherwise the single binding declaring `key` as
    /// an alias is returned.
    ///
    /// # Errors
    /// - `UnknownKey` when nothing serves the key
    /// - `AmbiguousKey` when several bindings declare the key as alias
    pub fn binding(&self, key: &K) -> Result<&Binding<K, T>> {
        if let Some(binding) = self.bindings.get(key) {
            return Ok(binding);
        }

        match self.aliases.get(key).map(Vec::as_slice) {
            Some([primary]) => self
                .bindings
                .get(primary)
                .ok_or_else(|| self.unknown(key)),
            Some(candidates) if candidates.len() > 1 => {
                let mut labels: Vec<String> = candidates.iter().map(RegistryKey::label).collect();
                labels.sort();
                Err(Error::ambiguous_key(key.label(), labels))
            }
            _ => Err(self.unknown(key)),
        }
    }

    /// Provider registered for `key`
    pub fn resolve(&self, key: &K) -> Result<SharedProvider<T>> {
        self.binding(key).map(|binding| Arc::clone(binding.provider()))
    }

    /// Produce an instance of the variant bound to `key`
    ///
    /// Provider failures are reported as `Provider` errors naming the key of
    /// the binding that failed.
    pub fn create(&self, key: &K) -> Result<Arc<T>> {
        let binding = self.binding(key)?;
        binding
            .provider()
            .provide()
            .map_err(|err| Error::provider(binding.key().label(), err))
    }

    /// Every registered key
    pub fn keys(&self) -> HashSet<K> {
        self.bindings.keys().cloned().collect()
    }

    /// Whether `key` has a binding of its own
    pub fn contains(&self, key: &K) -> bool {
        self.bindings.contains_key(key)
    }

    /// Whether `resolve(key)` would succeed
    pub fn serves(&self, key: &K) -> bool {
        self.binding(key).is_ok()
    }

    /// Description of the binding serving `key`
    pub fn describe(&self, key: &K) -> Option<&str> {
        self.binding(key).ok().map(Binding::description)
    }

    /// All bindings, in no particular order
    pub fn bindings(&self) -> impl Iterator<Item = &Binding<K, T>> {
        self.bindings.values()
    }

    /// Bindings ordered by key label
    pub fn sorted_bindings(&self) -> Vec<&Binding<K, T>> {
        let mut bindings: Vec<_> = self.bindings.values().collect();
        bindings.sort_by_key(|binding| binding.key().label());
        bindings
    }

    /// Labels of every registered key, sorted
    pub fn sorted_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.bindings.keys().map(RegistryKey::label).collect();
        labels.sort();
        labels
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no binding
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Check that every expected key is served
    ///
    /// # Errors
    /// - `IncompleteRegistry` listing the labels of unserved keys
    pub fn ensure_covers<I>(&self, expected: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
    {
        let unserved: HashSet<K> = expected
            .into_iter()
            .filter(|key| !self.serves(key))
            .collect();

        if unserved.is_empty() {
            Ok(())
        } else {
            let mut missing: Vec<String> = unserved.iter().map(RegistryKey::label).collect();
            missing.sort();
            Err(Error::incomplete_registry(missing))
        }
    }

    fn unknown(&self, key: &K) -> Error {
        Error::unknown_key(key.label(), self.sorted_labels())
    }
}

impl<K: ClosedKeySet, T: ?Sized> KeyedRegistry<K, T> {
    /// Check that every legitimate key of the closed set is served
    pub fn ensure_complete(&self) -> Result<()> {
        self.ensure_covers(K::variants().iter().cloned())
    }
}

impl<K: RegistryKey, T: ?Sized> fmt::Debug for KeyedRegistry<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedRegistry")
            .field("keys", &self.sorted_labels())
            .field("aliases", &self.aliases.len())
            .finish()
    }
}
