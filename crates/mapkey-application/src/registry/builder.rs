//! Registry builder
//!
//! The only mutable stage of a registry. Bindings are added during
//! composition; `build()` consumes the builder and yields the read-only
//! [`KeyedRegistry`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use mapkey_domain::error::{Error, Result};
use mapkey_domain::{DuplicatePolicy, Provider, RegistryKey, SharedProvider};
use tracing::{debug, info, warn};

use crate::registry::binding::Binding;
use crate::registry::entry::{ProviderEntry, SettingsTable};
use crate::registry::keyed::KeyedRegistry;

/// Composition-time builder for a [`KeyedRegistry`]
pub struct RegistryBuilder<K, T: ?Sized> {
    policy: DuplicatePolicy,
    bindings: HashMap<K, Binding<K, T>>,
}

impl<K: RegistryKey, T: ?Sized> RegistryBuilder<K, T> {
    /// Create an empty builder rejecting duplicate keys
    pub fn new() -> Self {
        Self {
            policy: DuplicatePolicy::default(),
            bindings: HashMap::new(),
        }
    }

    /// Set the duplicate registration policy
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active duplicate registration policy
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register a provider under `key`
    ///
    /// # Errors
    /// - `InvalidArgument` if the key fails validation
    /// - `DuplicateKey` if the key is already bound and the policy is `Reject`;
    ///   the first registration stays intact
    pub fn register<P>(&mut self, key: K, provider: P) -> Result<()>
    where
        P: Provider<T> + 'static,
    {
        self.add(Binding::from_provider(key, provider))
    }

    /// Register an already shared provider under `key`
    pub fn register_shared(&mut self, key: K, provider: SharedProvider<T>) -> Result<()> {
        self.add(Binding::new(key, provider))
    }

    /// Register a fully described binding
    pub fn add(&mut self, binding: Binding<K, T>) -> Result<()> {
        validate_binding(&binding)?;

        match self.bindings.entry(binding.key().clone()) {
            Entry::Occupied(mut occupied) => match self.policy {
                DuplicatePolicy::Reject => Err(Error::duplicate_key(binding.key().label())),
                DuplicatePolicy::Replace => {
                    warn!(
                        key = %binding.key(),
                        previous = occupied.get().description(),
                        "Replacing existing binding"
                    );
                    occupied.insert(binding);
                    Ok(())
                }
            },
            Entry::Vacant(vacant) => {
                debug!(key = %binding.key(), "Registered binding");
                vacant.insert(binding);
                Ok(())
            }
        }
    }

    /// Register every declarative entry of a family
    ///
    /// Each entry's factory is bound to a [`ProviderContext`] carrying the
    /// settings configured for its key label. Stops at the first failing
    /// entry.
    ///
    /// [`ProviderContext`]: crate::registry::entry::ProviderContext
    pub fn register_entries(
        &mut self,
        entries: &[ProviderEntry<K, T>],
        settings: &SettingsTable,
    ) -> Result<usize>
    where
        T: 'static,
    {
        for entry in entries {
            self.add(entry.to_binding(settings))?;
        }
        Ok(entries.len())
    }

    /// Whether `key` already has a binding
    pub fn contains(&self, key: &K) -> bool {
        self.bindings.contains_key(key)
    }

    /// Number of bindings added so far
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no binding was added yet
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Finish composition
    pub fn build(self) -> KeyedRegistry<K, T> {
        info!(bindings = self.bindings.len(), policy = %self.policy, "Built keyed registry");
        KeyedRegistry::from_bindings(self.bindings)
    }

    /// Finish composition and publish the registry for shared readers
    pub fn build_shared(self) -> Arc<KeyedRegistry<K, T>> {
        Arc::new(self.build())
    }
}

impl<K: RegistryKey, T: ?Sized> Default for RegistryBuilder<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_binding<K: RegistryKey, T: ?Sized>(binding: &Binding<K, T>) -> Result<()> {
    let key = binding.key();
    key.validate()
        .map_err(|reason| Error::invalid_argument(format!("invalid key '{key}': {reason}")))?;

    for alias in binding.aliases() {
        alias.validate().map_err(|reason| {
            Error::invalid_argument(format!("invalid alias '{alias}' of '{key}': {reason}"))
        })?;
        if alias == key {
            return Err(Error::invalid_argument(format!(
                "binding '{key}' lists itself as an alias"
            )));
        }
    }
    Ok(())
}
