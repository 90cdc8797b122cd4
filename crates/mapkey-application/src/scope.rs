//! Instance scopes
//!
//! A registry only knows how to produce instances. An [`InstanceScope`]
//! owns the instances produced for one owner (a screen, a session, a job)
//! and hands out the same instance for a key until the scope is cleared.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use downcast_rs::DowncastSync;
use mapkey_domain::constants::DEFAULT_SCOPE_NAME;
use mapkey_domain::error::Result;
use mapkey_domain::{RegistryKey, TypeKey, Variant};
use tracing::debug;

use crate::registry::KeyedRegistry;
use crate::registry::typed::downcast_instance;

/// Per-owner cache of instances produced by a shared registry
pub struct InstanceScope<K: RegistryKey, T: ?Sized> {
    name: String,
    registry: Arc<KeyedRegistry<K, T>>,
    instances: DashMap<K, Arc<T>>,
}

impl<K: RegistryKey, T: ?Sized> InstanceScope<K, T> {
    /// Create an empty scope over `registry`
    pub fn new(name: impl Into<String>, registry: Arc<KeyedRegistry<K, T>>) -> Self {
        Self {
            name: name.into(),
            registry,
            instances: DashMap::new(),
        }
    }

    /// Create an empty scope with the default name
    pub fn unnamed(registry: Arc<KeyedRegistry<K, T>>) -> Self {
        Self::new(DEFAULT_SCOPE_NAME, registry)
    }

    /// Scope name, for diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The registry instances are produced from
    pub fn registry(&self) -> &Arc<KeyedRegistry<K, T>> {
        &self.registry
    }

    /// Instance for `key`, creating it on first request
    ///
    /// When two callers race on the first request, both receive the instance
    /// that was stored first.
    pub fn get(&self, key: &K) -> Result<Arc<T>> {
        if let Some(existing) = self.instances.get(key) {
            return Ok(Arc::clone(existing.value()));
        }

        let created = self.registry.create(key)?;
        let stored = self
            .instances
            .entry(key.clone())
            .or_insert_with(|| Arc::clone(&created))
            .value()
            .clone();
        if Arc::ptr_eq(&stored, &created) {
            debug!(scope = %self.name, key = %key, "Scoped instance created");
        } else {
            debug!(scope = %self.name, key = %key, "Scoped instance already stored, discarding duplicate");
        }
        Ok(stored)
    }

    /// Whether an instance for `key` is cached
    pub fn contains(&self, key: &K) -> bool {
        self.instances.contains_key(key)
    }

    /// Drop the cached instance for `key`
    pub fn remove(&self, key: &K) -> Option<Arc<T>> {
        self.instances.remove(key).map(|(_, instance)| instance)
    }

    /// Number of cached instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Drop every cached instance, returning how many were held
    pub fn clear(&self) -> usize {
        let count = self.instances.len();
        self.instances.clear();
        debug!(scope = %self.name, count, "Scope cleared");
        count
    }
}

impl<K: RegistryKey, T: ?Sized + Variant> InstanceScope<K, T> {
    /// Remove every cached instance and notify it through [`Variant::on_cleared`]
    ///
    /// Only instances actually removed by this call are notified. Instances
    /// are removed before being notified, so callbacks may use the scope
    /// again.
    pub fn dispose(&self) -> usize {
        let keys: Vec<K> = self
            .instances
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        let drained: Vec<Arc<T>> = keys
            .iter()
            .filter_map(|key| self.instances.remove(key))
            .map(|(_, instance)| instance)
            .collect();

        for instance in &drained {
            instance.on_cleared();
        }
        debug!(scope = %self.name, count = drained.len(), "Scope disposed");
        drained.len()
    }
}

impl<B: ?Sized + DowncastSync> InstanceScope<TypeKey, B> {
    /// Scoped instance of `V` as its concrete type
    pub fn get_as<V: Any + Send + Sync>(&self) -> Result<Arc<V>> {
        let key = TypeKey::of::<V>();
        downcast_instance(&key, self.get(&key)?)
    }
}

impl<K: RegistryKey, T: ?Sized> fmt::Debug for InstanceScope<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceScope")
            .field("name", &self.name)
            .field("cached", &self.instances.len())
            .field("registry", &self.registry)
            .finish()
    }
}
