//! Composition root helpers

use std::sync::Arc;

use mapkey_application::{KeyedRegistry, ProviderEntry, RegistryBuilder};
use mapkey_domain::error::Result;
use mapkey_domain::{ClosedKeySet, RegistryKey};
use tracing::{error, info};

use crate::config::AppConfig;

/// Compose the registry of `family` from its entries
///
/// The duplicate policy and per-key settings come from `config`.
///
/// # Errors
/// - `DuplicateKey` when two entries share a key under the reject policy
/// - `InvalidArgument` when an entry carries an invalid key or alias
pub fn compose_registry<K, T>(
    family: &str,
    entries: &[ProviderEntry<K, T>],
    config: &AppConfig,
) -> Result<Arc<KeyedRegistry<K, T>>>
where
    K: RegistryKey,
    T: ?Sized + 'static,
{
    let mut builder = RegistryBuilder::new().with_policy(config.registry.duplicate_policy);
    if let Err(err) = builder.register_entries(entries, &config.settings) {
        error!(family, error = %err, "Registry composition failed");
        return Err(err);
    }

    let registry = builder.build_shared();
    info!(family, bindings = registry.len(), "Registry composed");
    Ok(registry)
}

/// Compose the registry of a closed key family
///
/// Behaves like [`compose_registry`], then checks that every key of the set
/// is served when `registry.require_complete` is enabled.
///
/// # Errors
/// - `IncompleteRegistry` listing the unserved keys
pub fn compose_closed_registry<K, T>(
    family: &str,
    entries: &[ProviderEntry<K, T>],
    config: &AppConfig,
) -> Result<Arc<KeyedRegistry<K, T>>>
where
    K: ClosedKeySet,
    T: ?Sized + 'static,
{
    let registry = compose_registry(family, entries, config)?;
    if config.registry.require_complete {
        if let Err(err) = registry.ensure_complete() {
            error!(family, error = %err, "Closed key set is not fully bound");
            return Err(err);
        }
    }
    Ok(registry)
}
