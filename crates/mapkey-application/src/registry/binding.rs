//! Registry bindings

use std::fmt;
use std::sync::Arc;

use mapkey_domain::constants::UNDESCRIBED_BINDING;
use mapkey_domain::{Provider, RegistryKey, SharedProvider};

/// One registered variant: its key, provider and metadata
pub struct Binding<K, T: ?Sized> {
    key: K,
    provider: SharedProvider<T>,
    description: Option<String>,
    aliases: Vec<K>,
}

impl<K: RegistryKey, T: ?Sized> Binding<K, T> {
    /// Create a binding around a shared provider
    pub fn new(key: K, provider: SharedProvider<T>) -> Self {
        Self {
            key,
            provider,
            description: None,
            aliases: Vec::new(),
        }
    }

    /// Create a binding from any provider value
    pub fn from_provider<P>(key: K, provider: P) -> Self
    where
        P: Provider<T> + 'static,
    {
        Self::new(key, Arc::new(provider))
    }

    /// Set the human-readable description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare additional keys this binding serves when they have no
    /// binding of their own
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = K>) -> Self {
        self.aliases.extend(aliases);
        self
    }

    /// The key this binding is registered under
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The registered provider
    pub fn provider(&self) -> &SharedProvider<T> {
        &self.provider
    }

    /// Description, or a placeholder when none was given
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(UNDESCRIBED_BINDING)
    }

    /// Alias keys served by this binding
    pub fn aliases(&self) -> &[K] {
        &self.aliases
    }
}

impl<K: Clone, T: ?Sized> Clone for Binding<K, T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            provider: Arc::clone(&self.provider),
            description: self.description.clone(),
            aliases: self.aliases.clone(),
        }
    }
}

impl<K: fmt::Debug, T: ?Sized> fmt::Debug for Binding<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("key", &self.key)
            .field("description", &self.description)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}
