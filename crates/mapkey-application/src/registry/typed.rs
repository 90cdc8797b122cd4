//! Type-keyed registries
//!
//! When the concrete variant type is the key, lookups can hand back the
//! concrete type instead of the family's trait object.

use std::any::{Any, type_name};
use std::sync::Arc;

use downcast_rs::DowncastSync;
use mapkey_domain::error::{Error, Result};
use mapkey_domain::{Provider, RegistryKey, TypeKey};

use crate::registry::binding::Binding;
use crate::registry::builder::RegistryBuilder;
use crate::registry::keyed::KeyedRegistry;

impl<B: ?Sized + DowncastSync> RegistryBuilder<TypeKey, B> {
    /// Register `provider` under the type key of `V`
    pub fn bind<V: 'static>(&mut self, provider: impl Provider<B> + 'static) -> Result<()> {
        self.register(TypeKey::of::<V>(), provider)
    }

    /// Register `provider` under the type key of `V`, also serving `aliases`
    pub fn bind_serving<V: 'static>(
        &mut self,
        aliases: impl IntoIterator<Item = TypeKey>,
        provider: impl Provider<B> + 'static,
    ) -> Result<()> {
        self.add(Binding::from_provider(TypeKey::of::<V>(), provider).with_aliases(aliases))
    }
}

impl<B: ?Sized + DowncastSync> KeyedRegistry<TypeKey, B> {
    /// Produce an instance of `V` as its concrete type
    ///
    /// # Errors
    /// - `UnknownKey` when `V` is not bound
    /// - `TypeMismatch` when the provider bound to `V` produced another type
    pub fn create_as<V: Any + Send + Sync>(&self) -> Result<Arc<V>> {
        let key = TypeKey::of::<V>();
        downcast_instance(&key, self.create(&key)?)
    }
}

/// Downcast a family instance to the concrete type `V`
pub(crate) fn downcast_instance<B, V>(key: &TypeKey, instance: Arc<B>) -> Result<Arc<V>>
where
    B: ?Sized + DowncastSync,
    V: Any + Send + Sync,
{
    instance
        .into_any_arc()
        .downcast::<V>()
        .map_err(|_| Error::type_mismatch(key.label(), type_name::<V>()))
}
