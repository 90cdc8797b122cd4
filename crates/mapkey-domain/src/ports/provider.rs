//! Provider port
//!
//! A provider is an opaque factory for one variant. The registry keeps the
//! provider; whoever calls it owns the produced instance.

use std::sync::Arc;

use crate::error::Result;

/// Factory capable of producing instances of `T`
pub trait Provider<T: ?Sized>: Send + Sync {
    /// Produce an instance
    fn provide(&self) -> Result<Arc<T>>;
}

impl<T, F> Provider<T> for F
where
    T: ?Sized,
    F: Fn() -> Result<Arc<T>> + Send + Sync,
{
    fn provide(&self) -> Result<Arc<T>> {
        self()
    }
}

/// Shared handle to a provider, as stored by registries
pub type SharedProvider<T> = Arc<dyn Provider<T>>;
