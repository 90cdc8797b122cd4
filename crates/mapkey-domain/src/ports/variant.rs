//! Scoped variant port

use downcast_rs::{DowncastSync, impl_downcast};

/// Instance of a family member that an instance scope can hold
///
/// Family base traits extend `Variant` so that type-keyed lookups can
/// downcast shared instances back to their concrete type.
pub trait Variant: DowncastSync {
    /// Called once when the owning scope is disposed
    fn on_cleared(&self) {}
}

impl_downcast!(sync Variant);
