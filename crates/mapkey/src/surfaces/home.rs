//! Landing surface

use std::sync::Arc;

use linkme::distributed_slice;
use mapkey_application::{ProviderContext, ProviderEntry};
use mapkey_domain::error::Result;
use mapkey_domain::{TypeKey, Variant};

use super::{SURFACE_TYPES, SURFACES, Surface, SurfaceKind};

const DEFAULT_GREETING: &str = "Welcome";

/// Landing surface greeting the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSurface {
    greeting: String,
}

impl HomeSurface {
    /// Build from the `greeting` setting
    pub fn from_context(ctx: &ProviderContext) -> Self {
        Self {
            greeting: ctx.setting_or("greeting", DEFAULT_GREETING).to_string(),
        }
    }

    /// Configured greeting
    pub fn greeting(&self) -> &str {
        &self.greeting
    }
}

impl Variant for HomeSurface {}

impl Surface for HomeSurface {
    fn title(&self) -> &str {
        "Home"
    }

    fn render(&self) -> String {
        format!("{}!", self.greeting)
    }
}

fn home_factory(ctx: &ProviderContext) -> Result<Arc<dyn Surface>> {
    Ok(Arc::new(HomeSurface::from_context(ctx)))
}

#[distributed_slice(SURFACES)]
static HOME: ProviderEntry<SurfaceKind, dyn Surface> = ProviderEntry {
    key: || SurfaceKind::Home,
    aliases: &[],
    description: "Landing surface",
    factory: home_factory,
};

// Also serves requests for the family itself, as the default surface
#[distributed_slice(SURFACE_TYPES)]
static HOME_TYPE: ProviderEntry<TypeKey, dyn Surface> = ProviderEntry {
    key: TypeKey::of::<HomeSurface>,
    aliases: &[TypeKey::of::<dyn Surface>],
    description: "Landing surface",
    factory: home_factory,
};
