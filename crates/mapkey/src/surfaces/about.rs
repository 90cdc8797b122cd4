//! Version surface

use std::sync::Arc;

use linkme::distributed_slice;
use mapkey_application::{ProviderContext, ProviderEntry};
use mapkey_domain::error::Result;
use mapkey_domain::{TypeKey, Variant};

use super::{SURFACE_TYPES, SURFACES, Surface, SurfaceKind};

/// Version and build information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutSurface {
    version: String,
}

impl AboutSurface {
    /// Build from the `version_label` setting, defaulting to the crate version
    pub fn from_context(ctx: &ProviderContext) -> Self {
        Self {
            version: ctx
                .setting_or("version_label", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }

    /// Displayed version
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Variant for AboutSurface {}

impl Surface for AboutSurface {
    fn title(&self) -> &str {
        "About"
    }

    fn render(&self) -> String {
        format!("mapkey {}", self.version)
    }
}

fn about_factory(ctx: &ProviderContext) -> Result<Arc<dyn Surface>> {
    Ok(Arc::new(AboutSurface::from_context(ctx)))
}

#[distributed_slice(SURFACES)]
static ABOUT: ProviderEntry<SurfaceKind, dyn Surface> = ProviderEntry {
    key: || SurfaceKind::About,
    aliases: &[],
    description: "Version and build information",
    factory: about_factory,
};

#[distributed_slice(SURFACE_TYPES)]
static ABOUT_TYPE: ProviderEntry<TypeKey, dyn Surface> = ProviderEntry {
    key: TypeKey::of::<AboutSurface>,
    aliases: &[],
    description: "Version and build information",
    factory: about_factory,
};
