//! Preferences surface

use std::sync::Arc;

use linkme::distributed_slice;
use mapkey_application::{ProviderContext, ProviderEntry};
use mapkey_domain::error::{Error, Result};
use mapkey_domain::{TypeKey, Variant};
use tracing::debug;

use super::{SURFACE_TYPES, SURFACES, Surface, SurfaceKind};

const THEMES: &[&str] = &["light", "dark", "system"];

/// Preferences surface showing the active theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSurface {
    theme: String,
}

impl SettingsSurface {
    /// Build from the `theme` setting, which must name a known theme
    pub fn from_context(ctx: &ProviderContext) -> Result<Self> {
        let theme = ctx.setting_or("theme", "system");
        if !THEMES.contains(&theme) {
            return Err(Error::invalid_argument(format!(
                "Unknown theme '{theme}'. Available themes: {}",
                THEMES.join(", ")
            )));
        }
        Ok(Self {
            theme: theme.to_string(),
        })
    }

    /// Active theme
    pub fn theme(&self) -> &str {
        &self.theme
    }
}

impl Variant for SettingsSurface {
    fn on_cleared(&self) {
        debug!(theme = %self.theme, "Settings surface released");
    }
}

impl Surface for SettingsSurface {
    fn title(&self) -> &str {
        "Settings"
    }

    fn render(&self) -> String {
        format!("Theme: {}", self.theme)
    }
}

fn settings_factory(ctx: &ProviderContext) -> Result<Arc<dyn Surface>> {
    Ok(Arc::new(SettingsSurface::from_context(ctx)?))
}

#[distributed_slice(SURFACES)]
static SETTINGS: ProviderEntry<SurfaceKind, dyn Surface> = ProviderEntry {
    key: || SurfaceKind::Settings,
    aliases: &[],
    description: "Preferences surface",
    factory: settings_factory,
};

#[distributed_slice(SURFACE_TYPES)]
static SETTINGS_TYPE: ProviderEntry<TypeKey, dyn Surface> = ProviderEntry {
    key: TypeKey::of::<SettingsSurface>,
    aliases: &[],
    description: "Preferences surface",
    factory: settings_factory,
};
