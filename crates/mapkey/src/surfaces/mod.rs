//! Sample family: application surfaces
//!
//! Each surface registers itself twice: under its [`SurfaceKind`] in
//! [`SURFACES`], and under its own type in [`SURFACE_TYPES`] so callers can
//! ask for the concrete type.

mod about;
mod home;
mod settings;

use std::fmt;
use std::str::FromStr;

use linkme::distributed_slice;
use mapkey_application::ProviderEntry;
use mapkey_domain::error::Error;
use mapkey_domain::{ClosedKeySet, RegistryKey, TypeKey, Variant};

pub use about::AboutSurface;
pub use home::HomeSurface;
pub use settings::SettingsSurface;

/// A screen of the application
pub trait Surface: Variant {
    /// Short heading
    fn title(&self) -> &str;

    /// Rendered body text
    fn render(&self) -> String;
}

/// Keys of the surface family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SurfaceKind {
    /// Landing surface
    Home,
    /// Preferences surface
    Settings,
    /// Version and build information
    About,
}

impl SurfaceKind {
    /// Lowercase name used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Settings => "settings",
            Self::About => "about",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SurfaceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::variants()
            .iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                Error::unknown_key(
                    s,
                    Self::variants().iter().map(RegistryKey::label).collect(),
                )
            })
    }
}

impl RegistryKey for SurfaceKind {}

impl ClosedKeySet for SurfaceKind {
    fn variants() -> &'static [Self] {
        &[Self::Home, Self::Settings, Self::About]
    }
}

/// Surfaces keyed by kind
#[distributed_slice]
pub static SURFACES: [ProviderEntry<SurfaceKind, dyn Surface>] = [..];

/// Surfaces keyed by their concrete type
#[distributed_slice]
pub static SURFACE_TYPES: [ProviderEntry<TypeKey, dyn Surface>] = [..];
