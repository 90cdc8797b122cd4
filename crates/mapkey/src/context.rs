//! Composition root for the surface family
//!
//! Loads configuration, composes both surface registries once, and hands
//! out lookups and scopes over them.
//!
//! ```text
//! ConfigLoader → AppConfig ─┬─→ SURFACES      → KeyedRegistry<SurfaceKind>
//!                           └─→ SURFACE_TYPES → KeyedRegistry<TypeKey>
//! ```
//!
//! Settings are looked up by key label. The kind-keyed registry reads
//! `[settings.home]`; the type-keyed one reads the table named after the full
//! type path, e.g. `[settings."mapkey::surfaces::home::HomeSurface"]`.

use std::path::Path;
use std::sync::Arc;

use mapkey_application::{InstanceScope, KeyedRegistry};
use mapkey_domain::TypeKey;
use mapkey_domain::error::Result;
use mapkey_infrastructure::config::{AppConfig, ConfigLoader};
use mapkey_infrastructure::{compose_closed_registry, compose_registry};
use tracing::info;

use crate::surfaces::{SURFACE_TYPES, SURFACES, Surface, SurfaceKind};

/// Surface registries composed from configuration
pub struct AppContext {
    /// Application configuration
    config: Arc<AppConfig>,
    surfaces: Arc<KeyedRegistry<SurfaceKind, dyn Surface>>,
    surface_types: Arc<KeyedRegistry<TypeKey, dyn Surface>>,
}

impl AppContext {
    /// Compose the surface registries for `config`
    ///
    /// # Errors
    /// - `IncompleteRegistry` when a surface kind is unbound and
    ///   `registry.require_complete` is set
    /// - `DuplicateKey` when two surfaces claim a key under the reject policy
    pub fn new(config: AppConfig) -> Result<Self> {
        let surfaces = compose_closed_registry("surfaces", &SURFACES, &config)?;
        let surface_types = compose_registry("surface_types", &SURFACE_TYPES, &config)?;
        info!(
            surfaces = surfaces.len(),
            surface_types = surface_types.len(),
            "Application context ready"
        );

        Ok(Self {
            config: Arc::new(config),
            surfaces,
            surface_types,
        })
    }

    /// Load configuration (from `config_path` when given) and compose
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = config_path {
            loader = loader.with_config_path(path);
        }
        Self::new(loader.load()?)
    }

    /// Loaded configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Registry of surfaces keyed by kind
    pub fn surfaces(&self) -> &Arc<KeyedRegistry<SurfaceKind, dyn Surface>> {
        &self.surfaces
    }

    /// Registry of surfaces keyed by concrete type
    pub fn surface_types(&self) -> &Arc<KeyedRegistry<TypeKey, dyn Surface>> {
        &self.surface_types
    }

    /// New instance of the surface bound to `kind`
    pub fn surface(&self, kind: SurfaceKind) -> Result<Arc<dyn Surface>> {
        self.surfaces.create(&kind)
    }

    /// New instance of the surface type `V`
    pub fn surface_as<V: Surface>(&self) -> Result<Arc<V>> {
        self.surface_types.create_as::<V>()
    }

    /// New instance of whichever surface serves the family as a whole
    pub fn default_surface(&self) -> Result<Arc<dyn Surface>> {
        self.surface_types.create(&TypeKey::of::<dyn Surface>())
    }

    /// Fresh scope caching surfaces for one owner
    pub fn new_scope(&self, name: impl Into<String>) -> InstanceScope<SurfaceKind, dyn Surface> {
        InstanceScope::new(name, Arc::clone(&self.surfaces))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("surfaces", &self.surfaces)
            .field("surface_types", &self.surface_types)
            .finish()
    }
}
