//! Composition root tests over the sample surface family

use std::collections::BTreeMap;
use std::sync::Arc;

use mapkey::AppContext;
use mapkey::domain::{ClosedKeySet, Error, RegistryKey, TypeKey};
use mapkey::infrastructure::AppConfig;
use mapkey::surfaces::{AboutSurface, HomeSurface, SettingsSurface, Surface, SurfaceKind};

fn config_with(key: &str, name: &str, value: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.settings.insert(
        key.to_string(),
        BTreeMap::from([(name.to_string(), value.to_string())]),
    );
    config
}

#[test]
fn test_default_context_binds_every_kind() {
    let context = AppContext::new(AppConfig::default()).unwrap();

    assert_eq!(context.surfaces().len(), SurfaceKind::variants().len());
    for kind in SurfaceKind::variants() {
        assert!(context.surfaces().contains(kind));
    }
    assert!(context.surfaces().ensure_complete().is_ok());
}

#[test]
fn test_surface_by_kind() {
    let context = AppContext::new(AppConfig::default()).unwrap();

    let home = context.surface(SurfaceKind::Home).unwrap();
    assert_eq!(home.title(), "Home");
    assert_eq!(home.render(), "Welcome!");

    let about = context.surface(SurfaceKind::About).unwrap();
    assert_eq!(about.render(), format!("mapkey {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_each_request_builds_new_instance() {
    let context = AppContext::new(AppConfig::default()).unwrap();

    let first = context.surface(SurfaceKind::Home).unwrap();
    let second = context.surface(SurfaceKind::Home).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_settings_reach_factories() {
    let context = AppContext::new(config_with("home", "greeting", "Hello again")).unwrap();
    assert_eq!(
        context.surface(SurfaceKind::Home).unwrap().render(),
        "Hello again!"
    );
}

#[test]
fn test_type_registry_reads_settings_by_type_path() {
    let label = TypeKey::of::<AboutSurface>().label();
    let context = AppContext::new(config_with(&label, "version_label", "nightly")).unwrap();

    let about: Arc<AboutSurface> = context.surface_as::<AboutSurface>().unwrap();
    assert_eq!(about.version(), "nightly");
    // The kind-keyed registry reads its own table
    assert_ne!(
        context.surface(SurfaceKind::About).unwrap().render(),
        "mapkey nightly"
    );
}

#[test]
fn test_surface_as_returns_concrete_type() {
    let context = AppContext::new(AppConfig::default()).unwrap();

    let settings: Arc<SettingsSurface> = context.surface_as::<SettingsSurface>().unwrap();
    assert_eq!(settings.theme(), "system");

    let home: Arc<HomeSurface> = context.surface_as::<HomeSurface>().unwrap();
    assert_eq!(home.greeting(), "Welcome");
}

#[test]
fn test_family_key_is_served_by_home() {
    let context = AppContext::new(AppConfig::default()).unwrap();

    assert!(!context.surface_types().contains(&TypeKey::of::<dyn Surface>()));
    assert!(context.surface_types().serves(&TypeKey::of::<dyn Surface>()));
    assert_eq!(context.default_surface().unwrap().title(), "Home");
}

#[test]
fn test_failing_factory_is_reported_with_key() {
    let context = AppContext::new(config_with("settings", "theme", "neon")).unwrap();

    match context.surface(SurfaceKind::Settings) {
        Err(Error::Provider { key, source }) => {
            assert_eq!(key, "settings");
            assert!(source.to_string().contains("neon"));
        }
        other => panic!("Expected Provider error, got {:?}", other.map(|s| s.render())),
    }
}

#[test]
fn test_scope_caches_until_cleared() {
    let context = AppContext::new(AppConfig::default()).unwrap();
    let scope = context.new_scope("main-window");

    let first = scope.get(&SurfaceKind::Settings).unwrap();
    let second = scope.get(&SurfaceKind::Settings).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(scope.name(), "main-window");

    assert_eq!(scope.dispose(), 1);
    let third = scope.get(&SurfaceKind::Settings).unwrap();
    assert!(!Arc::ptr_eq(&first, &third));
}

#[test]
fn test_scopes_are_independent() {
    let context = AppContext::new(AppConfig::default()).unwrap();
    let left = context.new_scope("left");
    let right = context.new_scope("right");

    let a = left.get(&SurfaceKind::Home).unwrap();
    let b = right.get(&SurfaceKind::Home).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn test_load_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mapkey.toml");
    std::fs::write(
        &path,
        r#"
        [settings.settings]
        theme = "dark"
        "#,
    )
    .unwrap();

    let context = AppContext::load(Some(path.as_path())).unwrap();
    assert_eq!(
        context.surface(SurfaceKind::Settings).unwrap().render(),
        "Theme: dark"
    );
    assert_eq!(
        context.config().settings["settings"].get("theme").map(String::as_str),
        Some("dark")
    );
}
