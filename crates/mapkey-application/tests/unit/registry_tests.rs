//! Tests for the keyed registry contract
//!
//! Register, resolve and enumerate keys over a small string-producing family.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use mapkey_application::{KeyedRegistry, RegistryBuilder};
use mapkey_domain::{DuplicatePolicy, Error, Result, SharedProvider};

fn provider(value: &'static str) -> SharedProvider<str> {
    Arc::new(move || -> Result<Arc<str>> { Ok(Arc::from(value)) })
}

fn produced(registry: &KeyedRegistry<&'static str, str>, key: &'static str) -> String {
    registry.create(&key).expect("key should be registered").to_string()
}

#[test]
fn test_resolve_returns_registered_provider() {
    let a = provider("A");
    let b = provider("B");
    let mut builder = RegistryBuilder::new();
    builder.register_shared("a", a.clone()).unwrap();
    builder.register_shared("b", b.clone()).unwrap();
    let registry = builder.build();

    assert!(Arc::ptr_eq(&registry.resolve(&"a").unwrap(), &a));
    assert!(Arc::ptr_eq(&registry.resolve(&"b").unwrap(), &b));
    assert_eq!(produced(&registry, "b"), "B");
}

#[test]
fn test_scenario_three_keys() {
    let mut builder = RegistryBuilder::new();
    builder.register_shared("A", provider("provider-a")).unwrap();
    builder.register_shared("B", provider("provider-b")).unwrap();
    builder.register_shared("C", provider("provider-c")).unwrap();
    let registry = builder.build();

    assert_eq!(produced(&registry, "B"), "provider-b");
    assert!(matches!(
        registry.resolve(&"D"),
        Err(Error::UnknownKey { ref key, .. }) if key == "D"
    ));
    assert_eq!(registry.keys(), HashSet::from(["A", "B", "C"]));
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let first = provider("first");
    let mut builder = RegistryBuilder::new();
    builder.register_shared("A", first.clone()).unwrap();

    let result = builder.register_shared("A", provider("second"));

    match result {
        Err(Error::DuplicateKey { key }) => assert_eq!(key, "A"),
        other => panic!("Expected DuplicateKey, got {other:?}"),
    }
    let registry = builder.build();
    assert!(Arc::ptr_eq(&registry.resolve(&"A").unwrap(), &first));
    assert_eq!(produced(&registry, "A"), "first");
}

#[test]
fn test_replace_policy_overwrites_deterministically() {
    let mut builder = RegistryBuilder::new().with_policy(DuplicatePolicy::Replace);
    builder.register_shared("A", provider("first")).unwrap();
    builder.register_shared("A", provider("second")).unwrap();
    let registry = builder.build();

    assert_eq!(registry.len(), 1);
    assert_eq!(produced(&registry, "A"), "second");
}

#[test]
fn test_keys_matches_registered_set() {
    let labels = ["one", "two", "three", "four", "five"];
    let mut builder = RegistryBuilder::new();
    for label in labels {
        builder.register_shared(label, provider(label)).unwrap();
    }
    let registry = builder.build();

    let keys = registry.keys();
    assert_eq!(keys.len(), labels.len());
    assert_eq!(keys, labels.into_iter().collect::<HashSet<_>>());
}

#[test]
fn test_unknown_key_on_empty_registry() {
    let registry: KeyedRegistry<String, str> = RegistryBuilder::new().build();

    assert!(registry.is_empty());
    assert!(matches!(
        registry.create(&"missing".to_string()),
        Err(Error::UnknownKey { .. })
    ));
}

#[test]
fn test_blank_key_is_invalid_argument() {
    let mut builder: RegistryBuilder<String, str> = RegistryBuilder::new();
    let result = builder.register_shared("  ".to_string(), provider("blank"));

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_provider_failure_propagates() {
    let mut builder: RegistryBuilder<&'static str, str> = RegistryBuilder::new();
    builder
        .register("broken", || -> Result<Arc<str>> {
            Err(Error::invalid_argument("backing store unavailable"))
        })
        .unwrap();
    let registry = builder.build();

    match registry.create(&"broken") {
        Err(Error::Provider { key, source }) => {
            assert_eq!(key, "broken");
            assert!(source.to_string().contains("backing store unavailable"));
        }
        other => panic!("Expected Provider error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_create_invokes_provider_each_time() {
    let mut builder: RegistryBuilder<&'static str, String> = RegistryBuilder::new();
    builder
        .register("fresh", || -> Result<Arc<String>> { Ok(Arc::new("fresh".to_string())) })
        .unwrap();
    let registry = builder.build();

    let first = registry.create(&"fresh").unwrap();
    let second = registry.create(&"fresh").unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_descriptions_and_sorted_bindings() {
    let mut builder = RegistryBuilder::new();
    builder
        .add(mapkey_application::Binding::new("b", provider("B")).with_description("Second"))
        .unwrap();
    builder.register_shared("a", provider("A")).unwrap();
    let registry = builder.build();

    assert_eq!(registry.describe(&"b"), Some("Second"));
    assert_eq!(registry.describe(&"a"), Some("(no description)"));
    assert_eq!(registry.describe(&"z"), None);

    let order: Vec<&str> = registry.sorted_bindings().iter().map(|b| *b.key()).collect();
    assert_eq!(order, vec!["a", "b"]);
}

#[test]
fn test_published_registry_is_shared_across_threads() {
    let mut builder = RegistryBuilder::new();
    for label in ["north", "south", "east", "west"] {
        builder.register_shared(label, provider(label)).unwrap();
    }
    let registry = builder.build_shared();

    thread::scope(|s| {
        for label in ["north", "south", "east", "west"] {
            let registry = Arc::clone(&registry);
            s.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(&*registry.create(&label).unwrap(), label);
                }
            });
        }
    });
}
