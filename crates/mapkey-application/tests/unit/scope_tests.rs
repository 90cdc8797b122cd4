//! Tests for instance scopes over a shared registry

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::fmt;
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

use mapkey_application::{InstanceScope, KeyedRegistry};
use mapkey_domain::{Result, TypeKey, Variant};
use tracing::field::{Field, Visit};
use tracing::{Dispatch, Event, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

trait Counter: Variant {
    fn id(&self) -> usize;
}

struct Clicks {
    id: usize,
    cleared: Arc<AtomicUsize>,
}

struct Visits {
    id: usize,
}

impl Variant for Clicks {
    fn on_cleared(&self) {
        self.cleared.fetch_add(1, Ordering::SeqCst);
    }
}

impl Variant for Visits {}

impl Counter for Clicks {
    fn id(&self) -> usize {
        self.id
    }
}

impl Counter for Visits {
    fn id(&self) -> usize {
        self.id
    }
}

struct Fixture {
    registry: Arc<KeyedRegistry<TypeKey, dyn Counter>>,
    created: Arc<AtomicUsize>,
    cleared: Arc<AtomicUsize>,
}

fn fixture() -> Fixture {
    let created = Arc::new(AtomicUsize::new(0));
    let cleared = Arc::new(AtomicUsize::new(0));

    let mut builder = KeyedRegistry::<TypeKey, dyn Counter>::builder();
    {
        let created = Arc::clone(&created);
        let cleared = Arc::clone(&cleared);
        builder
            .bind::<Clicks>(move || -> Result<Arc<dyn Counter>> {
                Ok(Arc::new(Clicks {
                    id: created.fetch_add(1, Ordering::SeqCst),
                    cleared: Arc::clone(&cleared),
                }))
            })
            .unwrap();
    }
    {
        let created = Arc::clone(&created);
        builder
            .bind::<Visits>(move || -> Result<Arc<dyn Counter>> {
                Ok(Arc::new(Visits {
                    id: created.fetch_add(1, Ordering::SeqCst),
                }))
            })
            .unwrap();
    }

    Fixture {
        registry: builder.build_shared(),
        created,
        cleared,
    }
}

#[test]
fn test_scope_returns_same_instance_per_key() {
    let fixture = fixture();
    let scope = InstanceScope::new("dashboard", Arc::clone(&fixture.registry));

    let first = scope.get_as::<Clicks>().unwrap();
    let second = scope.get_as::<Clicks>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(fixture.created.load(Ordering::SeqCst), 1);
}

#[test]
fn test_separate_scopes_hold_separate_instances() {
    let fixture = fixture();
    let left = InstanceScope::new("left", Arc::clone(&fixture.registry));
    let right = InstanceScope::new("right", Arc::clone(&fixture.registry));

    let a = left.get(&TypeKey::of::<Visits>()).unwrap();
    let b = right.get(&TypeKey::of::<Visits>()).unwrap();

    assert_ne!(a.id(), b.id());
    assert_eq!(left.len(), 1);
    assert_eq!(right.len(), 1);
}

#[test]
fn test_dispose_notifies_and_empties() {
    let fixture = fixture();
    let scope = InstanceScope::new("session", Arc::clone(&fixture.registry));

    scope.get_as::<Clicks>().unwrap();
    scope.get_as::<Visits>().unwrap();

    assert_eq!(scope.dispose(), 2);
    assert!(scope.is_empty());
    assert_eq!(fixture.cleared.load(Ordering::SeqCst), 1);
}

#[test]
fn test_clear_does_not_notify() {
    let fixture = fixture();
    let scope = InstanceScope::new("session", Arc::clone(&fixture.registry));

    scope.get_as::<Clicks>().unwrap();
    assert_eq!(scope.clear(), 1);
    assert_eq!(fixture.cleared.load(Ordering::SeqCst), 0);
}

#[test]
fn test_concurrent_first_requests_share_one_instance() {
    let fixture = fixture();
    let scope = InstanceScope::new("shared", Arc::clone(&fixture.registry));

    let ids: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| scope.get_as::<Visits>().unwrap().id()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(scope.len(), 1);
}

#[test]
fn test_unknown_type_is_reported() {
    struct Unbound;
    let fixture = fixture();
    let scope = InstanceScope::unnamed(Arc::clone(&fixture.registry));

    assert!(scope.get(&TypeKey::of::<Unbound>()).is_err());
    assert!(scope.is_empty());
}

struct Tracked {
    id: usize,
    notified: Arc<Mutex<HashSet<usize>>>,
}

impl Variant for Tracked {
    fn on_cleared(&self) {
        self.notified.lock().unwrap().insert(self.id);
    }
}

impl Counter for Tracked {
    fn id(&self) -> usize {
        self.id
    }
}

#[test]
fn test_dispose_during_gets_notifies_every_handed_out_instance() {
    let created = Arc::new(AtomicUsize::new(0));
    let notified = Arc::new(Mutex::new(HashSet::new()));

    let mut builder = KeyedRegistry::<TypeKey, dyn Counter>::builder();
    {
        let notified = Arc::clone(&notified);
        builder
            .bind::<Tracked>(move || -> Result<Arc<dyn Counter>> {
                Ok(Arc::new(Tracked {
                    id: created.fetch_add(1, Ordering::SeqCst),
                    notified: Arc::clone(&notified),
                }))
            })
            .unwrap();
    }
    let scope = InstanceScope::new("racing", builder.build_shared());
    let stop = AtomicBool::new(false);

    let handed_out: HashSet<usize> = thread::scope(|s| {
        let getter = s.spawn(|| {
            let mut seen = HashSet::new();
            while !stop.load(Ordering::SeqCst) {
                seen.insert(scope.get_as::<Tracked>().unwrap().id());
            }
            seen
        });
        for _ in 0..1_000 {
            scope.dispose();
        }
        stop.store(true, Ordering::SeqCst);
        getter.join().unwrap()
    });

    // Each instance a caller received was either notified or is still cached
    let mut accounted = notified.lock().unwrap().clone();
    if let Some(cached) = scope.remove(&TypeKey::of::<Tracked>()) {
        accounted.insert(cached.id());
    }
    assert!(handed_out.is_subset(&accounted));
}

#[test]
fn test_get_after_dispose_creates_fresh_instance() {
    let fixture = fixture();
    let scope = InstanceScope::new("session", Arc::clone(&fixture.registry));

    scope.get_as::<Visits>().unwrap();
    assert_eq!(scope.dispose(), 1);
    scope.get_as::<Visits>().unwrap();

    assert_eq!(scope.len(), 1);
    assert_eq!(fixture.created.load(Ordering::SeqCst), 2);
}

/// Counts events whose message matches exactly
struct MessageCounter {
    message: &'static str,
    count: Arc<AtomicUsize>,
}

struct MessageField(String);

impl Visit for MessageField {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for MessageCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut field = MessageField(String::new());
        event.record(&mut field);
        if field.0 == self.message {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn test_racing_first_requests_log_one_creation() {
    let fixture = fixture();
    let scope = InstanceScope::new("shared", Arc::clone(&fixture.registry));
    let created_logs = Arc::new(AtomicUsize::new(0));
    let dispatch = Dispatch::new(Registry::default().with(MessageCounter {
        message: "Scoped instance created",
        count: Arc::clone(&created_logs),
    }));
    let barrier = Barrier::new(8);

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                tracing::dispatcher::with_default(&dispatch, || {
                    barrier.wait();
                    scope.get_as::<Visits>().unwrap();
                });
            });
        }
    });

    assert_eq!(scope.len(), 1);
    assert_eq!(created_logs.load(Ordering::SeqCst), 1);
}
