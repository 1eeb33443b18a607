use fibre_scope::{resolve, Factory, Registry};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A scoped service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

// Shared by every factory built over the registry.
struct AppInfo {
  name: &'static str,
}

// A global, thread-safe counter to generate unique IDs.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn main() {
  let mut registry = Registry::new();

  // --- Singleton Registration ---
  // Built up front and handed to the registry.
  registry.register_singleton_instance(Arc::new(AppInfo { name: "fibre" }));

  // --- Scoped Registration ---
  // This recipe runs ONCE per factory.
  registry.register_scoped(|_| {
    println!("Creating SCOPED RequestTracker...");
    Ok(RequestTracker {
      id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
    })
  });

  let root = Factory::new([registry]);
  let child = root.create_child_factory();

  println!("--- Resolving Singletons ---");
  let s1 = resolve!(root, AppInfo);
  let s2 = resolve!(child, AppInfo);
  println!("Root sees '{}', child sees '{}'", s1.name, s2.name);
  assert!(
    Arc::ptr_eq(&s1, &s2),
    "Singleton instances should be identical"
  );
  println!("Singleton instances are the same pointer, as expected.\n");

  println!("--- Resolving Scoped Instances ---");
  let r1 = resolve!(root, RequestTracker);
  let r2 = resolve!(root, RequestTracker);
  let c1 = resolve!(child, RequestTracker);
  println!("Root IDs: {} and {}, child ID: {}", r1.id, r2.id, c1.id);
  assert_eq!(r1.id, 0);
  assert_eq!(c1.id, 1);
  assert!(Arc::ptr_eq(&r1, &r2), "One instance per factory");
  assert!(!Arc::ptr_eq(&r1, &c1), "Each factory builds its own");
  println!("Scoped instances are shared within a factory and distinct across factories.");
}
