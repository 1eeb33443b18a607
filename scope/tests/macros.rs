// scope/tests/macros.rs

//! Tests specifically for the resolution macros.
//! This file verifies the behavior of `resolve!` and `maybe_resolve!`
//! against `Factory`, `LocalFactory` and the resolvers handed to recipes.

use fibre_scope::{maybe_resolve, resolve, Factory, LocalFactory, LocalRegistry, Registry};
use std::rc::Rc;
use std::sync::Arc;

// --- Test Fixtures ---

// Service for thread-safe factory tests
struct MacroTestService {
  value: i32,
}
trait MacroTestTrait: Send + Sync {
  fn value(&self) -> i32;
}
impl MacroTestTrait for MacroTestService {
  fn value(&self) -> i32 {
    self.value
  }
}
struct UnregisteredService;
trait UnregisteredTrait: Send + Sync {}

// Service for single-threaded factory tests (doesn't need Send + Sync)
struct LocalTestService {
  value: i32,
}
trait LocalTestTrait {
  fn value(&self) -> i32;
}
impl LocalTestTrait for LocalTestService {
  fn value(&self) -> i32 {
    self.value
  }
}
struct LocalUnregisteredService;

struct Wrapper {
  inner: Arc<MacroTestService>,
}

fn factory() -> Factory {
  let mut registry = Registry::new();
  registry.register_scoped(|_| Ok(MacroTestService { value: 42 }));
  registry.register_singleton_instance::<dyn MacroTestTrait>(Arc::new(MacroTestService { value: 44 }));
  registry.register_scoped(|r| {
    Ok(Wrapper {
      inner: resolve!(r, MacroTestService),
    })
  });
  Factory::from(registry)
}

fn local_factory() -> LocalFactory {
  let mut registry = LocalRegistry::new();
  registry.register_scoped(|_| Ok(LocalTestService { value: 7 }));
  registry.register_scoped_trait::<dyn LocalTestTrait>(|_| Ok(Rc::new(LocalTestService { value: 8 })));
  LocalFactory::from(registry)
}

// --- Factory Macro Tests ---

#[test]
fn test_resolve_from_factory() {
  let factory = factory();

  assert_eq!(resolve!(factory, MacroTestService).value, 42);
  assert_eq!(resolve!(factory, trait MacroTestTrait).value(), 44);
}

#[test]
fn test_resolve_inside_recipe_uses_the_same_scope() {
  let factory = factory();

  let wrapper = resolve!(factory, Wrapper);
  assert!(Arc::ptr_eq(&wrapper.inner, &resolve!(factory, MacroTestService)));
}

#[test]
fn test_maybe_resolve_from_factory() {
  let factory = factory();

  assert_eq!(maybe_resolve!(factory, MacroTestService).unwrap().value, 42);
  assert_eq!(maybe_resolve!(factory, trait MacroTestTrait).unwrap().value(), 44);
  assert!(maybe_resolve!(factory, UnregisteredService).is_none());
  assert!(maybe_resolve!(factory, trait UnregisteredTrait).is_none());
}

#[test]
#[should_panic(expected = "Failed to resolve required service: Cannot resolve type")]
fn test_resolve_panics_on_missing_service() {
  let factory = factory();
  resolve!(factory, UnregisteredService);
}

#[test]
#[should_panic(expected = "Failed to resolve required service")]
fn test_resolve_panics_on_missing_trait_service() {
  let factory = factory();
  resolve!(factory, trait UnregisteredTrait);
}

// --- LocalFactory Macro Tests ---

#[test]
fn test_resolve_from_local_factory() {
  let factory = local_factory();

  assert_eq!(resolve!(factory, LocalTestService).value, 7);
  assert_eq!(resolve!(factory, trait LocalTestTrait).value(), 8);
  assert!(maybe_resolve!(factory, LocalUnregisteredService).is_none());
}

#[test]
#[should_panic(expected = "Failed to resolve required service")]
fn test_resolve_panics_on_missing_local_service() {
  let factory = local_factory();
  resolve!(factory, LocalUnregisteredService);
}
