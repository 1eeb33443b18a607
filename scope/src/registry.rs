//! The `Registry`: where singletons and scoped recipes are declared.

use crate::core::{erase, Instance, TypeKey};
use crate::error::Result;
use crate::resolver::Resolver;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

pub(crate) type Recipe = Box<dyn Fn(&dyn Resolver) -> Result<Instance> + Send + Sync>;

/// A set of registrations.
///
/// Each type has at most one singleton slot and one recipe slot per registry;
/// registering again replaces the previous entry. Registries are handed to
/// [`Factory::new`](crate::Factory::new) once filled and are immutable from
/// then on.
#[derive(Default)]
pub struct Registry {
  singletons: HashMap<TypeKey, Instance>,
  recipes: HashMap<TypeKey, Recipe>,
}

impl Registry {
  /// Creates a new, empty `Registry`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- Singleton Registration ---

  /// Registers a pre-built instance shared by every factory built over this
  /// registry.
  ///
  /// `T` may be a trait object: `register_singleton_instance::<dyn Greeter>(Arc::new(English))`.
  pub fn register_singleton_instance<T: ?Sized + Any + Send + Sync>(&mut self, instance: Arc<T>) {
    self.singletons.insert(TypeKey::of::<T>(), erase(instance));
  }

  // --- Scoped Registration ---

  /// Registers a recipe building one `T` per factory.
  ///
  /// The recipe runs lazily, at most once per factory, and receives that
  /// factory as a [`Resolver`] for its own dependencies.
  pub fn register_scoped<T: Any + Send + Sync>(
    &mut self,
    recipe: impl Fn(&dyn Resolver) -> Result<T> + Send + Sync + 'static,
  ) {
    let erased: Recipe =
      Box::new(move |resolver: &dyn Resolver| recipe(resolver).map(|value| erase(Arc::new(value))));
    self.recipes.insert(TypeKey::of::<T>(), erased);
  }

  /// Registers a recipe for a trait object (or any other unsized type).
  pub fn register_scoped_trait<I: ?Sized + Any + Send + Sync>(
    &mut self,
    recipe: impl Fn(&dyn Resolver) -> Result<Arc<I>> + Send + Sync + 'static,
  ) {
    let erased: Recipe = Box::new(move |resolver: &dyn Resolver| recipe(resolver).map(erase::<I>));
    self.recipes.insert(TypeKey::of::<I>(), erased);
  }

  // --- Lookup ---

  pub(crate) fn find_recipe(&self, key: &TypeKey) -> Option<&Recipe> {
    self.recipes.get(key)
  }

  pub(crate) fn find_singleton(&self, key: &TypeKey) -> Option<&Instance> {
    self.singletons.get(key)
  }

  pub fn contains_recipe<T: ?Sized + Any>(&self) -> bool {
    self.recipes.contains_key(&TypeKey::of::<T>())
  }

  pub fn contains_singleton<T: ?Sized + Any>(&self) -> bool {
    self.singletons.contains_key(&TypeKey::of::<T>())
  }

  /// Number of registrations across both slots.
  pub fn len(&self) -> usize {
    self.singletons.len() + self.recipes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.singletons.is_empty() && self.recipes.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::downcast;

  struct Config(u32);

  #[test]
  fn registration_overwrites_previous_entry() {
    let mut registry = Registry::new();
    registry.register_singleton_instance(Arc::new(Config(1)));
    let second = Arc::new(Config(2));
    registry.register_singleton_instance(Arc::clone(&second));

    let key = TypeKey::of::<Config>();
    let found = downcast::<Config>(key, registry.find_singleton(&key).unwrap()).unwrap();
    assert!(Arc::ptr_eq(&found, &second));
    assert_eq!(registry.len(), 1);
  }

  #[test]
  fn singleton_and_recipe_slots_are_independent() {
    let mut registry = Registry::new();
    assert!(registry.is_empty());

    registry.register_singleton_instance(Arc::new(Config(1)));
    registry.register_scoped(|_| Ok(Config(2)));

    assert!(registry.contains_singleton::<Config>());
    assert!(registry.contains_recipe::<Config>());
    assert!(!registry.contains_recipe::<String>());
    assert!(registry.find_recipe(&TypeKey::of::<String>()).is_none());
    assert!(registry.find_singleton(&TypeKey::of::<String>()).is_none());
    assert_eq!(registry.len(), 2);
  }
}
