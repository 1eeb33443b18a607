//! A single-threaded, non-thread-safe flavour of the registry and factory.

use crate::core::TypeKey;
use crate::error::{ResolveError, Result};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, trace};

// The local counterpart of `core::Instance`: always an `Rc<T>` behind the erasure.
type LocalInstance = Rc<dyn Any>;

type LocalRecipe = Box<dyn Fn(&dyn LocalResolver) -> Result<LocalInstance>>;

fn erase<T: ?Sized + Any>(instance: Rc<T>) -> LocalInstance {
  Rc::new(instance)
}

fn downcast<T: ?Sized + Any>(key: TypeKey, instance: &LocalInstance) -> Result<Rc<T>> {
  (**instance)
    .downcast_ref::<Rc<T>>()
    .cloned()
    .ok_or(ResolveError::TypeMismatch { key })
}

/// The lookup-only view of a [`LocalFactory`] handed to local recipes.
pub trait LocalResolver {
  /// Resolves the erased instance stored for `key`. The value must wrap an
  /// `Rc<T>` for the `T` that `key` was built from.
  fn resolve_erased(&self, key: TypeKey) -> Result<Rc<dyn Any>>;
}

impl<'a> dyn LocalResolver + 'a {
  /// Resolves an instance of `T`.
  pub fn get<T: ?Sized + Any>(&self) -> Result<Rc<T>> {
    let key = TypeKey::of::<T>();
    let instance = self.resolve_erased(key)?;
    downcast(key, &instance)
  }
}

/// A single-threaded [`Registry`](crate::Registry).
///
/// Instances are held in `Rc`, so services that are neither `Send` nor `Sync`
/// can be registered.
#[derive(Default)]
pub struct LocalRegistry {
  singletons: HashMap<TypeKey, LocalInstance>,
  recipes: HashMap<TypeKey, LocalRecipe>,
}

impl LocalRegistry {
  /// Creates a new, empty `LocalRegistry`.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register_singleton_instance<T: ?Sized + Any>(&mut self, instance: Rc<T>) {
    self.singletons.insert(TypeKey::of::<T>(), erase(instance));
  }

  pub fn register_scoped<T: Any>(
    &mut self,
    recipe: impl Fn(&dyn LocalResolver) -> Result<T> + 'static,
  ) {
    let erased: LocalRecipe =
      Box::new(move |resolver: &dyn LocalResolver| recipe(resolver).map(|value| erase(Rc::new(value))));
    self.recipes.insert(TypeKey::of::<T>(), erased);
  }

  pub fn register_scoped_trait<I: ?Sized + Any>(
    &mut self,
    recipe: impl Fn(&dyn LocalResolver) -> Result<Rc<I>> + 'static,
  ) {
    let erased: LocalRecipe =
      Box::new(move |resolver: &dyn LocalResolver| recipe(resolver).map(erase::<I>));
    self.recipes.insert(TypeKey::of::<I>(), erased);
  }

  fn find_recipe(&self, key: &TypeKey) -> Option<&LocalRecipe> {
    self.recipes.get(key)
  }

  fn find_singleton(&self, key: &TypeKey) -> Option<&LocalInstance> {
    self.singletons.get(key)
  }

  pub fn contains_recipe<T: ?Sized + Any>(&self) -> bool {
    self.recipes.contains_key(&TypeKey::of::<T>())
  }

  pub fn contains_singleton<T: ?Sized + Any>(&self) -> bool {
    self.singletons.contains_key(&TypeKey::of::<T>())
  }

  pub fn len(&self) -> usize {
    self.singletons.len() + self.recipes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.singletons.is_empty() && self.recipes.is_empty()
  }
}

/// A single-threaded [`Factory`](crate::Factory).
///
/// Resolution follows exactly the same order as the thread-safe factory. No
/// borrow of the scoped cache is held while a recipe runs, so recipes may
/// resolve their dependencies through the same factory.
pub struct LocalFactory {
  registries: Rc<[LocalRegistry]>,
  scoped: RefCell<HashMap<TypeKey, LocalInstance>>,
}

impl LocalFactory {
  pub fn new(registries: impl IntoIterator<Item = LocalRegistry>) -> Self {
    Self {
      registries: registries.into_iter().collect(),
      scoped: RefCell::new(HashMap::new()),
    }
  }

  pub fn create_child_factory(&self) -> LocalFactory {
    debug!(registries = self.registries.len(), "creating local child factory");
    LocalFactory {
      registries: Rc::clone(&self.registries),
      scoped: RefCell::new(HashMap::new()),
    }
  }

  pub fn register_scoped_instance<T: ?Sized + Any>(&self, instance: Rc<T>) {
    let key = TypeKey::of::<T>();
    debug!(service = key.type_name(), "seeding scoped instance");
    self.scoped.borrow_mut().insert(key, erase(instance));
  }

  /// Resolves an instance of `T`. See [`Factory::get`](crate::Factory::get).
  pub fn get<T: ?Sized + Any>(&self) -> Result<Rc<T>> {
    let key = TypeKey::of::<T>();
    let instance = self.resolve_erased(key)?;
    downcast(key, &instance)
  }

  pub fn contains_scoped<T: ?Sized + Any>(&self) -> bool {
    self.scoped.borrow().contains_key(&TypeKey::of::<T>())
  }

  pub fn scoped_len(&self) -> usize {
    self.scoped.borrow().len()
  }

  pub fn registry_count(&self) -> usize {
    self.registries.len()
  }
}

impl LocalResolver for LocalFactory {
  fn resolve_erased(&self, key: TypeKey) -> Result<Rc<dyn Any>> {
    let cached = self.scoped.borrow().get(&key).cloned();
    if let Some(instance) = cached {
      trace!(service = key.type_name(), "resolved from scoped cache");
      return Ok(instance);
    }

    if let Some(recipe) = self.registries.iter().find_map(|r| r.find_recipe(&key)) {
      debug!(service = key.type_name(), "constructing scoped instance");
      let resolver: &dyn LocalResolver = self;
      let instance = recipe(resolver)?;
      self.scoped.borrow_mut().insert(key, Rc::clone(&instance));
      return Ok(instance);
    }

    if let Some(singleton) = self.registries.iter().find_map(|r| r.find_singleton(&key)) {
      trace!(service = key.type_name(), "resolved singleton");
      return Ok(Rc::clone(singleton));
    }

    debug!(service = key.type_name(), "type not resolvable");
    Err(ResolveError::TypeNotResolvable { key })
  }
}

impl From<LocalRegistry> for LocalFactory {
  fn from(registry: LocalRegistry) -> Self {
    LocalFactory::new([registry])
  }
}
