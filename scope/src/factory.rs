//! The `Factory`: resolves services and owns one scope's cached instances.

use crate::core::{downcast, erase, Instance, TypeKey};
use crate::error::{ResolveError, Result};
use crate::registry::{Recipe, Registry};
use crate::resolver::Resolver;
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, trace};

/// A scoped resolver over an ordered list of registries.
///
/// Every factory keeps a private cache of scoped instances. Children created
/// with [`create_child_factory`](Factory::create_child_factory) share the
/// registries of their parent but start with an empty cache, so scoped
/// recipes produce one instance per factory while singletons are shared by
/// the whole tree.
///
/// `Factory` is `Send + Sync`. Concurrent resolutions of the same type on one
/// factory run its recipe once; the other callers wait for and receive that
/// instance.
pub struct Factory {
  registries: Arc<[Registry]>,
  // Cells are cloned out of the map before a recipe runs, so no shard lock is
  // held while recipes resolve their own dependencies.
  scoped: DashMap<TypeKey, Arc<OnceCell<Instance>>>,
}

impl Factory {
  /// Creates a root factory. Registries earlier in the list take precedence
  /// over later ones when both define the same type.
  pub fn new(registries: impl IntoIterator<Item = Registry>) -> Self {
    Self {
      registries: registries.into_iter().collect(),
      scoped: DashMap::new(),
    }
  }

  /// Creates a factory sharing this factory's registries, with an empty
  /// scoped cache.
  pub fn create_child_factory(&self) -> Factory {
    debug!(registries = self.registries.len(), "creating child factory");
    Factory {
      registries: Arc::clone(&self.registries),
      scoped: DashMap::new(),
    }
  }

  /// Seeds this factory's cache with an externally built instance.
  ///
  /// Later calls to [`get`](Factory::get) on this factory return `instance`
  /// without consulting any recipe. Parent and sibling factories are not
  /// affected.
  pub fn register_scoped_instance<T: ?Sized + Any + Send + Sync>(&self, instance: Arc<T>) {
    let key = TypeKey::of::<T>();
    debug!(service = key.type_name(), "seeding scoped instance");
    self
      .scoped
      .insert(key, Arc::new(OnceCell::with_value(erase(instance))));
  }

  /// Resolves an instance of `T`.
  ///
  /// Lookup order: this factory's cache, then the first recipe for `T` across
  /// all registries (whose result is cached here), then the first singleton
  /// for `T` across all registries.
  pub fn get<T: ?Sized + Any + Send + Sync>(&self) -> Result<Arc<T>> {
    let key = TypeKey::of::<T>();
    let instance = self.resolve_erased(key)?;
    downcast(key, &instance)
  }

  /// Returns `true` if this factory holds a scoped instance of `T`.
  pub fn contains_scoped<T: ?Sized + Any>(&self) -> bool {
    self.cached(&TypeKey::of::<T>()).is_some()
  }

  /// Number of scoped instances cached by this factory.
  pub fn scoped_len(&self) -> usize {
    self
      .scoped
      .iter()
      .filter(|entry| entry.value().get().is_some())
      .count()
  }

  pub fn registry_count(&self) -> usize {
    self.registries.len()
  }

  fn cached(&self, key: &TypeKey) -> Option<Instance> {
    self
      .scoped
      .get(key)
      .and_then(|entry| entry.value().get().cloned())
  }

  fn construct(&self, key: TypeKey, recipe: &Recipe) -> Result<Instance> {
    let cell = Arc::clone(
      self
        .scoped
        .entry(key)
        .or_insert_with(|| Arc::new(OnceCell::new()))
        .value(),
    );

    cell
      .get_or_try_init(|| {
        debug!(service = key.type_name(), "constructing scoped instance");
        let resolver: &dyn Resolver = self;
        recipe(resolver)
      })
      .cloned()
  }
}

impl Resolver for Factory {
  fn resolve_erased(&self, key: TypeKey) -> Result<Instance> {
    if let Some(instance) = self.cached(&key) {
      trace!(service = key.type_name(), "resolved from scoped cache");
      return Ok(instance);
    }

    if let Some(recipe) = self.registries.iter().find_map(|r| r.find_recipe(&key)) {
      return self.construct(key, recipe);
    }

    if let Some(singleton) = self.registries.iter().find_map(|r| r.find_singleton(&key)) {
      trace!(service = key.type_name(), "resolved singleton");
      return Ok(Arc::clone(singleton));
    }

    debug!(service = key.type_name(), "type not resolvable");
    Err(ResolveError::TypeNotResolvable { key })
  }
}

impl From<Registry> for Factory {
  fn from(registry: Registry) -> Self {
    Factory::new([registry])
  }
}
