//! The narrow, lookup-only view of a factory handed to recipes.

use crate::core::{downcast, Instance, TypeKey};
use crate::error::Result;
use std::any::Any;
use std::sync::Arc;

/// Resolves services by type.
///
/// This is everything a recipe gets to see of the factory that invoked it:
/// it can resolve its own dependencies, but it cannot create child factories
/// or seed scoped instances. Typed access goes through `get::<T>()`, defined
/// on `dyn Resolver`.
pub trait Resolver {
  /// Resolves the erased instance stored for `key`.
  ///
  /// The returned value must wrap an `Arc<T>` for the `T` that `key` was
  /// built from.
  fn resolve_erased(&self, key: TypeKey) -> Result<Instance>;
}

impl<'a> dyn Resolver + 'a {
  /// Resolves an instance of `T`.
  pub fn get<T: ?Sized + Any + Send + Sync>(&self) -> Result<Arc<T>> {
    let key = TypeKey::of::<T>();
    let instance = self.resolve_erased(key)?;
    downcast(key, &instance)
  }
}
