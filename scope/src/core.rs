//! Type keys and the erased storage shared by registries and factories.

use crate::error::{ResolveError, Result};
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Identifies a requested type.
///
/// Two keys compare equal exactly when they were built from the same type.
/// The type name is carried along for diagnostics only and takes no part in
/// equality or hashing.
#[derive(Clone, Copy)]
pub struct TypeKey {
  id: TypeId,
  name: &'static str,
}

impl TypeKey {
  /// Returns the key for `T`. Unsized types such as `dyn Trait` are keys of
  /// their own, distinct from any implementing type.
  pub fn of<T: ?Sized + Any>() -> Self {
    Self {
      id: TypeId::of::<T>(),
      name: std::any::type_name::<T>(),
    }
  }

  pub fn type_id(&self) -> TypeId {
    self.id
  }

  pub fn type_name(&self) -> &'static str {
    self.name
  }
}

impl PartialEq for TypeKey {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl fmt::Debug for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "TypeKey({})", self.name)
  }
}

impl fmt::Display for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

/// A type-erased, shareable instance. The concrete value is always an
/// `Arc<T>` for the `T` of the key it is stored under, which is what lets
/// trait objects live in the same maps as sized types.
pub(crate) type Instance = Arc<dyn Any + Send + Sync>;

pub(crate) fn erase<T: ?Sized + Any + Send + Sync>(instance: Arc<T>) -> Instance {
  Arc::new(instance)
}

pub(crate) fn downcast<T: ?Sized + Any + Send + Sync>(
  key: TypeKey,
  instance: &Instance,
) -> Result<Arc<T>> {
  (**instance)
    .downcast_ref::<Arc<T>>()
    .cloned()
    .ok_or(ResolveError::TypeMismatch { key })
}
