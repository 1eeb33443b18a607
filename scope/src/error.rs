use crate::core::TypeKey;
use thiserror::Error;

/// The error type returned when a factory cannot produce a requested service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolveError {
  /// No scoped instance, recipe or singleton exists for the type in any
  /// registry reachable from the factory.
  #[error("Cannot resolve type: {key}")]
  TypeNotResolvable { key: TypeKey },

  /// A stored value does not have the type its key claims. The typed
  /// registration methods never produce this; a hand-written `Resolver`
  /// handing back the wrong value can.
  #[error("Stored instance for {key} has a different type")]
  TypeMismatch { key: TypeKey },
}

impl ResolveError {
  /// The type whose resolution failed.
  pub fn key(&self) -> TypeKey {
    match self {
      ResolveError::TypeNotResolvable { key } | ResolveError::TypeMismatch { key } => *key,
    }
  }
}

/// A specialized `Result` type for resolution.
pub type Result<T, E = ResolveError> = std::result::Result<T, E>;
