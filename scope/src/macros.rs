//! Public macros for ergonomic service resolution.
//!
//! Both macros accept anything with a typed `get::<T>()` method: a
//! [`Factory`](crate::Factory), a `&dyn Resolver` inside a recipe, or their
//! local counterparts.

/// Resolves a required service, panicking if it cannot be resolved.
///
/// # Panics
///
/// Panics with `Failed to resolve required service: ...` when the resolver
/// returns an error. Use `get::<T>()` directly for the fallible version.
///
/// # Examples
///
/// ```
/// use fibre_scope::{resolve, Factory, Registry};
/// use std::sync::Arc;
///
/// let mut registry = Registry::new();
/// registry.register_singleton_instance(Arc::new(String::from("hello")));
/// let factory = Factory::from(registry);
///
/// let message = resolve!(factory, String);
/// assert_eq!(*message, "hello");
/// ```
///
/// ```
/// use fibre_scope::{resolve, Factory, Registry};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync { fn greet(&self) -> String; }
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter { fn greet(&self) -> String { "Hello!".to_string() } }
///
/// let mut registry = Registry::new();
/// registry.register_scoped_trait::<dyn Greeter>(|_| Ok(Arc::new(EnglishGreeter)));
/// let factory = Factory::from(registry);
///
/// let greeter = resolve!(factory, trait Greeter);
/// assert_eq!(greeter.greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! resolve {
  // Must precede the `$type:ty` arm: `trait X` is not a type.
  ($resolver:expr, trait $trait_ident:ident) => {
    $resolver
      .get::<dyn $trait_ident>()
      .unwrap_or_else(|err| panic!("Failed to resolve required service: {}", err))
  };

  ($resolver:expr, $type:ty) => {
    $resolver
      .get::<$type>()
      .unwrap_or_else(|err| panic!("Failed to resolve required service: {}", err))
  };
}

/// Resolves a service, returning `None` if it cannot be resolved.
///
/// ```
/// use fibre_scope::{maybe_resolve, Factory, Registry};
///
/// struct Unregistered;
/// let factory = Factory::from(Registry::new());
/// assert!(maybe_resolve!(factory, Unregistered).is_none());
/// ```
#[macro_export]
macro_rules! maybe_resolve {
  ($resolver:expr, trait $trait_ident:ident) => {
    $resolver.get::<dyn $trait_ident>().ok()
  };

  ($resolver:expr, $type:ty) => {
    $resolver.get::<$type>().ok()
  };
}
