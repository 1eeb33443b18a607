//! # Fibre Scope
//!
//! A small, scoped Inversion of Control (IoC) container for Rust.
//!
//! Services are declared in one or more [`Registry`] values and resolved by
//! exact type through a [`Factory`]. Factories form a tree: every child shares
//! the registries of its root but keeps its own cache of scoped instances.
//!
//! ## Lifetimes
//!
//! - **Scoped recipe**: `Registry::register_scoped` stores a recipe that runs
//!   lazily, at most once per factory. Parent and child factories each get
//!   their own instance.
//! - **Scoped instance**: `Factory::register_scoped_instance` seeds one
//!   factory with a value built elsewhere, shadowing any recipe for that type.
//! - **Singleton**: `Registry::register_singleton_instance` stores a value
//!   shared by every factory in the tree.
//!
//! Resolution checks the factory's cache, then every registry for a recipe,
//! then every registry for a singleton. Registries listed first win.
//!
//! Recipes receive the resolving factory as a [`Resolver`], which only allows
//! looking up further dependencies. Those resolve in the same scope as the
//! original request.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_scope::{resolve, Factory, Registry};
//! use std::sync::Arc;
//!
//! struct Config {
//!     url: String,
//! }
//!
//! struct Session {
//!     config: Arc<Config>,
//! }
//!
//! let mut registry = Registry::new();
//! registry.register_singleton_instance(Arc::new(Config { url: "db://main".into() }));
//! registry.register_scoped(|r| Ok(Session { config: r.get::<Config>()? }));
//!
//! let root = Factory::new([registry]);
//! let request = root.create_child_factory();
//!
//! let session = resolve!(request, Session);
//! assert_eq!(session.config.url, "db://main");
//!
//! // One session per scope, one config for everyone.
//! assert!(Arc::ptr_eq(&session, &request.get::<Session>().unwrap()));
//! assert!(!Arc::ptr_eq(&session, &root.get::<Session>().unwrap()));
//! assert!(Arc::ptr_eq(&session.config, &root.get::<Config>().unwrap()));
//! ```
//!
//! ## Features
//!
//! - `local`: enables [`LocalRegistry`] and [`LocalFactory`], a
//!   single-threaded flavour built on `Rc` that accepts `!Send` services.

mod core;
mod error;
mod factory;
#[cfg(feature = "local")]
mod local;
mod macros;
mod registry;
mod resolver;

pub use crate::core::TypeKey;
pub use error::{ResolveError, Result};
pub use factory::Factory;
#[cfg(feature = "local")]
pub use local::{LocalFactory, LocalRegistry, LocalResolver};
pub use registry::Registry;
pub use resolver::Resolver;
