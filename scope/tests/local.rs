use fibre_scope::{LocalFactory, LocalRegistry, LocalResolver, ResolveError, TypeKey};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct A;

struct B {
  dependency: Rc<A>,
}

#[test]
fn test_local_recipe_is_cached_per_factory() {
  let calls = Rc::new(Cell::new(0));
  let mut registry = LocalRegistry::new();
  let counter = Rc::clone(&calls);
  registry.register_scoped(move |_| {
    counter.set(counter.get() + 1);
    Ok(A)
  });

  let parent = LocalFactory::new([registry]);
  let child = parent.create_child_factory();

  let r1 = parent.get::<A>().unwrap();
  let r2 = parent.get::<A>().unwrap();
  assert!(Rc::ptr_eq(&r1, &r2));
  assert_eq!(calls.get(), 1);

  let r3 = child.get::<A>().unwrap();
  assert!(!Rc::ptr_eq(&r1, &r3));
  assert_eq!(calls.get(), 2);
}

#[test]
fn test_local_recursive_dependency() {
  let mut registry = LocalRegistry::new();
  registry.register_scoped(|_| Ok(A));
  registry.register_scoped(|r| Ok(B { dependency: r.get::<A>()? }));
  let factory = LocalFactory::from(registry);

  let b = factory.get::<B>().unwrap();
  let a = factory.get::<A>().unwrap();
  assert!(Rc::ptr_eq(&a, &b.dependency));
}

#[test]
fn test_local_singleton_shared_across_children() {
  let singleton = Rc::new(A);
  let mut registry = LocalRegistry::new();
  registry.register_singleton_instance(Rc::clone(&singleton));

  let parent = LocalFactory::new([registry]);
  let grandchild = parent.create_child_factory().create_child_factory();

  assert!(Rc::ptr_eq(&singleton, &parent.get::<A>().unwrap()));
  assert!(Rc::ptr_eq(&singleton, &grandchild.get::<A>().unwrap()));
  assert!(!grandchild.contains_scoped::<A>());
}

#[test]
fn test_local_scoped_instance_and_precedence() {
  let mut singletons = LocalRegistry::new();
  singletons.register_singleton_instance(Rc::new(String::from("singleton")));
  let mut recipes = LocalRegistry::new();
  recipes.register_scoped(|_| Ok(String::from("recipe")));

  let factory = LocalFactory::new([singletons, recipes]);
  let child = factory.create_child_factory();
  child.register_scoped_instance(Rc::new(String::from("seeded")));

  assert_eq!(*factory.get::<String>().unwrap(), "recipe");
  assert_eq!(*child.get::<String>().unwrap(), "seeded");
}

#[test]
fn test_local_trait_resolution() {
  trait Greeter {
    fn greet(&self) -> String;
  }
  struct English;
  impl Greeter for English {
    fn greet(&self) -> String {
      "Hello".to_string()
    }
  }

  let mut registry = LocalRegistry::new();
  registry.register_scoped_trait::<dyn Greeter>(|_| Ok(Rc::new(English)));
  let factory = LocalFactory::from(registry);

  let greeter = factory.get::<dyn Greeter>().unwrap();
  assert_eq!(greeter.greet(), "Hello");
}

#[test]
fn test_local_unresolvable_type() {
  struct Missing;
  let factory = LocalFactory::new([LocalRegistry::new()]);

  let err = factory.get::<Missing>().err().unwrap();
  assert_eq!(
    err,
    ResolveError::TypeNotResolvable {
      key: TypeKey::of::<Missing>()
    }
  );
  assert_eq!(factory.scoped_len(), 0);
}

#[test]
fn test_local_factory_handles_not_send_sync_types() {
  // `Rc<RefCell<_>>` is neither `Send` nor `Sync`.
  struct NotSendSyncService {
    log: Rc<RefCell<Vec<String>>>,
  }

  let shared_log = Rc::new(RefCell::new(Vec::new()));
  let mut registry = LocalRegistry::new();
  registry.register_singleton_instance(Rc::clone(&shared_log));
  registry.register_scoped(|r: &dyn LocalResolver| {
    Ok(NotSendSyncService {
      log: r.get::<RefCell<Vec<String>>>()?,
    })
  });

  let parent = LocalFactory::from(registry);
  let child = parent.create_child_factory();

  parent
    .get::<NotSendSyncService>()
    .unwrap()
    .log
    .borrow_mut()
    .push("parent".to_string());
  child
    .get::<NotSendSyncService>()
    .unwrap()
    .log
    .borrow_mut()
    .push("child".to_string());

  assert_eq!(*shared_log.borrow(), vec!["parent", "child"]);
}
