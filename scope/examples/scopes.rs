use fibre_scope::{Factory, Registry};
use std::sync::Arc;

// Application-wide configuration, shared by every request.
struct Config {
  greeting: String,
}

// Supplied by the caller for each request.
struct RequestId(u64);

// Built once per request from the two above.
struct Handler {
  config: Arc<Config>,
  request: Arc<RequestId>,
}

impl Handler {
  fn handle(&self) -> String {
    format!("{} #{}", self.config.greeting, self.request.0)
  }
}

fn main() {
  let mut registry = Registry::new();
  registry.register_singleton_instance(Arc::new(Config {
    greeting: "Hello, request".to_string(),
  }));
  registry.register_scoped(|r| {
    Ok(Handler {
      config: r.get::<Config>()?,
      request: r.get::<RequestId>()?,
    })
  });

  let root = Factory::from(registry);

  for id in 1..=3 {
    // One child factory per request; the request ID is seeded from outside.
    let request = root.create_child_factory();
    request.register_scoped_instance(Arc::new(RequestId(id)));

    let handler = request.get::<Handler>().expect("handler should resolve");
    println!("{}", handler.handle());
    assert!(Arc::ptr_eq(&handler, &request.get::<Handler>().unwrap()));
  }

  // The root never saw a request ID, so it cannot build a handler.
  match root.get::<Handler>() {
    Ok(_) => panic!("root scope has no RequestId"),
    Err(err) => println!("Root scope: {}", err),
  }
}
