use fibre_scope::{resolve, Factory, Registry, ResolveError};
use std::panic;

struct UnregisteredService;

fn main() {
  let factory = Factory::new([Registry::new()]);

  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to resolve a service that was never registered...");

  let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
    // This line will panic!
    let _service = resolve!(factory, UnregisteredService);
  }));

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the fallible `get()` method ---
  println!("\nNow, attempting to resolve using the fallible `get()` method...");

  match factory.get::<UnregisteredService>() {
    Ok(_) => panic!("Should not have found the service!"),
    Err(ResolveError::TypeNotResolvable { key }) => {
      println!("Correctly received an error for `{}`.", key)
    }
    Err(other) => panic!("Unexpected error: {}", other),
  }
}
