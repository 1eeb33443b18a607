use fibre_scope::{LocalFactory, LocalRegistry};
use std::cell::RefCell;
use std::rc::Rc;

// Not `Send`: only the local flavour can hold it.
struct Journal {
  lines: RefCell<Vec<String>>,
}

struct Worker {
  journal: Rc<Journal>,
  name: Rc<String>,
}

fn main() {
  let journal = Rc::new(Journal {
    lines: RefCell::new(Vec::new()),
  });

  let mut registry = LocalRegistry::new();
  registry.register_singleton_instance(Rc::clone(&journal));
  registry.register_scoped(|r| {
    Ok(Worker {
      journal: r.get::<Journal>()?,
      name: r.get::<String>()?,
    })
  });

  let root = LocalFactory::from(registry);
  for name in ["alpha", "beta"] {
    let scope = root.create_child_factory();
    scope.register_scoped_instance(Rc::new(name.to_string()));
    let worker = scope.get::<Worker>().expect("worker should resolve");
    worker
      .journal
      .lines
      .borrow_mut()
      .push(format!("{} checked in", worker.name));
  }

  for line in journal.lines.borrow().iter() {
    println!("{}", line);
  }
}
