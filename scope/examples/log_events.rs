use fibre_scope::{Factory, Registry};
use tracing_subscriber::EnvFilter;

struct Database;

struct Repository {
  _db: std::sync::Arc<Database>,
}

fn main() {
  // Resolution events are emitted at `debug` and `trace`. Override with RUST_LOG.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fibre_scope=trace")),
    )
    .init();

  let mut registry = Registry::new();
  registry.register_scoped(|_| Ok(Database));
  registry.register_scoped(|r| Ok(Repository { _db: r.get::<Database>()? }));

  let root = Factory::from(registry);
  let child = root.create_child_factory();

  let _ = child.get::<Repository>();
  let _ = child.get::<Repository>();
  let _ = root.get::<String>();
}
