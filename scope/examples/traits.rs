use fibre_scope::{resolve, Factory, Registry};
use std::sync::Arc;

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

// 3. Define a service that depends on the abstraction
struct ReportService {
  logger: Arc<dyn Logger>,
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log("Starting report generation.");
    // ... logic to generate report ...
    self.logger.log("Finished report generation.");
  }
}

fn main() {
  // --- Registration ---
  let mut registry = Registry::new();

  // Register the ConsoleLogger under the exact type `dyn Logger`.
  registry.register_singleton_instance::<dyn Logger>(Arc::new(ConsoleLogger));

  // The ReportService recipe *resolves* its own dependency through the resolver
  // it is handed. ReportService doesn't create its logger.
  registry.register_scoped(|r| {
    Ok(ReportService {
      logger: r.get::<dyn Logger>()?,
    })
  });

  let factory = Factory::from(registry);

  // --- Resolution and Usage ---
  println!("Resolving the high-level service...");
  let report_service = resolve!(factory, ReportService);

  println!("Using the service...");
  report_service.generate_report();
}
