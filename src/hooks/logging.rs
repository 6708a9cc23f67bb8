use tracing::Level;

use crate::core::participant::BeforeTestExecution;

/// Installs a `tracing` subscriber wired to the test writer so setup and
/// test logging shows up under `cargo test`.
///
/// Uses `try_init` so an embedder-installed subscriber stays authoritative.
pub struct TestLogging;

impl BeforeTestExecution for TestLogging {
    fn before_test_execution() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .try_init();
    }
}

crate::register_hook!(TestLogging, "test_logging");
