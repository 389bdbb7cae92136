// ==========================================
// Logging initialisation
// ==========================================
// Uses tracing and tracing-subscriber
// Log level configurable via environment
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the logging system.
///
/// # Environment
/// - RUST_LOG: log level filter (default: info)
///   e.g. RUST_LOG=debug or RUST_LOG=divider_calc=trace
///
/// # Example
/// ```no_run
/// use divider_calc::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Initialise logging for tests.
///
/// More verbose level, writer routed through the test harness.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
