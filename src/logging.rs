use crate::config::{DEFAULT_LOG_FILTER, LOG_ENV};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Events go to stderr so report output on
/// stdout is never interleaved with diagnostics.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // a subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
