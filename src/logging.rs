//! Tracing setup for the `umarket` binary.
//!
//! Logs go to stderr so listings on stdout stay machine readable.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize logging with a specific default level.
///
/// `RUST_LOG` still overrides `default_level` when set.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for tests (captured by the test harness).
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
