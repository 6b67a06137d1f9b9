//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber.
///
/// Filter precedence: the `RUST_LOG` environment variable, then the
/// configured directive, then `info`. Later calls, and hosts that already
/// installed a subscriber, keep the existing one.
pub fn init(configured_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("bridge logging initialized");
    }
}

#[cfg(test)]
#[path = "logging/logging_tests.rs"]
mod logging_tests;
