//! Tracing subscriber setup
//!
//! Logs go to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Filter used when `--verbose` is passed
const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directive when `RUST_LOG` is not set
pub fn default_directive(configured: &str, verbose: bool) -> &str {
    if verbose {
        VERBOSE_FILTER
    } else if configured.trim().is_empty() {
        "warn"
    } else {
        configured
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over both the configured level and
/// `--verbose`. Calling this twice is harmless; the second call is ignored.
pub fn init(configured: &str, verbose: bool) {
    let directive = default_directive(configured, verbose);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(directive, "logging initialised");
    }
}
