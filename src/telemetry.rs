//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize logging for the process.
///
/// Logs go to stderr so command output on stdout stays machine-readable. The
/// filter comes from `RUST_LOG` and defaults to `warn`. Calling this more than
/// once is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
