use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Logs go to stderr so they never interleave with model output on stdout.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
