use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// Logs go to stderr so they never mix with the report on stdout. `RUST_LOG`
/// wins over the `verbose` flag when set.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "bogorace=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_thread_names(verbose)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
