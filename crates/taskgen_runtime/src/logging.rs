//! Log output.

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `warn`. `verbose` replaces
/// it with `debug`. Calling this twice is harmless; the second call does
/// nothing.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
