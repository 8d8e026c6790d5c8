use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber, honoring `RUST_LOG`.
///
/// Safe to call from every test; the first caller wins and later calls
/// are no-ops, so parallel scenarios can all invoke it.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
