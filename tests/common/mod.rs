use tracing_subscriber::EnvFilter;

/// Initialize tracing from `RUST_LOG` for a test binary.
///
/// `try_init()` is idempotent: the first call in the process succeeds,
/// subsequent calls are silently ignored.
pub fn setup_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
