use tracing_subscriber::EnvFilter;

/// Route library events to the test harness; `RUST_LOG=verna=trace` shows them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
