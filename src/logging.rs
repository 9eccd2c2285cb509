use tracing_subscriber::{fmt, EnvFilter};

/// Route this crate's tracing events to the test harness output.
///
/// `RUST_LOG` overrides the default `humanms=debug` filter. Safe to call from
/// every test; only the first call installs the subscriber.
pub(crate) fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("humanms=debug"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .compact()
        .try_init();
}
