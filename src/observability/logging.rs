//! Structured logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies
/// (typically `EngineConfig::observability.log_filter`). Safe to call
/// more than once; later calls are no-ops, which keeps tests that each
/// initialize logging from fighting over the global subscriber.
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
