//! Tracing setup for the chardiff binary.

use tracing_subscriber::{Layer, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, in `EnvFilter` syntax.
pub const LOG_ENV: &str = "CHARDIFF_LOG";

/// Initialize tracing to stderr.
///
/// The filter is read from `CHARDIFF_LOG`, then `RUST_LOG`, and defaults to
/// `warn` so normal runs print nothing but the diff.
pub fn init_standard_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter),
        )
        .init();
}
