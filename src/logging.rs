//! Diagnostic logging for the `sortvis` driver.
//!
//! Reads `RUST_LOG`, defaulting to `warn`. Per-step frames are logged at
//! `trace` level by [`crate::sink::TracingRenderer`], so
//! `RUST_LOG=instrumented_sorting=trace` shows every step of a run.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Output goes to stderr in compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
