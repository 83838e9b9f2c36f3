//! Development-time tracing for the walkthrough binaries.
//!
//! Diagnostics only: output goes to stderr and is controlled via `RUST_LOG`.
//! Nothing the simulation shows to the user flows through tracing; the
//! presenter owns all user-facing output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset. Output: stderr, compact.
///
/// # Example
/// ```bash
/// RUST_LOG=walkthrough=debug cargo run -p walkthrough-ui
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
