//! Diagnostics for the `opdispatch` binary.
//!
//! Stdout carries nothing but results (`3`, `-1`, filter matches, JSON
//! records), and callers pipe it into other tools or compare it byte for
//! byte. Every tracing event therefore goes to stderr, and the default
//! filter emits nothing during a successful run.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber, filtered by `RUST_LOG`.
///
/// ```bash
/// RUST_LOG=opdispatch=debug opdispatch filter -c prime --end 20
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
