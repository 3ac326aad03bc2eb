//! Tracing Subscriber Initialization
//!
//! Sets up structured logging for the server process. Filtering is
//! controlled through `RUST_LOG`; the default keeps the API and HTTP
//! layer at info level.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "notes_api=info,tower_http=info";

/// Initialize the tracing subscriber.
///
/// Called once at startup before any tracing occurs. Uses `try_init` so
/// repeated initialization (e.g. in tests) is a no-op instead of a panic.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
