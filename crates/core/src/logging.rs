//! Logging initialization and configuration.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,cubes=debug";

/// Initialize the logging system with tracing.
///
/// Filtering comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
///
/// # Example
/// ```
/// cubes_core::init_logging();
/// tracing::info!("Scene ready");
/// ```
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .try_init();
}
