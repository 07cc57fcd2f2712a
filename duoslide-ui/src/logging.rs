//! Tracing setup for hosts and demos.

use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "error,duoslide_ui=info,duoslide_components=info";

/// Installs a pretty `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already set, so it is safe to call
/// from every entry point.
pub fn init_tracing() {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}
