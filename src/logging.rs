//! Tracing subscriber setup for the playground binary.

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
pub fn install_logger() -> Result<(), SetGlobalDefaultError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
