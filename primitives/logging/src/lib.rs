#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging utilities for omni-rpc crates.

use tracing_subscriber::EnvFilter;

/// Emits a trace event tagged with the calling module's name.
pub fn trace(module: &str, msg: &str) {
    tracing::trace!(module, "{}", msg);
}

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` is used. Returns `false` if a
/// global subscriber was already installed, in which case nothing changes.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init().is_ok()
}
