// SPDX-License-Identifier: CC0-1.0

//! omni-rpc umbrella crate.
//!
//! Re-exports the workspace members so applications can depend on a single
//! crate:
//!
//! - [`OmniClient`] and its typed RPC methods (`omni-client`)
//! - [`transport`]: envelopes, correlation ids, [`TransportError`]
//! - [`http`]: the `reqwest`-based [`HttpTransport`]
//! - [`types`]: records decoded from daemon replies
//! - [`config`] and [`logging`]: TOML configuration and `tracing` setup
//!
//! ```no_run
//! use omni_rpc::{config::Config, OmniClient};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut config = Config::from_file(Config::default_path()?)?;
//! config.rpc.apply_env();
//! omni_rpc::logging::init(&config.logging.level);
//!
//! let client = OmniClient::from_config(&config.rpc)?;
//! let info = client.get_info().await?;
//! println!("block {}", info.block);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

pub use omni_client::OmniClient;
pub use omni_http::HttpTransport;
pub use transport::TransportError;
pub use config;
pub use logging;
pub use transport;
pub use types;

/// HTTP transport backend.
pub mod http {
    pub use omni_http::*;
}

/// Miscellaneous metadata about the omni-rpc workspace.
pub mod omni_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
