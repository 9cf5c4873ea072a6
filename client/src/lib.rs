#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `omni-client` — Omni Core RPC client
//!
//! [`OmniClient`] runs every call through the same pipeline:
//! encode the request with a fresh correlation id, post it through a
//! [`transport::Transport`], and decode the reply into the caller's result
//! type. The typed methods in [`methods`] only fix a method name, the
//! positional argument order, and the result type.
//!
//! ## Example
//! ```no_run
//! use omni_client::OmniClient;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let client = OmniClient::new("http://127.0.0.1:8332", "rpcuser", "rpcpassword");
//!
//! let info = client.get_info().await?;
//! println!("Omni Core {} at block {}", info.omnicore_version, info.block);
//!
//! for balance in client.get_all_balances_for_address("1EXoDusjGwvnjZUyKkxZ4UHEf77z6A5S4P").await? {
//!     println!("#{}: {} ({} reserved)", balance.property_id, balance.balance, balance.reserved);
//! }
//! # Ok::<(), transport::TransportError>(())
//! # });
//! ```

use std::fmt;
use std::sync::Arc;

use config::RpcConfig;
use omni_http::HttpTransport;
use serde::de::DeserializeOwned;
use transport::{
    decode_response, encode_request, DynTransport, IdGenerator, Param, RandomIds, Result,
};

/// Typed wrappers, one per daemon RPC method.
pub mod methods;

pub use transport::TransportError;

/// Client for a single Omni Core endpoint.
///
/// Holds the transport and the id generator behind `Arc`s and nothing
/// mutable, so clones are cheap and calls may run concurrently on one
/// instance.
#[derive(Clone)]
pub struct OmniClient {
    transport: DynTransport,
    ids: Arc<dyn IdGenerator>,
}

impl fmt::Debug for OmniClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmniClient")
            .field("endpoint", &self.transport.endpoint())
            .field("transport", &"<dyn Transport>")
            .finish()
    }
}

impl OmniClient {
    /// Creates a client posting to `url` with HTTP Basic authentication.
    pub fn new(url: impl Into<String>, user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self::from_transport(Arc::new(HttpTransport::with_auth(url, user, pass)))
    }

    /// Creates an HTTP client from configuration (cookie file, timeout).
    pub fn from_config(config: &RpcConfig) -> Result<Self> {
        Ok(Self::from_transport(Arc::new(HttpTransport::from_config(config)?)))
    }

    /// Wraps an existing transport; ids come from a fresh [`RandomIds`].
    pub fn from_transport(inner: DynTransport) -> Self {
        Self { transport: inner, ids: Arc::new(RandomIds::new()) }
    }

    /// Replaces the correlation id source.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Endpoint of the underlying transport.
    pub fn endpoint(&self) -> &str { self.transport.endpoint() }

    /// Calls `method` with positional `params` and decodes `result` into `T`.
    ///
    /// # Errors
    /// Any [`TransportError`]; see its variants for the stage that failed.
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: &[Param]) -> Result<T> {
        let request = encode_request(method, params, self.ids.next_id())?;
        let id = request.id;
        tracing::debug!(method, id, params = params.len(), "→ RPC call");

        let reply = self.transport.send(request.body).await?;
        let result = decode_response(&reply.body, id);
        if let Err(e) = &result {
            tracing::debug!(method, id, status = reply.status, error = %e, "RPC call failed");
        }
        result
    }
}
