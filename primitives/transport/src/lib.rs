#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `omni-transport` — JSON-RPC core for Omni Core clients
//!
//! This crate defines the pieces every Omni Core client call goes through:
//!
//! - [`Param`] and [`encode_request`]: build the request envelope
//!   `{"method", "params", "id"}` and serialize it.
//! - [`IdGenerator`]: the per-client source of correlation ids.
//! - [`Transport`]: delivers an encoded request and hands back the raw reply.
//! - [`decode_response`]: parses the reply envelope and projects `result`
//!   onto the caller's result shape.
//!
//! Every failure along the way is a [`TransportError`] variant, so callers can
//! tell a remote-reported failure ([`TransportError::Rpc`]) apart from local,
//! network, and protocol failures.
//!
//! ## Example
//! ```no_run
//! use transport::{decode_response, encode_request, DynTransport, IdGenerator, Param, RandomIds};
//!
//! async fn demo(transport: DynTransport) -> transport::Result<String> {
//!     let ids = RandomIds::new();
//!     let params = [Param::from("1Issuer"), Param::from(70u32)];
//!     let request = encode_request("omni_sendclosecrowdsale", &params, ids.next_id())?;
//!     let reply = transport.send(request.body).await?;
//!     decode_response(&reply.body, request.id)
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Request and response envelopes, plus the encode/decode steps around them.
pub mod envelope;
/// Correlation id generators.
pub mod id;

pub use envelope::{
    decode_response, encode_request, EncodedRequest, Param, RequestEnvelope, ResponseEnvelope,
};
pub use id::{IdGenerator, RandomIds, SequentialIds};

/// Type alias for structured error handling in transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Canonical error type for a single RPC call.
///
/// Each variant corresponds to one stage of the call: encoding, delivery,
/// envelope parsing, the remote verdict, and result projection.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// A parameter or the method name could not be encoded.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Connection, DNS, or I/O failure before a response body was obtained.
    #[error("HTTP transport error: {0}")]
    Http(String),

    /// The configured per-call deadline elapsed.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The response body is not a well-formed response envelope.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The remote endpoint reported a failure in the `error` field.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The envelope carried neither an error nor a result.
    #[error("Result is null")]
    EmptyResult,

    /// The `result` payload does not fit the expected result shape.
    #[error("Unexpected result shape: {0}")]
    ResultShape(String),

    /// The echoed id does not belong to the request that was sent.
    #[error("Response id {actual} does not match request id {expected}")]
    IdMismatch {
        /// Id sent with the request.
        expected: u64,
        /// Id found in the response, rendered as JSON.
        actual: String,
    },

    /// Local setup failure outside a call (credentials, configuration).
    #[error("Other error: {0}")]
    Other(String),
}

impl TransportError {
    /// Returns `true` when the remote procedure itself reported the failure.
    ///
    /// Everything else is local: encoding, network, or protocol trouble.
    pub fn is_remote(&self) -> bool { matches!(self, TransportError::Rpc(_)) }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self { TransportError::MalformedResponse(err.to_string()) }
}

/// Raw reply handed back by a [`Transport`].
///
/// The status code is informational only. The JSON envelope in `body`
/// decides whether the call succeeded.
#[derive(Debug, Clone)]
pub struct RawReply {
    /// Transport-level status (HTTP status code for HTTP backends).
    pub status: u16,
    /// Complete response body.
    pub body: Vec<u8>,
}

/// Delivers one encoded request and returns the complete reply body.
///
/// Implementations must not retry and must not interpret the body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends an encoded request envelope.
    ///
    /// Returns [`TransportError::Http`] (or [`TransportError::Timeout`]) when
    /// no body could be obtained.
    async fn send(&self, body: Vec<u8>) -> Result<RawReply>;

    /// Returns the configured endpoint or connection descriptor.
    ///
    /// For network transports, this is usually the URL.
    /// For mock or in-memory transports, it may be a symbolic name.
    fn endpoint(&self) -> &str;
}

/// Type alias for a shared, dynamically dispatched transport instance.
///
/// ```
/// use transport::{DynTransport, Transport};
///
/// fn use_transport(t: DynTransport) {
///     println!("Using endpoint: {}", t.endpoint());
/// }
/// ```
pub type DynTransport = Arc<dyn Transport>;

/// Gets a random free port assigned by the OS.
///
/// This function binds to `127.0.0.1:0`, which causes the OS to assign
/// an available port. The listener is then dropped and the port number
/// is returned, so nothing is listening on it afterwards.
///
/// # Examples
///
/// ```
/// use transport::get_random_free_port;
///
/// let port = get_random_free_port()?;
/// println!("Using port: {}", port);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn get_random_free_port() -> std::io::Result<u16> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}
