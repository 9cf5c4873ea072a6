#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `omni-http` — HTTP Transport Backend for omni-rpc
//!
//! This crate provides a concrete HTTP-based implementation of the
//! [`transport::Transport`] trait for talking to an Omni Core node.
//!
//! ## Overview
//!
//! - Implements [`HttpTransport`], a thin wrapper over [`reqwest::Client`]
//! - One `POST` per call with `Content-Type: application/json`
//! - HTTP Basic authentication from a username/password pair or a `.cookie` file
//! - Optional per-call timeout; no retries
//!
//! The reply body is returned whatever the HTTP status: Omni Core answers
//! failed calls with a JSON envelope and a 4xx/5xx status, and the envelope is
//! what decides success.
//!
//! ## Example
//! ```no_run
//! use omni_http::HttpTransport;
//! use transport::Transport;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let transport = HttpTransport::with_auth(
//!     "http://127.0.0.1:8332",
//!     "rpcuser",
//!     "rpcpassword",
//! );
//!
//! let body = br#"{"method":"omni_getinfo","params":[],"id":1}"#.to_vec();
//! let reply = transport.send(body).await.unwrap();
//! println!("{} {}", reply.status, String::from_utf8_lossy(&reply.body));
//! # });
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use config::RpcConfig;
use reqwest::header::CONTENT_TYPE;
use transport::{RawReply, Transport, TransportError};

/// A concrete implementation of the [`Transport`] trait using HTTP.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent calls. Cloning is cheap; clones share the connection pool of
/// the underlying [`reqwest::Client`].
#[derive(Clone)]
pub struct HttpTransport {
    /// The underlying HTTP client used to perform requests.
    client: reqwest::Client,
    /// The full URL of the JSON-RPC endpoint (e.g. `http://127.0.0.1:8332`).
    url: String,
    /// Optional basic authentication credentials `(username, password)`.
    auth: Option<(String, String)>,
    /// Optional deadline applied to each call.
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Constructs a new `HttpTransport` targeting the provided URL.
    ///
    /// This variant does **not** use authentication.
    ///
    /// # Example
    /// ```
    /// use omni_http::HttpTransport;
    /// use transport::Transport;
    ///
    /// let transport = HttpTransport::new("http://127.0.0.1:8332");
    /// assert_eq!(transport.endpoint(), "http://127.0.0.1:8332");
    /// ```
    pub fn new(url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), url: url.into(), auth: None, timeout: None }
    }

    /// Constructs a new `HttpTransport` with basic authentication.
    ///
    /// # Parameters
    /// - `url`: Target endpoint (e.g. `http://127.0.0.1:8332`)
    /// - `user`: RPC username
    /// - `pass`: RPC password
    pub fn with_auth(
        url: impl Into<String>,
        user: impl Into<String>,
        pass: impl Into<String>,
    ) -> Self {
        let url_string = url.into();
        logging::trace("HTTP", &format!("→ initializing HTTP transport for {}", url_string));
        Self {
            client: reqwest::Client::new(),
            url: url_string,
            auth: Some((user.into(), pass.into())),
            timeout: None,
        }
    }

    /// Constructs a new `HttpTransport` using credentials from a cookie file.
    ///
    /// The cookie file format is a single line containing `username:password`,
    /// as written by Bitcoin Core and Omni Core next to their data directory.
    ///
    /// # Errors
    /// Returns `TransportError::Other` if:
    /// - The cookie file cannot be read
    /// - The cookie file is empty or doesn't contain a colon
    pub fn from_cookie_file(
        url: impl Into<String>,
        cookie_path: impl AsRef<Path>,
    ) -> Result<Self, TransportError> {
        let file = File::open(cookie_path.as_ref()).map_err(|e| {
            TransportError::Other(format!("Failed to read cookie file: {}", e))
        })?;

        let line = BufReader::new(file)
            .lines()
            .next()
            .ok_or_else(|| TransportError::Other("Cookie file is empty".to_string()))?
            .map_err(|e| TransportError::Other(format!("Failed to read cookie file: {}", e)))?;

        let (user, pass) = line.split_once(':').ok_or_else(|| {
            TransportError::Other("Invalid cookie file format: missing colon".to_string())
        })?;

        Ok(Self::with_auth(url, user, pass))
    }

    /// Builds a transport from an [`RpcConfig`].
    ///
    /// A configured cookie file takes precedence over username/password.
    pub fn from_config(config: &RpcConfig) -> Result<Self, TransportError> {
        let transport = match &config.cookie_file {
            Some(cookie) => Self::from_cookie_file(&config.url, cookie)?,
            None => Self::with_auth(&config.url, &config.username, &config.password),
        };

        Ok(match config.timeout() {
            Some(timeout) => transport.with_timeout(timeout),
            None => transport,
        })
    }

    /// Applies `timeout` to every call made through this transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn map_error(&self, err: reqwest::Error) -> TransportError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => TransportError::Timeout(timeout),
            _ => TransportError::Http(err.to_string()),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    /// Posts one encoded request envelope and returns the full reply body.
    ///
    /// Non-2xx statuses are not errors at this layer.
    ///
    /// # Errors
    /// - [`TransportError::Http`] if the connection fails or the body cannot be read
    /// - [`TransportError::Timeout`] if the configured timeout elapses
    async fn send(&self, body: Vec<u8>) -> Result<RawReply, TransportError> {
        logging::trace("HTTP", &format!("→ POST {} ({} bytes)", self.url, body.len()));

        let mut req =
            self.client.post(&self.url).header(CONTENT_TYPE, "application/json").body(body);
        if let Some((u, p)) = &self.auth {
            req = req.basic_auth(u, Some(p));
        }
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("HTTP Transport - Request failed: {}", e);
            self.map_error(e)
        })?;

        let status = resp.status().as_u16();
        let bytes = resp.bytes().await.map_err(|e| {
            tracing::error!("HTTP Transport - Failed to read body: {}", e);
            self.map_error(e)
        })?;

        tracing::debug!(status, len = bytes.len(), "HTTP Transport - reply received");
        Ok(RawReply { status, body: bytes.to_vec() })
    }

    /// Returns the configured JSON-RPC endpoint URL.
    fn endpoint(&self) -> &str { &self.url }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use serde_json::json;
    use tempfile::NamedTempFile;
    use wiremock::matchers::{basic_auth, body_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn test_new() {
        let url = "http://127.0.0.1:8332";
        let transport = HttpTransport::new(url);

        assert_eq!(transport.url, url);
        assert!(transport.auth.is_none());
        assert!(transport.timeout.is_none());
        assert_eq!(transport.endpoint(), url);
    }

    #[test]
    fn test_with_auth() {
        let url = "http://127.0.0.1:8332";
        let transport = HttpTransport::with_auth(url, "rpcuser", "rpcpassword");

        let (auth_user, auth_pass) = transport.auth.as_ref().expect("auth should be set");
        assert_eq!(auth_user, "rpcuser");
        assert_eq!(auth_pass, "rpcpassword");
        assert_eq!(transport.endpoint(), url);

        let url_string = String::from("http://127.0.0.1:8332");
        let transport2 = HttpTransport::with_auth(&url_string, "a", "b");
        assert_eq!(transport2.url, url_string);
    }

    #[test]
    fn test_from_cookie_file() {
        let cookie = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(&cookie, "__cookie__:s3cr3t:with:colons\n").expect("write cookie");

        let transport =
            HttpTransport::from_cookie_file("http://127.0.0.1:8332", cookie.path()).expect("ok");
        let (user, pass) = transport.auth.as_ref().expect("auth should be set");
        assert_eq!(user, "__cookie__");
        assert_eq!(pass, "s3cr3t:with:colons");

        let empty = NamedTempFile::new().expect("Failed to create temporary file");
        let err = HttpTransport::from_cookie_file("http://x", empty.path())
            .err()
            .expect("empty cookie must fail");
        assert!(matches!(err, TransportError::Other(msg) if msg.contains("empty")));

        let no_colon = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(&no_colon, "justuser").expect("write cookie");
        let err = HttpTransport::from_cookie_file("http://x", no_colon.path())
            .err()
            .expect("cookie without colon must fail");
        assert!(matches!(err, TransportError::Other(msg) if msg.contains("colon")));

        let err = HttpTransport::from_cookie_file("http://x", PathBuf::from("/no/such/.cookie"))
            .err()
            .expect("missing cookie must fail");
        assert!(matches!(err, TransportError::Other(_)));
    }

    #[test]
    fn test_from_config() {
        let config = RpcConfig {
            url: "http://10.0.0.2:8332".to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
            cookie_file: None,
            timeout_secs: Some(7),
        };
        let transport = HttpTransport::from_config(&config).expect("ok");
        assert_eq!(transport.endpoint(), "http://10.0.0.2:8332");
        assert_eq!(transport.auth, Some(("u".to_string(), "p".to_string())));
        assert_eq!(transport.timeout, Some(Duration::from_secs(7)));

        let cookie = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(&cookie, "cookieuser:cookiepass").expect("write cookie");
        let config = RpcConfig { cookie_file: Some(cookie.path().to_path_buf()), ..config };
        let transport = HttpTransport::from_config(&config).expect("ok");
        assert_eq!(transport.auth, Some(("cookieuser".to_string(), "cookiepass".to_string())));
    }

    #[tokio::test]
    async fn test_send_posts_json_with_basic_auth() {
        let server = MockServer::start().await;
        let request = json!({"method": "omni_getinfo", "params": [], "id": 42});

        Mock::given(method("POST"))
            .and(header("content-type", "application/json"))
            .and(basic_auth("rpcuser", "rpcpassword"))
            .and(body_json(&request))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"result":{"block":1},"error":null,"id":42}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::with_auth(server.uri(), "rpcuser", "rpcpassword");
        let body = serde_json::to_vec(&request).expect("serialize");
        let reply = transport.send(body).await.expect("send should succeed");

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, br#"{"result":{"block":1},"error":null,"id":42}"#.to_vec());
    }

    #[tokio::test]
    async fn test_send_returns_body_for_error_status() {
        let server = MockServer::start().await;
        let envelope = r#"{"result":null,"error":{"code":-8,"message":"Invalid address"},"id":1}"#;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string(envelope))
            .mount(&server)
            .await;

        let transport = HttpTransport::with_auth(server.uri(), "u", "p");
        let reply = transport.send(b"{}".to_vec()).await.expect("body must be returned");

        assert_eq!(reply.status, 500);
        assert_eq!(reply.body, envelope.as_bytes());
    }

    #[tokio::test]
    async fn test_send_wrong_credentials_not_matched() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(basic_auth("rpcuser", "rpcpassword"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let transport = HttpTransport::with_auth(server.uri(), "rpcuser", "wrong");
        let reply = transport.send(b"{}".to_vec()).await.expect("server still answers");

        // wiremock answers unmatched requests with 404
        assert_eq!(reply.status, 404);
    }

    #[tokio::test]
    async fn test_send_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::with_auth(server.uri(), "u", "p")
            .with_timeout(Duration::from_millis(50));
        let err = transport.send(b"{}".to_vec()).await.expect_err("should time out");

        assert!(matches!(err, TransportError::Timeout(t) if t == Duration::from_millis(50)));
    }

    #[tokio::test]
    async fn test_send_connection_refused() {
        let port = transport::get_random_free_port().expect("Should get a free port");
        let transport = HttpTransport::with_auth(format!("http://127.0.0.1:{}", port), "u", "p");

        let err = transport.send(b"{}".to_vec()).await.expect_err("nothing is listening");
        assert!(matches!(err, TransportError::Http(_)));
    }
}
