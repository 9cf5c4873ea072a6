//! Mock Omni Core endpoint shared by the client integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{basic_auth, header, method};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const RPC_USER: &str = "omniuser";
pub const RPC_PASSWORD: &str = "omnipass";

/// Answers every request with a fixed `result`/`error` pair and the request's own id.
pub struct EnvelopeResponder {
    pub status: u16,
    pub result: Value,
    pub error: Value,
}

impl Respond for EnvelopeResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = request_json(request)["id"].clone();
        ResponseTemplate::new(self.status).set_body_json(json!({
            "result": self.result,
            "error": self.error,
            "id": id,
        }))
    }
}

/// Answers with the request's method name as the result, after a delay that
/// depends on the method so that concurrent replies arrive out of order.
pub struct MethodEchoResponder;

impl Respond for MethodEchoResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body = request_json(request);
        let method = body["method"].as_str().unwrap_or_default().to_string();
        let delay = std::time::Duration::from_millis(10 * (method.len() as u64 % 7));
        ResponseTemplate::new(200)
            .set_body_json(json!({"result": method, "error": null, "id": body["id"]}))
            .set_delay(delay)
    }
}

pub fn request_json(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("request body should be JSON")
}

/// Starts a server that only answers authenticated JSON POSTs.
pub async fn omni_server(responder: impl Respond + 'static) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("content-type", "application/json"))
        .and(basic_auth(RPC_USER, RPC_PASSWORD))
        .respond_with(responder)
        .mount(&server)
        .await;
    server
}

pub async fn success_server(result: Value) -> MockServer {
    omni_server(EnvelopeResponder { status: 200, result, error: Value::Null }).await
}

/// Bodies of every request the server has seen, in arrival order.
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .map(request_json)
        .collect()
}
