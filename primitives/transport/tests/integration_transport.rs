//! Integration tests for the shared transport API.
//!
//! These exercise the encode → send → decode pipeline the way a client
//! drives it, without requiring a running Omni Core node.

use serde_json::{json, Value};
use transport::{
    decode_response, encode_request, IdGenerator, Param, RandomIds, RawReply, Transport,
    TransportError,
};

/// Replies like a daemon that knows one method and rejects the rest.
struct DummyTransport;

#[async_trait::async_trait]
impl transport::Transport for DummyTransport {
    async fn send(&self, body: Vec<u8>) -> Result<RawReply, TransportError> {
        let request: Value = serde_json::from_slice(&body)?;
        let reply = if request["method"] == "omni_getinfo" {
            json!({"result": {"block": 800000}, "error": null, "id": request["id"]})
        } else {
            json!({
                "result": null,
                "error": {"code": -32601, "message": "Method not found"},
                "id": request["id"]
            })
        };
        let status = if reply["error"].is_null() { 200 } else { 404 };
        Ok(RawReply { status, body: serde_json::to_vec(&reply)? })
    }

    fn endpoint(&self) -> &str { "dummy://" }
}

async fn round_trip(method: &str, params: &[Param]) -> Result<Value, TransportError> {
    let ids = RandomIds::seeded(1);
    let request = encode_request(method, params, ids.next_id())?;
    let reply = DummyTransport.send(request.body).await?;
    decode_response(&reply.body, request.id)
}

#[tokio::test]
async fn consumer_can_call_transport() {
    let v = round_trip("omni_getinfo", &[]).await.expect("ok");
    assert_eq!(v["block"], 800000);
}

#[tokio::test]
async fn consumer_sees_rpc_error() {
    let err = round_trip("omni_nosuchmethod", &[Param::from("x")]).await.expect_err("should err");
    match err {
        TransportError::Rpc(msg) => assert!(msg.contains("Method not found")),
        _ => panic!("unexpected error variant"),
    }
}
