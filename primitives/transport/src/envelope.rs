//! Wire envelopes.
//!
//! A request travels as `{"method": string, "params": array, "id": integer}`
//! and a reply comes back as `{"result": any, "error": any, "id": integer}`.
//! Exactly one of `result`/`error` is expected to be non-null; an envelope
//! with neither is a failed call, never a default-valued success.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::{Result, TransportError};

/// One positional argument of a remote procedure.
///
/// The daemon reads `params` positionally, so the order of a `Param` list is
/// part of each method's contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// JSON string.
    Str(String),
    /// Signed JSON integer.
    Int(i64),
    /// Unsigned JSON integer.
    UInt(u64),
    /// JSON floating-point number; must be finite.
    Float(f64),
    /// JSON boolean.
    Bool(bool),
    /// JSON array of nested params.
    Array(Vec<Param>),
}

impl Param {
    /// Converts the param into its JSON wire value.
    ///
    /// # Errors
    /// [`TransportError::Encoding`] for NaN or infinite floats, which JSON
    /// cannot represent.
    pub fn to_value(&self) -> Result<Value> {
        Ok(match self {
            Param::Str(s) => Value::String(s.clone()),
            Param::Int(n) => Value::from(*n),
            Param::UInt(n) => Value::from(*n),
            Param::Float(f) => Number::from_f64(*f).map(Value::Number).ok_or_else(|| {
                TransportError::Encoding(format!("{} is not representable in JSON", f))
            })?,
            Param::Bool(b) => Value::Bool(*b),
            Param::Array(items) => {
                Value::Array(items.iter().map(Param::to_value).collect::<Result<Vec<_>>>()?)
            }
        })
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self { Param::Str(s.to_string()) }
}

impl From<String> for Param {
    fn from(s: String) -> Self { Param::Str(s) }
}

impl From<&String> for Param {
    fn from(s: &String) -> Self { Param::Str(s.clone()) }
}

impl From<bool> for Param {
    fn from(b: bool) -> Self { Param::Bool(b) }
}

impl From<f64> for Param {
    fn from(f: f64) -> Self { Param::Float(f) }
}

impl From<Vec<Param>> for Param {
    fn from(items: Vec<Param>) -> Self { Param::Array(items) }
}

macro_rules! param_from_int {
    ($variant:ident, $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Param {
                fn from(n: $t) -> Self { Param::$variant(<$wide>::from(n)) }
            }
        )*
    };
}

param_from_int!(Int, i64: i8, i16, i32, i64);
param_from_int!(UInt, u64: u8, u16, u32, u64);

/// Request envelope as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Remote procedure name.
    pub method: String,
    /// Positional arguments; `[]` when the method takes none.
    pub params: Vec<Value>,
    /// Correlation id.
    pub id: u64,
}

/// A serialized request together with the id it was sent under.
#[derive(Debug, Clone)]
pub struct EncodedRequest {
    /// Correlation id embedded in `body`.
    pub id: u64,
    /// JSON request body.
    pub body: Vec<u8>,
}

/// Builds and serializes the request envelope for one call.
///
/// An empty argument list is always sent as `"params": []`.
///
/// # Errors
/// [`TransportError::Encoding`] if `method` is empty or a param has no JSON form.
pub fn encode_request(method: &str, params: &[Param], id: u64) -> Result<EncodedRequest> {
    if method.is_empty() {
        return Err(TransportError::Encoding("method name is empty".to_string()));
    }

    let envelope = RequestEnvelope {
        method: method.to_string(),
        params: params.iter().map(Param::to_value).collect::<Result<Vec<_>>>()?,
        id,
    };
    let body =
        serde_json::to_vec(&envelope).map_err(|e| TransportError::Encoding(e.to_string()))?;

    Ok(EncodedRequest { id, body })
}

/// Response envelope as it appears on the wire.
///
/// Absent and `null` fields both decode to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseEnvelope {
    /// Success payload.
    #[serde(default)]
    pub result: Option<Value>,
    /// Failure payload of any shape.
    #[serde(default)]
    pub error: Option<Value>,
    /// Echoed correlation id.
    #[serde(default)]
    pub id: Option<Value>,
}

impl ResponseEnvelope {
    /// Parses the first envelope in `body`.
    ///
    /// Anything after the first complete JSON value is ignored.
    ///
    /// # Errors
    /// [`TransportError::MalformedResponse`] if `body` is empty or does not
    /// start with a response object.
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::Deserializer::from_slice(body)
            .into_iter::<ResponseEnvelope>()
            .next()
            .ok_or_else(|| TransportError::MalformedResponse("empty response body".to_string()))?
            .map_err(|e| {
                TransportError::MalformedResponse(format!(
                    "{} (body: {})",
                    e,
                    String::from_utf8_lossy(body)
                ))
            })
    }

    /// Checks the envelope against the request it answers and projects
    /// `result` onto `T`.
    ///
    /// The `error` field is checked before the id: daemons answer requests
    /// they could not parse with `"id": null`.
    pub fn into_result<T: DeserializeOwned>(self, expected_id: u64) -> Result<T> {
        if let Some(error) = self.error {
            return Err(TransportError::Rpc(render_error(&error)));
        }

        match &self.id {
            Some(Value::Number(n)) if n.as_u64() == Some(expected_id) => {}
            other => {
                return Err(TransportError::IdMismatch {
                    expected: expected_id,
                    actual: other.as_ref().map_or_else(|| "null".to_string(), Value::to_string),
                })
            }
        }

        let result = self.result.ok_or(TransportError::EmptyResult)?;
        serde_json::from_value(result).map_err(|e| TransportError::ResultShape(e.to_string()))
    }
}

/// Decodes a complete response body for the request sent under `expected_id`.
///
/// # Errors
/// - [`TransportError::MalformedResponse`] if the body is not an envelope
/// - [`TransportError::Rpc`] if `error` is non-null
/// - [`TransportError::IdMismatch`] if the echoed id differs
/// - [`TransportError::EmptyResult`] if `result` is null or absent
/// - [`TransportError::ResultShape`] if `result` does not fit `T`
pub fn decode_response<T: DeserializeOwned>(body: &[u8], expected_id: u64) -> Result<T> {
    ResponseEnvelope::parse(body)?.into_result(expected_id)
}

/// Strings are surfaced bare, any other shape as compact JSON.
fn render_error(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
