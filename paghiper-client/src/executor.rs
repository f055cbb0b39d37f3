//! Shared POST-JSON request executor.
//!
//! Every PagHiper call goes through [`execute`]: one POST, no retries, then
//! the provider envelope is unwrapped. [`classify`] and [`decode`] turn the
//! unwrapped object into the caller's result.

use paghiper_types::{PagHiperError, ProviderResponse};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::ClientError;

/// Path segment appended to the endpoint for each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Notification,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create/",
            Action::Notification => "notification/",
        }
    }
}

/// Key the real payload is nested under.
///
/// PIX endpoints answer with `pix_create_request`, boleto endpoints with
/// `create_request`; the endpoint URL decides which.
pub fn envelope_key(endpoint: &str) -> String {
    let prefix = if endpoint.contains("pix") { "pix_" } else { "" };
    format!("{prefix}create_request")
}

/// POSTs `payload` to `endpoint + action` and returns the unwrapped
/// envelope together with the HTTP status code.
#[instrument(skip(http, payload))]
pub async fn execute<P: Serialize + ?Sized>(
    http: &Client,
    endpoint: &str,
    action: Action,
    payload: &P,
) -> Result<(Map<String, Value>, u16), ClientError> {
    let body = serde_json::to_vec(payload)?;

    let resp = http
        .post(format!("{}{}", endpoint, action.as_str()))
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    let status = resp.status().as_u16();
    let bytes = resp.bytes().await?;
    debug!(status, len = bytes.len(), "received response");

    let document: Map<String, Value> = serde_json::from_slice(&bytes)?;
    let inner = unwrap_envelope(document, endpoint)?;
    Ok((inner, status))
}

/// Extracts the payload object from the provider envelope.
pub fn unwrap_envelope(
    mut document: Map<String, Value>,
    endpoint: &str,
) -> Result<Map<String, Value>, ClientError> {
    let key = envelope_key(endpoint);
    match document.remove(&key) {
        None | Some(Value::Null) => Err(ClientError::EnvelopeNotFound { key }),
        Some(Value::Object(inner)) => Ok(inner),
        Some(_) => Err(ClientError::EnvelopeMalformed { key }),
    }
}

/// Returns the provider's rejection if the response is one.
///
/// A response is rejected when `result` is `"reject"` or the status code is
/// above 201 Created, whatever the body says.
pub fn classify(object: &Map<String, Value>, http_code: u16) -> Option<PagHiperError> {
    let rejected = object.get("result").and_then(Value::as_str) == Some("reject")
        || http_code > StatusCode::CREATED.as_u16();
    if !rejected {
        return None;
    }

    let response_message = match object.get("response_message") {
        Some(Value::String(message)) => message.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    };
    Some(PagHiperError {
        response_message,
        http_code,
    })
}

/// Decodes an accepted response into `T` and stamps the status code on it.
pub fn decode<T: ProviderResponse>(
    object: Map<String, Value>,
    http_code: u16,
) -> Result<T, ClientError> {
    let mut resp: T = serde_json::from_value(Value::Object(object))?;
    resp.set_http_code(http_code);
    Ok(resp)
}
