//! Response envelope handling
//!
//! Every backend response has the shape
//! `{ "success": bool, "message"?: string, ...payload }`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use creatorkit_common::{Error, Result};

/// Fallback for `success: false` responses that carry no message
const DECLINED_MESSAGE: &str = "The server declined the request";

#[derive(Debug, Deserialize)]
struct EnvelopeStatus {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Successful reply: the server message plus the typed payload
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub message: Option<String>,
    pub data: T,
}

/// Payload of the generation endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentPayload {
    pub content: String,
}

/// Unwrap an envelope, turning `success: false` into a soft error
pub fn unwrap_envelope<T: DeserializeOwned>(value: serde_json::Value) -> Result<Reply<T>> {
    let status: EnvelopeStatus = serde_json::from_value(value.clone())?;

    if !status.success {
        let message = status
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DECLINED_MESSAGE.to_string());
        return Err(Error::Application(message));
    }

    let data = serde_json::from_value(value)?;
    Ok(Reply {
        message: status.message,
        data,
    })
}

/// Pull a `message` string out of an error body, if there is one
pub fn server_message(body: &str) -> Option<String> {
    let status: EnvelopeStatus = serde_json::from_str(body).ok()?;
    status.message.filter(|m| !m.trim().is_empty())
}
