//! Wire envelope decoding and response classification.
//!
//! Every API response is wrapped in a JSON envelope carrying a success
//! flag, an optional payload, and an optional error object. The rules
//! here turn a completed exchange (status + body) into either the payload
//! or a classified [`ClientError`]. Transport-level status always takes
//! precedence over what the envelope claims about itself.

use crate::error::ClientError;

const FALLBACK_MESSAGE: &str = "Unknown error";
const FALLBACK_CODE: &str = "UNKNOWN";

#[derive(serde::Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    success: bool,
    data: Option<serde_json::Value>,
    error: Option<EnvelopeError>,
}

#[derive(serde::Deserialize)]
struct EnvelopeError {
    message: Option<String>,
    code: Option<String>,
}

impl EnvelopeError {
    fn into_parts(self, default_message: &str) -> (String, String) {
        (
            self.message.unwrap_or_else(|| default_message.to_owned()),
            self.code.unwrap_or_else(|| FALLBACK_CODE.to_owned()),
        )
    }
}

/// Classify a completed HTTP exchange.
///
/// Ordering is significant: 429 wins regardless of body content (even an
/// empty or unparseable one), then body decode, then HTTP status, then
/// the envelope's own success flag. The returned payload is the `data`
/// field exactly as the server sent it.
pub(crate) fn interpret(status: u16, body: &[u8]) -> Result<serde_json::Value, ClientError> {
    if status == 429 {
        return Err(ClientError::RateLimited);
    }

    let envelope: ResponseEnvelope = serde_json::from_slice(body)
        .map_err(|e| ClientError::Network(format!("invalid response body: {e}")))?;

    if status >= 400 {
        let (message, code) = match envelope.error {
            Some(err) => err.into_parts(FALLBACK_MESSAGE),
            None => (FALLBACK_MESSAGE.to_owned(), FALLBACK_CODE.to_owned()),
        };
        return Err(ClientError::Api { message, code });
    }

    if !envelope.success {
        let (message, code) = match envelope.error {
            Some(err) => err.into_parts("Request failed"),
            None => ("Request failed".to_owned(), FALLBACK_CODE.to_owned()),
        };
        return Err(ClientError::Api { message, code });
    }

    Ok(envelope
        .data
        .unwrap_or_else(|| serde_json::Value::Object(Default::default())))
}
