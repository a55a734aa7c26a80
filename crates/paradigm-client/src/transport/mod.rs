//! Transport seam between the dispatcher and the HTTP stack.
//!
//! A [`Transport`] carries exactly one attempt: no retries, no rate
//! limiting, no interpretation. Keeping the seam this narrow lets the
//! dispatcher's retry, backoff, and classification logic run unchanged
//! against the scripted mock in tests.

mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::HttpTransport;

use async_trait::async_trait;

use crate::error::TransportError;

/// One outbound request attempt, fully shaped by the dispatcher.
/// Constructed per attempt and discarded once the exchange resolves.
#[derive(Debug, Clone)]
pub struct RequestAttempt {
    pub method: reqwest::Method,
    /// Path below the versioned API root, with a leading slash.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// 0-based; retries of the same call increment it.
    pub attempt: u32,
    /// Key to send as `X-API-Key`, captured at dispatch time so a
    /// rotation mid-call applies from the next attempt on.
    pub api_key: Option<String>,
}

/// Raw result of an HTTP exchange, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single HTTP exchange for `attempt`.
    async fn send(&self, attempt: &RequestAttempt) -> Result<RawResponse, TransportError>;
}
