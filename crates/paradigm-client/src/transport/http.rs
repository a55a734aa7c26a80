use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::trace;

use crate::error::TransportError;

use super::{RawResponse, RequestAttempt, Transport};

const USER_AGENT: &str = concat!("paradigm-client-rust/", env!("CARGO_PKG_VERSION"));

/// `reqwest`-backed transport.
///
/// Owns the connection pool for the client's lifetime. The request URL is
/// `<api_root><path>`; the API key, when present, rides in the
/// `X-API-Key` header.
pub struct HttpTransport {
    client: reqwest::Client,
    api_root: String,
}

impl HttpTransport {
    pub(crate) fn new(api_root: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client builder uses valid static config");

        Self { client, api_root }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, attempt: &RequestAttempt) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.api_root, attempt.path);

        let mut builder = self
            .client
            .request(attempt.method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(ref api_key) = attempt.api_key {
            builder = builder.header("X-API-Key", api_key);
        }
        if !attempt.query.is_empty() {
            builder = builder.query(&attempt.query);
        }
        if let Some(ref body) = attempt.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(classify)?;
        trace!(http.status = status, body_len = body.len(), "http exchange complete");

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Split reqwest failures into the retryable classes (connect, timeout)
/// and everything else.
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}
