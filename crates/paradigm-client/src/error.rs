/// Unified error type returned by every client operation.
///
/// One variant per failure class a caller can act on: input rejected
/// locally, transport-level failure, server-side throttling, and
/// API-level rejection.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Caller-supplied input failed local validation. No request was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Transport failure after exhausting retries, an unparseable response
    /// body, or a payload that does not match the declared record shape.
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered 429.
    #[error("rate limit exceeded")]
    RateLimited,

    /// API-level rejection: an HTTP status of 400 or above, or a 2xx
    /// envelope reporting `success = false`.
    #[error("API error [{code}]: {message}")]
    Api { message: String, code: String },
}

/// Failure of a single HTTP exchange, before any classification.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("connect failure: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("transport failure: {0}")]
    Other(String),
}

impl TransportError {
    /// Connect and timeout failures are the only class the dispatcher
    /// retries; everything else surfaces on the first occurrence.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TransportError::Connect(_) | TransportError::Timeout(_))
    }
}
