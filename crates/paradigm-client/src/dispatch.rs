//! Request dispatch: rate-limiter admission, bounded retries with
//! exponential backoff, and response classification.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use reqwest::Method;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::envelope;
use crate::error::ClientError;
use crate::rate_limit::SlidingWindow;
use crate::transport::{RequestAttempt, Transport};

/// Drives every call end to end.
///
/// Per call the dispatcher moves `Attempting(k) -> Success | Fail |
/// RetryWait(k) -> Attempting(k + 1)`, with `k` bounded by the configured
/// retry count. Each attempt, retries included, re-enters rate limiting
/// before it is issued. Only connect and timeout failures re-enter the
/// loop; any HTTP status, 5xx included, is final and goes straight to
/// classification.
pub(crate) struct Dispatcher {
    transport: Box<dyn Transport>,
    limiter: SlidingWindow,
    retries: u32,
    api_key: RwLock<Option<String>>,
    closed: AtomicBool,
}

impl Dispatcher {
    pub(crate) fn new(config: &ClientConfig, transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            limiter: SlidingWindow::new(config.rate_limit_quota, config.rate_limit_window),
            retries: config.retries,
            api_key: RwLock::new(config.api_key.clone()),
            closed: AtomicBool::new(false),
        }
    }

    /// Rotate the key sent as `X-API-Key` on subsequent attempts.
    pub(crate) fn set_api_key(&self, api_key: String) {
        *self.api_key.write().expect("api key lock poisoned") = Some(api_key);
    }

    /// Stop issuing requests. Idempotent; every `execute` after the first
    /// `close` fails without touching the limiter or the network.
    pub(crate) fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ClientError> {
        if self.is_closed() {
            return Err(ClientError::Network("client is closed".to_owned()));
        }

        let mut attempt: u32 = 0;
        loop {
            self.limiter.acquire().await;

            let request = RequestAttempt {
                method: method.clone(),
                path: path.to_owned(),
                query: query.clone(),
                body: body.clone(),
                attempt,
                api_key: self.api_key.read().expect("api key lock poisoned").clone(),
            };
            debug!(
                http.method = %request.method,
                http.path = path,
                http.attempt = attempt,
                "dispatching request"
            );

            match self.transport.send(&request).await {
                Ok(response) => {
                    debug!(
                        http.method = %request.method,
                        http.path = path,
                        http.status = response.status,
                        body_len = response.body.len(),
                        "response received"
                    );
                    return envelope::interpret(response.status, &response.body);
                }
                Err(err) if err.is_retryable() => {
                    if attempt == self.retries {
                        return Err(ClientError::Network(format!(
                            "request failed after {} retries: {err}",
                            self.retries
                        )));
                    }
                    let backoff = Duration::from_secs(1u64 << attempt.min(62));
                    warn!(
                        http.path = path,
                        http.attempt = attempt,
                        backoff_secs = backoff.as_secs(),
                        error = %err,
                        "transport failure, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(err) => return Err(ClientError::Network(err.to_string())),
            }
        }
    }
}
