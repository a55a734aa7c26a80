//! Scripted transport double for dispatcher and facade tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::TransportError;

use super::{RawResponse, RequestAttempt, Transport};

enum Step {
    Respond(u16, Vec<u8>),
    Fail(TransportError),
}

/// Pops one scripted step per `send` call and records every attempt for
/// assertion.
pub(crate) struct MockTransport {
    script: Mutex<VecDeque<Step>>,
    sent: Mutex<Vec<RequestAttempt>>,
    calls: AtomicUsize,
}

impl MockTransport {
    pub(crate) fn builder() -> MockTransportBuilder {
        MockTransportBuilder { script: VecDeque::new() }
    }

    /// Number of `send` calls observed so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every attempt passed to `send`, in order.
    pub(crate) fn sent(&self) -> Vec<RequestAttempt> {
        self.sent.lock().expect("sent log lock poisoned").clone()
    }
}

pub(crate) struct MockTransportBuilder {
    script: VecDeque<Step>,
}

impl MockTransportBuilder {
    /// Script a response with the given status and JSON body.
    pub(crate) fn respond(mut self, status: u16, body: serde_json::Value) -> Self {
        let bytes = serde_json::to_vec(&body).expect("scripted body must serialize");
        self.script.push_back(Step::Respond(status, bytes));
        self
    }

    /// Script a response with raw (possibly non-JSON) body bytes.
    pub(crate) fn respond_raw(mut self, status: u16, body: &[u8]) -> Self {
        self.script.push_back(Step::Respond(status, body.to_vec()));
        self
    }

    /// Script a transport-level failure.
    pub(crate) fn fail(mut self, err: TransportError) -> Self {
        self.script.push_back(Step::Fail(err));
        self
    }

    /// Script the same transport-level failure `n` times.
    pub(crate) fn fail_times(mut self, err: TransportError, n: usize) -> Self {
        for _ in 0..n {
            self.script.push_back(Step::Fail(err.clone()));
        }
        self
    }

    pub(crate) fn build(self) -> MockTransport {
        MockTransport {
            script: Mutex::new(self.script),
            sent: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, attempt: &RequestAttempt) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent
            .lock()
            .expect("sent log lock poisoned")
            .push(attempt.clone());

        let step = self
            .script
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .expect("mock transport script exhausted");

        match step {
            Step::Respond(status, body) => Ok(RawResponse { status, body }),
            Step::Fail(err) => Err(err),
        }
    }
}

// Tests hold on to the mock for call-count and attempt assertions after
// handing the dispatcher its transport, so the shared handle is itself a
// transport.
#[async_trait]
impl Transport for std::sync::Arc<MockTransport> {
    async fn send(&self, attempt: &RequestAttempt) -> Result<RawResponse, TransportError> {
        (**self).send(attempt).await
    }
}
