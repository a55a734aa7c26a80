//! Synchronous call path.
//!
//! [`ParadigmClient`] here wraps the async client with a private
//! current-thread runtime and drives each call to completion on the
//! calling thread. Validation, rate limiting, retry, and error semantics
//! are the async implementation's, executed once; the blocking and async
//! handles of one instance share a single rate-limit window.
//!
//! Must not be used from within an async runtime; entering a nested
//! runtime panics.

use serde_json::Value;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::{
    Account, Balance, Block, CreateProposalRequest, CreateTransactionRequest, FeeEstimate, MlTask,
    MlTaskRequest, NetworkStats, Paginated, Proposal, TaskStatus, Transaction, TransactionReceipt,
    VoteOption,
};

pub struct ParadigmClient {
    inner: crate::ParadigmClient,
    runtime: tokio::runtime::Runtime,
}

impl ParadigmClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Network(format!("failed to start blocking runtime: {e}")))?;
        let inner = crate::ParadigmClient::new(config)?;
        Ok(Self { inner, runtime })
    }

    #[cfg(test)]
    pub(crate) fn with_transport(
        config: ClientConfig,
        transport: Box<dyn crate::transport::Transport>,
    ) -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Network(format!("failed to start blocking runtime: {e}")))?;
        let inner = crate::ParadigmClient::with_transport(config, transport)?;
        Ok(Self { inner, runtime })
    }

    /// The shared async client. Calls made on either handle draw from the
    /// same rate-limit window and the same connection pool.
    pub fn as_async(&self) -> &crate::ParadigmClient {
        &self.inner
    }

    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.inner.set_api_key(api_key);
    }

    /// Shut the client down; idempotent, applies to both call paths.
    pub fn close(&self) {
        self.inner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    pub fn get_health(&self) -> Result<Value, ClientError> {
        self.runtime.block_on(self.inner.get_health())
    }

    pub fn get_network_stats(&self) -> Result<NetworkStats, ClientError> {
        self.runtime.block_on(self.inner.get_network_stats())
    }

    pub fn get_account(&self, address: &str) -> Result<Account, ClientError> {
        self.runtime.block_on(self.inner.get_account(address))
    }

    pub fn get_balance(&self, address: &str) -> Result<Balance, ClientError> {
        self.runtime.block_on(self.inner.get_balance(address))
    }

    pub fn get_transaction(&self, hash: &str) -> Result<Transaction, ClientError> {
        self.runtime.block_on(self.inner.get_transaction(hash))
    }

    pub fn get_transaction_receipt(&self, hash: &str) -> Result<TransactionReceipt, ClientError> {
        self.runtime
            .block_on(self.inner.get_transaction_receipt(hash))
    }

    pub fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ClientError> {
        self.runtime.block_on(self.inner.create_transaction(request))
    }

    pub fn send_signed_transaction(
        &self,
        signed_transaction: &str,
    ) -> Result<Transaction, ClientError> {
        self.runtime
            .block_on(self.inner.send_signed_transaction(signed_transaction))
    }

    pub fn estimate_fee(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<FeeEstimate, ClientError> {
        self.runtime.block_on(self.inner.estimate_fee(request))
    }

    pub fn get_transactions(
        &self,
        page: u32,
        page_size: u32,
        address: Option<&str>,
    ) -> Result<Paginated<Transaction>, ClientError> {
        self.runtime
            .block_on(self.inner.get_transactions(page, page_size, address))
    }

    pub fn get_latest_block(&self) -> Result<Block, ClientError> {
        self.runtime.block_on(self.inner.get_latest_block())
    }

    pub fn get_block(&self, height: u64) -> Result<Block, ClientError> {
        self.runtime.block_on(self.inner.get_block(height))
    }

    pub fn create_ml_task(&self, request: &MlTaskRequest) -> Result<MlTask, ClientError> {
        self.runtime.block_on(self.inner.create_ml_task(request))
    }

    pub fn get_ml_task(&self, task_id: Uuid) -> Result<MlTask, ClientError> {
        self.runtime.block_on(self.inner.get_ml_task(task_id))
    }

    pub fn get_ml_tasks(
        &self,
        page: u32,
        page_size: u32,
        status: Option<TaskStatus>,
    ) -> Result<Paginated<MlTask>, ClientError> {
        self.runtime
            .block_on(self.inner.get_ml_tasks(page, page_size, status))
    }

    pub fn create_proposal(&self, request: &CreateProposalRequest) -> Result<Proposal, ClientError> {
        self.runtime.block_on(self.inner.create_proposal(request))
    }

    pub fn get_proposal(&self, proposal_id: Uuid) -> Result<Proposal, ClientError> {
        self.runtime.block_on(self.inner.get_proposal(proposal_id))
    }

    pub fn vote(&self, proposal_id: Uuid, option: VoteOption) -> Result<(), ClientError> {
        self.runtime.block_on(self.inner.vote(proposal_id, option))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::transport::mock::MockTransport;

    use super::*;

    fn client_over(transport: &Arc<MockTransport>) -> ParadigmClient {
        ParadigmClient::with_transport(
            ClientConfig::new("http://localhost:8080"),
            Box::new(Arc::clone(transport)),
        )
        .expect("test config must be valid")
    }

    #[test]
    fn blocking_call_drives_the_shared_core() {
        let transport = Arc::new(
            MockTransport::builder()
                .respond(
                    200,
                    serde_json::json!({"success": true, "data": {"status": "ok"}}),
                )
                .build(),
        );
        let client = client_over(&transport);

        let health = client.get_health().expect("must succeed");
        assert_eq!(health, serde_json::json!({"status": "ok"}));
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn blocking_validation_fails_without_any_request() {
        let transport = Arc::new(MockTransport::builder().build());
        let client = client_over(&transport);

        let err = client
            .get_account("not-an-address")
            .expect_err("must reject");
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn close_applies_to_both_handles() {
        let transport = Arc::new(MockTransport::builder().build());
        let client = client_over(&transport);

        client.close();
        assert!(client.is_closed());
        assert!(client.as_async().is_closed());
        let err = client.get_health().expect_err("must fail closed");
        assert!(err.to_string().contains("client is closed"));
        assert_eq!(transport.calls(), 0);
    }
}
