//! Typed operations over the Paradigm network REST API.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

use crate::config::{ClientConfig, Network};
use crate::dispatch::Dispatcher;
use crate::error::ClientError;
use crate::transport::HttpTransport;
use crate::types::{
    Account, Balance, Block, CreateProposalRequest, CreateTransactionRequest, FeeEstimate, MlTask,
    MlTaskRequest, NetworkStats, Paginated, Proposal, TaskStatus, Transaction, TransactionReceipt,
    VoteOption,
};
use crate::validate;

/// Asynchronous client for the Paradigm network REST API.
///
/// One instance owns one connection pool and one rate-limit window; every
/// call made through it, including via the [`crate::blocking`] wrapper,
/// draws from both. Operations validate their inputs locally before
/// anything is dispatched, so a malformed address or amount costs no
/// network traffic.
pub struct ParadigmClient {
    config: ClientConfig,
    dispatcher: Dispatcher,
}

impl ParadigmClient {
    /// Validate `config` and construct a client. No request is issued
    /// until the first operation.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let transport = HttpTransport::new(config.api_root(), config.timeout);
        let dispatcher = Dispatcher::new(&config, Box::new(transport));
        Ok(Self { config, dispatcher })
    }

    #[cfg(test)]
    pub(crate) fn with_transport(
        config: ClientConfig,
        transport: Box<dyn crate::transport::Transport>,
    ) -> Result<Self, ClientError> {
        config.validate()?;
        let dispatcher = Dispatcher::new(&config, transport);
        Ok(Self { config, dispatcher })
    }

    /// Network this client was configured for.
    pub fn network(&self) -> Network {
        self.config.network
    }

    /// Rotate the API key; subsequent requests carry the new value.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.dispatcher.set_api_key(api_key.into());
    }

    /// Shut the client down. Idempotent; every call after this fails
    /// immediately with a network error instead of reaching the wire.
    pub fn close(&self) {
        self.dispatcher.close();
    }

    pub fn is_closed(&self) -> bool {
        self.dispatcher.is_closed()
    }

    // Health and status

    /// `GET /health`: liveness payload, passed through undecoded.
    pub async fn get_health(&self) -> Result<serde_json::Value, ClientError> {
        self.dispatcher
            .execute(Method::GET, "/health", Vec::new(), None)
            .await
    }

    pub async fn get_network_stats(&self) -> Result<NetworkStats, ClientError> {
        let payload = self
            .dispatcher
            .execute(Method::GET, "/analytics/network-stats", Vec::new(), None)
            .await?;
        decode(payload)
    }

    // Accounts

    pub async fn get_account(&self, address: &str) -> Result<Account, ClientError> {
        validate::address(address)?;
        let payload = self
            .dispatcher
            .execute(Method::GET, &format!("/accounts/{address}"), Vec::new(), None)
            .await?;
        decode(payload)
    }

    pub async fn get_balance(&self, address: &str) -> Result<Balance, ClientError> {
        validate::address(address)?;
        let payload = self
            .dispatcher
            .execute(
                Method::GET,
                &format!("/accounts/{address}/balance"),
                Vec::new(),
                None,
            )
            .await?;
        decode(payload)
    }

    // Transactions

    pub async fn get_transaction(&self, hash: &str) -> Result<Transaction, ClientError> {
        validate::hash(hash)?;
        let payload = self
            .dispatcher
            .execute(Method::GET, &format!("/transactions/{hash}"), Vec::new(), None)
            .await?;
        decode(payload)
    }

    pub async fn get_transaction_receipt(
        &self,
        hash: &str,
    ) -> Result<TransactionReceipt, ClientError> {
        validate::hash(hash)?;
        let payload = self
            .dispatcher
            .execute(
                Method::GET,
                &format!("/transactions/{hash}/receipt"),
                Vec::new(),
                None,
            )
            .await?;
        decode(payload)
    }

    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ClientError> {
        validate::address(&request.to)?;
        validate::amount(request.amount)?;
        let payload = self
            .dispatcher
            .execute(Method::POST, "/transactions", Vec::new(), Some(to_body(request)))
            .await?;
        decode(payload)
    }

    /// Submit an externally signed transaction. The signed blob is handed
    /// to the node verbatim.
    pub async fn send_signed_transaction(
        &self,
        signed_transaction: &str,
    ) -> Result<Transaction, ClientError> {
        let body = json!({ "signed_transaction": signed_transaction });
        let payload = self
            .dispatcher
            .execute(Method::POST, "/transactions/send", Vec::new(), Some(body))
            .await?;
        decode(payload)
    }

    pub async fn estimate_fee(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<FeeEstimate, ClientError> {
        validate::address(&request.to)?;
        validate::amount(request.amount)?;
        let payload = self
            .dispatcher
            .execute(
                Method::POST,
                "/transactions/estimate-fee",
                Vec::new(),
                Some(to_body(request)),
            )
            .await?;
        decode(payload)
    }

    /// List transactions, newest first, optionally scoped to one address.
    pub async fn get_transactions(
        &self,
        page: u32,
        page_size: u32,
        address: Option<&str>,
    ) -> Result<Paginated<Transaction>, ClientError> {
        let path = match address {
            Some(address) => {
                validate::address(address)?;
                format!("/addresses/{address}/transactions")
            }
            None => "/transactions".to_owned(),
        };
        let payload = self
            .dispatcher
            .execute(Method::GET, &path, page_query(page, page_size), None)
            .await?;
        decode(payload)
    }

    // Blocks

    pub async fn get_latest_block(&self) -> Result<Block, ClientError> {
        let payload = self
            .dispatcher
            .execute(Method::GET, "/blockchain/latest-block", Vec::new(), None)
            .await?;
        decode(payload)
    }

    pub async fn get_block(&self, height: u64) -> Result<Block, ClientError> {
        let payload = self
            .dispatcher
            .execute(
                Method::GET,
                &format!("/blockchain/blocks/{height}"),
                Vec::new(),
                None,
            )
            .await?;
        decode(payload)
    }

    // ML tasks

    pub async fn create_ml_task(&self, request: &MlTaskRequest) -> Result<MlTask, ClientError> {
        let payload = self
            .dispatcher
            .execute(Method::POST, "/ml-tasks", Vec::new(), Some(to_body(request)))
            .await?;
        decode(payload)
    }

    pub async fn get_ml_task(&self, task_id: Uuid) -> Result<MlTask, ClientError> {
        let payload = self
            .dispatcher
            .execute(Method::GET, &format!("/ml-tasks/{task_id}"), Vec::new(), None)
            .await?;
        decode(payload)
    }

    pub async fn get_ml_tasks(
        &self,
        page: u32,
        page_size: u32,
        status: Option<TaskStatus>,
    ) -> Result<Paginated<MlTask>, ClientError> {
        let mut query = page_query(page, page_size);
        if let Some(status) = status {
            query.push(("status".to_owned(), status.as_str().to_owned()));
        }
        let payload = self
            .dispatcher
            .execute(Method::GET, "/ml-tasks", query, None)
            .await?;
        decode(payload)
    }

    // Governance

    pub async fn create_proposal(
        &self,
        request: &CreateProposalRequest,
    ) -> Result<Proposal, ClientError> {
        validate::amount(request.initial_deposit)?;
        let payload = self
            .dispatcher
            .execute(
                Method::POST,
                "/governance/proposals",
                Vec::new(),
                Some(to_body(request)),
            )
            .await?;
        decode(payload)
    }

    pub async fn get_proposal(&self, proposal_id: Uuid) -> Result<Proposal, ClientError> {
        let payload = self
            .dispatcher
            .execute(
                Method::GET,
                &format!("/governance/proposals/{proposal_id}"),
                Vec::new(),
                None,
            )
            .await?;
        decode(payload)
    }

    /// Cast a vote. The server acknowledges with an empty payload.
    pub async fn vote(&self, proposal_id: Uuid, option: VoteOption) -> Result<(), ClientError> {
        let body = json!({ "option": option });
        self.dispatcher
            .execute(
                Method::POST,
                &format!("/governance/proposals/{proposal_id}/vote"),
                Vec::new(),
                Some(body),
            )
            .await?;
        Ok(())
    }
}

/// Reconstruct a typed record from a response payload.
fn decode<T: DeserializeOwned>(payload: serde_json::Value) -> Result<T, ClientError> {
    serde_json::from_value(payload)
        .map_err(|e| ClientError::Network(format!("malformed payload: {e}")))
}

fn to_body<T: serde::Serialize>(request: &T) -> serde_json::Value {
    serde_json::to_value(request).expect("request types serialize to JSON")
}

fn page_query(page: u32, page_size: u32) -> Vec<(String, String)> {
    vec![
        ("page".to_owned(), page.to_string()),
        ("page_size".to_owned(), page_size.to_string()),
    ]
}
