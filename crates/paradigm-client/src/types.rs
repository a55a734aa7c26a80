//! Typed records the API serves and the request bodies it accepts.
//!
//! Records are read-only value objects reconstructed from response
//! payloads; the client never mutates them after construction. Addresses
//! and hashes are hex strings (`0x` + 40 / 64 hex chars), amounts are
//! integer base units.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One page of results as reported by the server.
///
/// A well-behaved server guarantees `items.len() <= page_size`,
/// `has_next == (page < total_pages)` and `has_prev == (page > 1)`.
/// Responses violating these pass through untouched; the client does not
/// repair server data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    pub balance: u64,
    pub nonce: u64,
    pub transaction_count: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub last_activity: Option<DateTime<Utc>>,
}

/// Balance breakdown for a single account at a given height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub address: String,
    pub balance: u64,
    pub pending_balance: u64,
    pub locked_balance: u64,
    pub block_height: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub amount: u64,
    pub fee: u64,
    pub gas_used: Option<u64>,
    pub gas_price: Option<u64>,
    pub nonce: u64,
    pub block_hash: Option<String>,
    pub block_height: Option<u64>,
    pub transaction_index: Option<u32>,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
    pub confirmations: u32,
    pub data: Option<Vec<u8>>,
}

/// Post-execution record for a confirmed transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub block_hash: String,
    pub block_height: u64,
    pub transaction_index: u32,
    pub gas_used: u64,
    pub gas_price: u64,
    /// `true` for successful execution.
    pub status: bool,
    pub logs: Vec<TransactionLog>,
    pub cumulative_gas_used: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionLog {
    pub address: String,
    pub topics: Vec<String>,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub gas_estimate: u64,
    pub gas_price: u64,
    pub total_fee: u64,
    /// Estimator confidence in `0.0..=1.0`.
    pub confidence: f64,
}

/// Abbreviated transaction as embedded in a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub amount: u64,
    pub fee: u64,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub hash: String,
    pub height: u64,
    pub timestamp: DateTime<Utc>,
    pub parent_hash: String,
    pub transaction_count: u32,
    pub transactions: Vec<TransactionSummary>,
    pub gas_used: u64,
    pub gas_limit: u64,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
    Failed,
    Cancelled,
}

impl TaskStatus {
    /// Wire name, as used for the `status` list filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Assigned => "Assigned",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Failed => "Failed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Normal,
    High,
    Critical,
}

/// A machine-learning workload scheduled on the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlTask {
    pub task_id: Uuid,
    pub task_type: String,
    pub status: TaskStatus,
    /// Completion fraction in `0.0..=1.0`.
    pub progress: f64,
    pub result: Option<serde_json::Value>,
    pub assigned_node: Option<String>,
    pub reward: u64,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub estimated_completion: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProposalType {
    ParameterChange { parameter: String, new_value: String },
    ProtocolUpgrade { version: String },
    TreasurySpending { recipient: String, amount: u64, purpose: String },
    Other { details: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    Draft,
    Active,
    Passed,
    Rejected,
    Executed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteOption {
    Yes,
    No,
    Abstain,
    NoWithVeto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub proposal_id: Uuid,
    pub title: String,
    pub description: String,
    pub proposer: String,
    pub proposal_type: ProposalType,
    pub status: ProposalStatus,
    pub voting_start: DateTime<Utc>,
    pub voting_end: DateTime<Utc>,
    pub yes_votes: u64,
    pub no_votes: u64,
    pub abstain_votes: u64,
    pub total_votes: u64,
    pub quorum: f64,
    pub pass_threshold: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub total_transactions: u64,
    pub total_accounts: u64,
    pub current_block_height: u64,
    pub average_block_time: f64,
    pub transactions_per_second: f64,
    pub active_validators: u32,
    pub total_staked: u64,
    pub market_cap: Option<f64>,
    pub price_usd: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

// Request bodies for mutating operations.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub to: String,
    pub amount: u64,
    pub data: Option<Vec<u8>>,
    pub gas_limit: Option<u64>,
    pub gas_price: Option<u64>,
    pub nonce: Option<u64>,
}

impl CreateTransactionRequest {
    pub fn new(to: impl Into<String>, amount: u64) -> Self {
        Self {
            to: to.into(),
            amount,
            data: None,
            gas_limit: None,
            gas_price: None,
            nonce: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlTaskRequest {
    pub task_type: String,
    pub parameters: serde_json::Value,
    pub data_source: Option<String>,
    pub priority: Option<TaskPriority>,
    /// Network difficulty class in `1..=10`.
    pub difficulty: Option<u32>,
    pub reward: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProposalRequest {
    pub title: String,
    pub description: String,
    pub proposal_type: ProposalType,
    pub voting_period_hours: Option<u64>,
    pub initial_deposit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_decodes_from_wire_shape() {
        let raw = serde_json::json!({
            "items": [1, 2, 3],
            "total_count": 45,
            "page": 3,
            "page_size": 20,
            "total_pages": 3,
            "has_next": false,
            "has_prev": true
        });
        let page: Paginated<u64> = serde_json::from_value(raw).expect("must decode");
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_count, 45);
        assert_eq!(page.has_next, page.page < page.total_pages);
        assert_eq!(page.has_prev, page.page > 1);
    }

    #[test]
    fn status_enums_use_wire_names() {
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).expect("must serialize"),
            serde_json::json!("InProgress")
        );
        assert_eq!(
            serde_json::to_value(VoteOption::NoWithVeto).expect("must serialize"),
            serde_json::json!("NoWithVeto")
        );
        assert_eq!(TaskStatus::InProgress.as_str(), "InProgress");
    }

    #[test]
    fn proposal_type_is_externally_tagged() {
        let raw = serde_json::to_value(ProposalType::ProtocolUpgrade {
            version: "2.0".into(),
        })
        .expect("must serialize");
        assert_eq!(raw, serde_json::json!({"ProtocolUpgrade": {"version": "2.0"}}));
    }

    #[test]
    fn transaction_decodes_with_null_optionals() {
        let raw = serde_json::json!({
            "hash": "0x11", "from": "0xaa", "to": "0xbb",
            "amount": 1000, "fee": 10,
            "gas_used": null, "gas_price": null,
            "nonce": 7,
            "block_hash": null, "block_height": null, "transaction_index": null,
            "status": "Pending",
            "timestamp": "2026-01-05T12:00:00Z",
            "confirmations": 0,
            "data": null
        });
        let tx: Transaction = serde_json::from_value(raw).expect("must decode");
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert!(tx.block_height.is_none());
    }
}
