//! Core data types for the Sui ledger engine
//!
//! This module defines the typed form of one on-chain transaction as
//! reported by the ledger RPC, along with its attached balance changes,
//! object changes, events, and programmable-transaction call operations.
//! All values are transient: reconstructed per request from live RPC
//! responses and discarded when the request completes.

use serde::{Deserialize, Serialize};

/// Execution status of a transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TxStatus {
    /// Transaction executed successfully
    Success,
    /// Transaction aborted or failed
    Failure,
    /// Status missing from the RPC response
    Unknown,
}

impl TxStatus {
    /// Parse the `effects.status.status` string from an RPC response
    pub fn from_rpc(value: Option<&str>) -> Self {
        match value {
            Some("success") => TxStatus::Success,
            Some("failure") => TxStatus::Failure,
            _ => TxStatus::Unknown,
        }
    }
}

impl std::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxStatus::Success => write!(f, "success"),
            TxStatus::Failure => write!(f, "failure"),
            TxStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A signed movement of one asset type into or out of an address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceChange {
    /// Owner the change applies to; `None` when the RPC owner field could
    /// not be resolved to an address-like string
    pub owner: Option<String>,
    /// Full coin type string, e.g. `0x2::sui::SUI`
    pub coin_type: String,
    /// Signed amount in the asset's smallest unit; negative = debit
    pub amount: i128,
}

/// Kind of object change reported by transaction effects
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ObjectChangeKind {
    /// Object was created
    Created,
    /// Object was transferred to a new owner
    Transferred,
    /// Object was mutated in place
    Mutated,
    /// Object was deleted
    Deleted,
    /// Any other change kind, carried verbatim
    Other(String),
}

impl ObjectChangeKind {
    /// Parse the `type` field of an RPC object change
    pub fn from_rpc(value: &str) -> Self {
        match value {
            "created" => ObjectChangeKind::Created,
            "transferred" => ObjectChangeKind::Transferred,
            "mutated" => ObjectChangeKind::Mutated,
            "deleted" => ObjectChangeKind::Deleted,
            other => ObjectChangeKind::Other(other.to_string()),
        }
    }
}

/// One object change attached to a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectChange {
    /// What happened to the object
    pub kind: ObjectChangeKind,
    /// Move type of the object, when reported
    pub object_type: Option<String>,
}

/// One event emitted by a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Namespaced event type, e.g. `0xabc::pool::SwapEvent`
    pub event_type: String,
}

/// One call performed by a programmable transaction
///
/// Recipient arguments are resolved against the transaction's pure
/// address inputs at parse time, so downstream stages never see raw
/// input indices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CallOperation {
    /// Move function call with its `package::module::function` target
    MoveCall {
        /// Full call target
        target: String,
    },
    /// Transfer of owned objects to a recipient
    TransferObjects {
        /// Resolved recipient address, when the argument was a pure address
        recipient: Option<String>,
    },
    /// Splitting a coin into parts
    SplitCoins,
    /// Merging coins together
    MergeCoins,
    /// Legacy native-coin transfer
    TransferSui {
        /// Recipient address, when present in the arguments
        recipient: Option<String>,
    },
    /// Any other operation kind, carried verbatim
    Other(String),
}

/// One finalized transaction touching the queried wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique transaction digest; dedup key across directional queries
    pub digest: String,
    /// Milliseconds since epoch; `None` sorts as 0 (oldest)
    pub timestamp_ms: Option<u64>,
    /// Execution status
    pub status: TxStatus,
    /// Address that originated the transaction
    pub sender: Option<String>,
    /// Signed per-asset movements
    pub balance_changes: Vec<BalanceChange>,
    /// Object-level effects
    pub object_changes: Vec<ObjectChange>,
    /// Emitted events
    pub events: Vec<EventRecord>,
    /// Programmable-transaction calls
    pub call_operations: Vec<CallOperation>,
}

impl TransactionRecord {
    /// Timestamp used for sorting and window filtering; missing = 0
    pub fn effective_timestamp(&self) -> u64 {
        self.timestamp_ms.unwrap_or(0)
    }
}

/// Coin balance of an address, as reported by the balance query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinBalance {
    /// Address the balance belongs to
    pub address: String,
    /// Queried coin type
    pub coin_type: String,
    /// Total balance in the asset's smallest unit
    pub total_balance: u128,
}

/// One object owned by an address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedObject {
    /// Object id
    pub object_id: String,
    /// Move type, when reported
    pub object_type: Option<String>,
    /// Display name from object metadata, when present
    pub display_name: Option<String>,
}

/// Network identification and liveness data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStatus {
    /// Chain identifier string
    pub chain_id: String,
    /// Latest checkpoint sequence number
    pub latest_checkpoint: u64,
}
