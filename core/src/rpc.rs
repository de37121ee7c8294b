//! Ledger RPC client for the Sui fullnode JSON-RPC interface
//!
//! Two layers live here: the [`LedgerClient`] trait, which is the seam the
//! rest of the engine is written against, and [`SuiRpcClient`], a thin
//! JSON-RPC 2.0 transport over `reqwest` that implements it. The
//! transport issues one request per call with the configured timeout;
//! there is deliberately no retry, pooling, or failover — a failed query
//! degrades at the fetch layer instead.
//!
//! Directional history queries always request effects, balance changes,
//! object changes, events, and input data; the classifier depends on all
//! five being present.
//!
//! # Example
//!
//! ```no_run
//! use sui_ledger_core::config::LedgerConfig;
//! use sui_ledger_core::rpc::{LedgerClient, SuiRpcClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LedgerConfig::new("0x4f2e63be8e7fe287836e29cde6f3d5cbc96eefd0c0e3f3747668faa2ae7324b0");
//!     let client = SuiRpcClient::new(&config)?;
//!     let sent = client.query_by_sender(&config.wallet_address, 50).await?;
//!     println!("{} sent transactions", sent.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::LedgerConfig;
use crate::error::{Error, Result};
use crate::types::{
    BalanceChange, CallOperation, CoinBalance, EventRecord, NetworkStatus, ObjectChange,
    ObjectChangeKind, OwnedObject, TransactionRecord, TxStatus,
};

/// Coin type used for native balance queries
const NATIVE_COIN_TYPE: &str = "0x2::sui::SUI";

/// Interface the engine needs from the ledger
///
/// Directional queries return full-detail transaction records, already
/// parsed into the engine's typed model. Implementations must be usable
/// from concurrent in-flight calls.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Transactions where `address` is the sender, newest first
    async fn query_by_sender(&self, address: &str, limit: usize)
        -> Result<Vec<TransactionRecord>>;

    /// Transactions where `address` is a recipient, newest first
    async fn query_by_recipient(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>>;

    /// Native-coin balance of `address`
    async fn balance(&self, address: &str) -> Result<CoinBalance>;

    /// Objects owned by `address`
    async fn owned_objects(&self, address: &str) -> Result<Vec<OwnedObject>>;

    /// Chain identification and latest checkpoint
    async fn network_status(&self) -> Result<NetworkStatus>;
}

/// JSON-RPC 2.0 client for a Sui fullnode
pub struct SuiRpcClient {
    http: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default)]
    data: Vec<T>,
}

impl SuiRpcClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &LedgerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            url: config.rpc_url.clone(),
        })
    }

    /// Issue one JSON-RPC call and deserialize its `result`
    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        debug!(method, "issuing JSON-RPC request");
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let envelope: RpcEnvelope<T> = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = envelope.error {
            return Err(Error::rpc(format!("{} ({})", err.message, err.code)));
        }
        envelope
            .result
            .ok_or_else(|| Error::rpc(format!("{}: empty response", method)))
    }

    /// Query transaction blocks matching `filter`, full detail, newest first
    async fn query_transaction_blocks(
        &self,
        filter: Value,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>> {
        let query = json!({
            "filter": filter,
            "options": {
                "showEffects": true,
                "showBalanceChanges": true,
                "showObjectChanges": true,
                "showEvents": true,
                "showInput": true,
            },
        });
        let page: Page<Value> = self
            .call(
                "suix_queryTransactionBlocks",
                json!([query, null, limit, true]),
            )
            .await?;
        Ok(page.data.iter().map(parse_transaction).collect())
    }
}

#[async_trait]
impl LedgerClient for SuiRpcClient {
    async fn query_by_sender(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>> {
        self.query_transaction_blocks(json!({ "FromAddress": address }), limit)
            .await
    }

    async fn query_by_recipient(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>> {
        self.query_transaction_blocks(json!({ "ToAddress": address }), limit)
            .await
    }

    async fn balance(&self, address: &str) -> Result<CoinBalance> {
        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawBalance {
            coin_type: String,
            total_balance: String,
        }

        let raw: RawBalance = self
            .call("suix_getBalance", json!([address, NATIVE_COIN_TYPE]))
            .await?;
        let total_balance = raw
            .total_balance
            .parse::<u128>()
            .map_err(|_| Error::rpc(format!("unparseable balance: {}", raw.total_balance)))?;
        Ok(CoinBalance {
            address: address.to_string(),
            coin_type: raw.coin_type,
            total_balance,
        })
    }

    async fn owned_objects(&self, address: &str) -> Result<Vec<OwnedObject>> {
        let query = json!({
            "options": {
                "showType": true,
                "showContent": true,
                "showDisplay": true,
            },
        });
        let page: Page<Value> = self
            .call("suix_getOwnedObjects", json!([address, query]))
            .await?;
        Ok(page.data.iter().map(parse_owned_object).collect())
    }

    async fn network_status(&self) -> Result<NetworkStatus> {
        let chain_id: String = self.call("sui_getChainIdentifier", json!([])).await?;
        let checkpoint: String = self
            .call("sui_getLatestCheckpointSequenceNumber", json!([]))
            .await?;
        let latest_checkpoint = checkpoint
            .parse::<u64>()
            .map_err(|_| Error::rpc(format!("unparseable checkpoint: {}", checkpoint)))?;
        Ok(NetworkStatus {
            chain_id,
            latest_checkpoint,
        })
    }
}

// --- wire parsing ---------------------------------------------------------
//
// The fullnode reports numbers inconsistently (timestampMs and amounts come
// back as strings), owners in four shapes, and programmable-transaction
// recipients as indices into a separate inputs table. Everything is
// normalized here so later stages only see the typed model; malformed
// fields degrade to None rather than failing the record.

/// Parse one `SuiTransactionBlockResponse` JSON value
pub fn parse_transaction(raw: &Value) -> TransactionRecord {
    let digest = raw
        .get("digest")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let timestamp_ms = raw.get("timestampMs").and_then(lenient_u64);

    let status = TxStatus::from_rpc(
        raw.pointer("/effects/status/status").and_then(Value::as_str),
    );

    let sender = raw
        .pointer("/transaction/data/sender")
        .and_then(Value::as_str)
        .map(str::to_string);

    let balance_changes = raw
        .get("balanceChanges")
        .and_then(Value::as_array)
        .map(|changes| changes.iter().map(parse_balance_change).collect())
        .unwrap_or_default();

    let object_changes = raw
        .get("objectChanges")
        .and_then(Value::as_array)
        .map(|changes| changes.iter().map(parse_object_change).collect())
        .unwrap_or_default();

    let events = raw
        .get("events")
        .and_then(Value::as_array)
        .map(|events| {
            events
                .iter()
                .filter_map(|event| event.get("type").and_then(Value::as_str))
                .map(|event_type| EventRecord {
                    event_type: event_type.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    let call_operations = parse_call_operations(raw);

    TransactionRecord {
        digest,
        timestamp_ms,
        status,
        sender,
        balance_changes,
        object_changes,
        events,
        call_operations,
    }
}

/// Accept a JSON number or a stringified number
fn lenient_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn lenient_i128(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => n.as_i64().map(i128::from),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn parse_balance_change(raw: &Value) -> BalanceChange {
    BalanceChange {
        owner: raw.get("owner").and_then(resolve_owner),
        coin_type: raw
            .get("coinType")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        amount: raw.get("amount").and_then(lenient_i128).unwrap_or(0),
    }
}

/// Resolve the polymorphic owner field to an address-like string
///
/// Owners arrive as a bare string, `{"AddressOwner": ..}`,
/// `{"ObjectOwner": ..}`, or a shared marker object. Shared owners
/// collapse to a `"shared"` marker; truly absent owners resolve to
/// `None` and their balance lines are dropped downstream.
fn resolve_owner(owner: &Value) -> Option<String> {
    match owner {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(fields) => {
            if let Some(address) = fields.get("AddressOwner").and_then(Value::as_str) {
                return Some(address.to_string());
            }
            if let Some(address) = fields.get("ObjectOwner").and_then(Value::as_str) {
                return Some(address.to_string());
            }
            if fields.contains_key("Shared") {
                return Some("shared".to_string());
            }
            None
        }
        _ => None,
    }
}

fn parse_object_change(raw: &Value) -> ObjectChange {
    ObjectChange {
        kind: ObjectChangeKind::from_rpc(
            raw.get("type").and_then(Value::as_str).unwrap_or_default(),
        ),
        object_type: raw
            .get("objectType")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

/// Parse programmable-transaction commands, resolving recipient arguments
fn parse_call_operations(raw: &Value) -> Vec<CallOperation> {
    let Some(tx) = raw.pointer("/transaction/data/transaction") else {
        return Vec::new();
    };
    if tx.get("kind").and_then(Value::as_str) != Some("ProgrammableTransaction") {
        return Vec::new();
    }
    let inputs = tx.get("inputs").and_then(Value::as_array);
    let Some(commands) = tx.get("transactions").and_then(Value::as_array) else {
        return Vec::new();
    };

    commands
        .iter()
        .filter_map(|command| parse_command(command, inputs))
        .collect()
}

fn parse_command(command: &Value, inputs: Option<&Vec<Value>>) -> Option<CallOperation> {
    let fields = command.as_object()?;

    if let Some(call) = fields.get("MoveCall") {
        let package = call.get("package").and_then(Value::as_str).unwrap_or("?");
        let module = call.get("module").and_then(Value::as_str).unwrap_or("?");
        let function = call.get("function").and_then(Value::as_str).unwrap_or("?");
        return Some(CallOperation::MoveCall {
            target: format!("{}::{}::{}", package, module, function),
        });
    }
    if let Some(args) = fields.get("TransferObjects") {
        // Second argument names the recipient, usually as an input index.
        let recipient = args
            .as_array()
            .and_then(|args| args.get(1))
            .and_then(|arg| resolve_address_argument(arg, inputs));
        return Some(CallOperation::TransferObjects { recipient });
    }
    if fields.contains_key("SplitCoins") {
        return Some(CallOperation::SplitCoins);
    }
    if fields.contains_key("MergeCoins") {
        return Some(CallOperation::MergeCoins);
    }
    if let Some(transfer) = fields.get("TransferSui") {
        let recipient = transfer
            .get("arguments")
            .and_then(Value::as_array)
            .and_then(|args| args.get(1))
            .and_then(Value::as_str)
            .map(str::to_string);
        return Some(CallOperation::TransferSui { recipient });
    }
    if let Some(kind) = fields.get("kind").and_then(Value::as_str) {
        // Legacy command objects carry an explicit kind discriminator.
        if kind == "TransferSui" {
            let recipient = fields
                .get("arguments")
                .and_then(Value::as_array)
                .and_then(|args| args.get(1))
                .and_then(Value::as_str)
                .map(str::to_string);
            return Some(CallOperation::TransferSui { recipient });
        }
        return Some(CallOperation::Other(kind.to_string()));
    }

    fields
        .keys()
        .next()
        .map(|kind| CallOperation::Other(kind.clone()))
}

/// Resolve `{"Input": n}` through the pure address inputs table
fn resolve_address_argument(arg: &Value, inputs: Option<&Vec<Value>>) -> Option<String> {
    if let Some(address) = arg.as_str() {
        return Some(address.to_string());
    }
    let index = arg.get("Input").and_then(Value::as_u64)? as usize;
    let input = inputs?.get(index)?;
    if input.get("type").and_then(Value::as_str) == Some("pure")
        && input.get("valueType").and_then(Value::as_str) == Some("address")
    {
        return input
            .get("value")
            .and_then(Value::as_str)
            .map(str::to_string);
    }
    None
}

fn parse_owned_object(raw: &Value) -> OwnedObject {
    OwnedObject {
        object_id: raw
            .pointer("/data/objectId")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        object_type: raw
            .pointer("/data/type")
            .and_then(Value::as_str)
            .map(str::to_string),
        display_name: raw
            .pointer("/data/display/data/name")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}
