//! Sui Ledger Core Library
//!
//! This library reconstructs a wallet's transaction history from the Sui
//! fullnode JSON-RPC interface and renders it for conversational
//! consumers. It resolves free-form time filters into concrete windows,
//! fetches and merges directional transaction queries, classifies each
//! record into a human-readable summary, and aggregates signed balance
//! movements into sent/received/net totals.
//!
//! # Features
//!
//! - **Time Window Resolution**: "today", "yesterday", "last 7 days" and
//!   friends become concrete local-time windows
//! - **Dual-Query Fetching**: concurrent sender/recipient queries with
//!   partial-failure tolerance, digest dedup, and descending sort
//! - **Transaction Classification**: balance changes, object changes,
//!   events, and programmable calls become readable one-liners
//! - **Summary Aggregation**: SUI and USDC sent/received/net totals
//! - **Report Rendering**: finished text blocks for agent tools or CLIs
//!
//! # Quick Start
//!
//! ```no_run
//! use sui_ledger_core::config::LedgerConfig;
//! use sui_ledger_core::engine::LedgerEngine;
//! use sui_ledger_core::rpc::SuiRpcClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LedgerConfig::from_env()?;
//!     let client = SuiRpcClient::new(&config)?;
//!     let engine = LedgerEngine::new(client, config);
//!
//!     let report = engine.transaction_history(Some("last 7 days")).await;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

pub mod asset;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod report;
pub mod rpc;
pub mod summary;
pub mod types;
pub mod window;

// Re-exports for convenience
pub use asset::AssetClass;
pub use classify::{classify, ClassifiedTransaction};
pub use config::{LedgerConfig, Network};
pub use engine::LedgerEngine;
pub use error::{Error, Result};
pub use fetch::fetch_history;
pub use rpc::{LedgerClient, SuiRpcClient};
pub use summary::{aggregate, AssetTotals, CoinSummary};
pub use types::{BalanceChange, TransactionRecord, TxStatus};
pub use window::TimeWindow;

/// Prelude module for easy importing of common types
pub mod prelude {
    pub use super::{
        aggregate, classify, fetch_history, AssetClass, AssetTotals, BalanceChange,
        ClassifiedTransaction, CoinSummary, Error, LedgerClient, LedgerConfig, LedgerEngine,
        Network, Result, SuiRpcClient, TimeWindow, TransactionRecord, TxStatus,
    };
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Library name
pub const NAME: &str = "sui-ledger-core";
/// Page size for each directional transaction query
pub const QUERY_PAGE_SIZE: usize = 50;
