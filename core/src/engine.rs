//! The ledger engine: tool-facing operations over one wallet
//!
//! Each operation owns its whole fetch-classify-aggregate pipeline and
//! returns finished report text. Nothing here throws at the caller:
//! failures the pipeline cannot absorb are embedded in the returned
//! string, and an empty result gets its own message so callers can tell
//! "nothing happened" from "something broke".
//!
//! # Example
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
//!     println!("{}", engine.transaction_history(Some("last 7 days")).await);
//!     println!("{}", engine.coin_summary(None).await);
//!     Ok(())
//! }
//! ```

use tracing::{error, info, instrument};

use crate::classify::{classify, shorten_address};
use crate::config::LedgerConfig;
use crate::error::Result;
use crate::fetch::fetch_history;
use crate::report;
use crate::rpc::LedgerClient;
use crate::summary::aggregate;
use crate::window::TimeWindow;

/// History and summary operations bound to one wallet and one client
pub struct LedgerEngine<C> {
    client: C,
    config: LedgerConfig,
}

impl<C: LedgerClient> LedgerEngine<C> {
    /// Bind a client to the wallet named in `config`
    pub fn new(client: C, config: LedgerConfig) -> Self {
        Self { client, config }
    }

    /// The engine's read-only configuration
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Classified transaction history, optionally narrowed by filter text
    #[instrument(skip(self))]
    pub async fn transaction_history(&self, filter: Option<&str>) -> String {
        match self.try_transaction_history(filter).await {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "transaction history failed");
                format!(
                    "Error fetching transaction history: {}. Please try again.",
                    err
                )
            }
        }
    }

    async fn try_transaction_history(&self, filter: Option<&str>) -> Result<String> {
        let window = TimeWindow::resolve(filter);
        let wallet = &self.config.wallet_address;
        info!(
            wallet = %shorten_address(wallet),
            filter = %window.label,
            "fetching transaction history"
        );

        let records = fetch_history(
            &self.client,
            wallet,
            window.start_ms(),
            self.config.query_page_size,
        )
        .await?;

        if records.is_empty() {
            return Ok(report::no_history_message(wallet));
        }

        let display: Vec<_> = records
            .iter()
            .take(report::DISPLAY_LIMIT)
            .map(|record| classify(record, wallet))
            .collect();
        Ok(report::history_report(&window, &display, records.len()))
    }

    /// Sent/received totals for SUI and USDC over the filtered window
    #[instrument(skip(self))]
    pub async fn coin_summary(&self, filter: Option<&str>) -> String {
        match self.try_coin_summary(filter).await {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "coin summary failed");
                format!("Error calculating SUI summary: {}. Please try again.", err)
            }
        }
    }

    async fn try_coin_summary(&self, filter: Option<&str>) -> Result<String> {
        let window = TimeWindow::resolve(filter);
        let wallet = &self.config.wallet_address;
        info!(
            wallet = %shorten_address(wallet),
            filter = %window.label,
            "calculating coin summary"
        );

        let records = fetch_history(
            &self.client,
            wallet,
            window.start_ms(),
            self.config.query_page_size,
        )
        .await?;

        if records.is_empty() {
            return Ok(report::no_transactions_message(wallet, &window));
        }

        let summary = aggregate(&records);
        Ok(report::summary_report(&window, &summary))
    }

    /// Native balance of the given address; `my`/`mine`/none means the
    /// engine's own wallet
    #[instrument(skip(self))]
    pub async fn balance(&self, address: Option<&str>) -> String {
        let target = self.resolve_target(address);
        match self.client.balance(target).await {
            Ok(balance) => report::balance_report(&balance),
            Err(err) => {
                error!(error = %err, "balance lookup failed");
                format!("Error getting balance: {}", err)
            }
        }
    }

    /// Objects owned by the given address
    #[instrument(skip(self))]
    pub async fn owned_objects(&self, address: Option<&str>) -> String {
        let target = self.resolve_target(address);
        match self.client.owned_objects(target).await {
            Ok(objects) => report::objects_report(target, &objects),
            Err(err) => {
                error!(error = %err, "owned-objects lookup failed");
                format!("Error getting owned objects: {}", err)
            }
        }
    }

    /// Network identification and liveness
    #[instrument(skip(self))]
    pub async fn network_status(&self) -> String {
        match self.client.network_status().await {
            Ok(status) => {
                report::network_report(&self.config, &status.chain_id, status.latest_checkpoint)
            }
            Err(err) => {
                error!(error = %err, "network status failed");
                format!("Error getting network info: {}", err)
            }
        }
    }

    fn resolve_target<'a>(&'a self, address: Option<&'a str>) -> &'a str {
        match address {
            Some("my") | Some("mine") | None => &self.config.wallet_address,
            Some(other) => other,
        }
    }
}
