//! Rendering of classified transactions and summaries into report text
//!
//! The engine's outputs are user-facing natural-language blocks, not
//! structured data; consumers treat them as opaque tool results. The
//! shapes here — headers, bullet details, the filter legend, the
//! showing-N-of-M footer — are the externally observable contract.

use chrono::{Local, TimeZone};

use crate::classify::ClassifiedTransaction;
use crate::config::LedgerConfig;
use crate::summary::CoinSummary;
use crate::types::{CoinBalance, OwnedObject};
use crate::window::TimeWindow;

/// Maximum transactions rendered in one history report
pub const DISPLAY_LIMIT: usize = 10;
/// Maximum objects rendered in one owned-objects report
pub const OBJECT_DISPLAY_LIMIT: usize = 10;

/// Digest characters kept before the `...` tail
const SHORT_DIGEST_LEN: usize = 12;

/// Render the transaction history report
///
/// `display` is the truncated slice actually shown; `total` is the size
/// of the full filtered set so the footer can report both.
pub fn history_report(
    window: &TimeWindow,
    display: &[ClassifiedTransaction],
    total: usize,
) -> String {
    let mut blocks = Vec::new();

    let header_suffix = if window.is_filtered() {
        format!(" - {}", window.label)
    } else {
        String::new()
    };
    blocks.push(format!("📋 **Transaction History{}**", header_suffix));

    if window.is_filtered() {
        blocks.push(format!(
            "⏰ **Time Filter:** {}{}",
            window.label,
            window
                .start
                .map(|start| format!(" (from {})", start.format("%Y-%m-%d")))
                .unwrap_or_default()
        ));
    }

    for (index, tx) in display.iter().enumerate() {
        blocks.push(render_entry(index, tx));
    }

    blocks.push(filter_legend().to_string());

    let footer_suffix = if window.is_filtered() {
        format!(" in {}", window.label)
    } else {
        String::new()
    };
    blocks.push(format!(
        "📊 Showing {} of {} total transactions{}.",
        display.len(),
        total,
        footer_suffix
    ));

    blocks.join("\n\n")
}

fn render_entry(index: usize, tx: &ClassifiedTransaction) -> String {
    let mut entry = format!(
        "{}. **{}**\n   • Time: {}\n   • Status: {}\n   • Tx ID: {}",
        index + 1,
        tx.primary_summary,
        format_local_timestamp(tx.timestamp_ms),
        tx.status,
        shorten_digest(&tx.digest),
    );
    if !tx.secondary_details.is_empty() {
        entry.push_str(&format!(
            "\n   • Additional: {}",
            tx.secondary_details.join(", ")
        ));
    }
    entry
}

/// First 12 characters of a digest with a `...` tail
fn shorten_digest(digest: &str) -> String {
    let head: String = digest.chars().take(SHORT_DIGEST_LEN).collect();
    format!("{}...", head)
}

/// Static legend of the recognized time-filter phrases
fn filter_legend() -> &'static str {
    "💡 **Available Time Filters:**\n\
     • \"today\" - Today's transactions\n\
     • \"yesterday\" - Yesterday's transactions\n\
     • \"last week\" or \"7 days\" - Last 7 days\n\
     • \"last month\" or \"30 days\" - Last 30 days\n\
     • \"last 3 months\" or \"90 days\" - Last 3 months\n\
     • \"last year\" or \"365 days\" - Last year\n\
     • \"last X days\" - Custom number of days\n\
     • No filter - All transactions"
}

/// Render the sent/received summary report
pub fn summary_report(window: &TimeWindow, summary: &CoinSummary) -> String {
    let mut blocks = Vec::new();

    let header_suffix = if window.is_filtered() {
        format!(" - {}", window.label)
    } else {
        String::new()
    };
    blocks.push(format!("💰 **SUI & USDC Summary{}**", header_suffix));

    if window.is_filtered() {
        blocks.push(format!(
            "⏰ **Time Period:** {}{}",
            window.label,
            window
                .start
                .map(|start| format!(" (from {})", start.format("%Y-%m-%d")))
                .unwrap_or_default()
        ));
    }

    blocks.push(format!(
        "📊 **Transaction Count:** {} transactions",
        summary.transaction_count
    ));

    blocks.push(format!(
        "🟢 **SUI Tokens:**\n\
         • Total Sent: {:.9} SUI\n\
         • Total Received: {:.9} SUI\n\
         • Net Flow: {} SUI",
        summary.native.sent,
        summary.native.received,
        signed_amount(summary.native.net(), 9),
    ));

    blocks.push(format!(
        "🔵 **USDC Tokens:**\n\
         • Total Sent: {:.2} USDC\n\
         • Total Received: {:.2} USDC\n\
         • Net Flow: {} USDC",
        summary.stable.sent,
        summary.stable.received,
        signed_amount(summary.stable.net(), 2),
    ));

    blocks.push(
        "💡 **Net Flow Explanation:**\n\
         • Positive net flow = More received than sent (net gain)\n\
         • Negative net flow = More sent than received (net loss)\n\
         • Zero net flow = Equal amounts sent and received"
            .to_string(),
    );

    blocks.join("\n\n")
}

/// Leading `+` only when the value is non-negative
fn signed_amount(value: f64, decimals: usize) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.*}", sign, decimals, value)
}

/// Empty-result message for the history report
pub fn no_history_message(wallet: &str) -> String {
    format!("No transaction history found for wallet address: {}", wallet)
}

/// Empty-result message for the summary report
pub fn no_transactions_message(wallet: &str, window: &TimeWindow) -> String {
    let suffix = if window.is_filtered() {
        format!(" in {}", window.label)
    } else {
        String::new()
    };
    format!(
        "No transactions found for wallet address: {}{}",
        wallet, suffix
    )
}

/// Render a native balance lookup
pub fn balance_report(balance: &CoinBalance) -> String {
    let sui = balance.total_balance as f64 / crate::asset::MIST_PER_SUI as f64;
    format!(
        "Address: {}\nSUI Balance: {:.4} SUI\nRaw Balance: {} MIST",
        balance.address, sui, balance.total_balance
    )
}

/// Render an owned-objects listing, truncated to the display limit
pub fn objects_report(address: &str, objects: &[OwnedObject]) -> String {
    if objects.is_empty() {
        return format!("No objects found for address: {}", address);
    }

    let mut out = format!("Found {} objects for address: {}\n", objects.len(), address);
    for (index, object) in objects.iter().take(OBJECT_DISPLAY_LIMIT).enumerate() {
        out.push_str(&format!(
            "\n{}. Object ID: {}\n   Type: {}\n",
            index + 1,
            object.object_id,
            object.object_type.as_deref().unwrap_or("Unknown"),
        ));
        if let Some(name) = &object.display_name {
            out.push_str(&format!("   Name: {}\n", name));
        }
    }
    if objects.len() > OBJECT_DISPLAY_LIMIT {
        out.push_str(&format!(
            "\n... and {} more objects",
            objects.len() - OBJECT_DISPLAY_LIMIT
        ));
    }
    out
}

/// Render network identification and status
pub fn network_report(config: &LedgerConfig, chain_id: &str, latest_checkpoint: u64) -> String {
    format!(
        "Network: {}\nRPC URL: {}\nChain ID: {}\nLatest Checkpoint: {}\nConnected Wallet: {}",
        config.network, config.rpc_url, chain_id, latest_checkpoint, config.wallet_address
    )
}

/// Local wall-clock rendering of an epoch-millisecond timestamp
pub fn format_local_timestamp(timestamp_ms: Option<u64>) -> String {
    timestamp_ms
        .and_then(|ms| Local.timestamp_millis_opt(ms as i64).single())
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}
