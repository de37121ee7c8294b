//! Ledger fetching: dual directional query, merge, dedup, sort, filter
//!
//! The wallet's history is the union of two queries — transactions it
//! sent and transactions that paid it — issued concurrently. Either side
//! may fail on its own; the surviving side still produces a partial
//! result, and only both sides failing aborts the fetch. A transaction
//! that moved coins between two addresses of interest appears in both
//! result sets and must come out exactly once.

use std::collections::HashSet;

use futures::join;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::rpc::LedgerClient;
use crate::types::TransactionRecord;

/// Fetch the wallet's merged transaction history, newest first
///
/// Records older than `lower_bound_ms` (exclusive) are dropped; records
/// with no timestamp sort as 0 and therefore fall outside any bounded
/// window. The full filtered sequence is returned — display truncation
/// belongs to the caller so aggregation still sees every record.
pub async fn fetch_history<C: LedgerClient + ?Sized>(
    client: &C,
    wallet: &str,
    lower_bound_ms: Option<u64>,
    page_size: usize,
) -> Result<Vec<TransactionRecord>> {
    let (sent, received) = join!(
        client.query_by_sender(wallet, page_size),
        client.query_by_recipient(wallet, page_size),
    );

    let mut records = Vec::new();
    let mut failures = Vec::new();

    match sent {
        Ok(batch) => records.extend(batch),
        Err(err) => {
            warn!(error = %err, "sent-transaction query failed");
            failures.push(err);
        }
    }
    match received {
        Ok(batch) => records.extend(batch),
        Err(err) => {
            warn!(error = %err, "received-transaction query failed");
            failures.push(err);
        }
    }

    if failures.len() == 2 {
        return Err(Error::rpc(format!(
            "both transaction queries failed: {}",
            failures[0]
        )));
    }

    let mut seen = HashSet::new();
    records.retain(|record| seen.insert(record.digest.clone()));

    // Stable sort: ties keep merge order (sent results first).
    records.sort_by(|a, b| b.effective_timestamp().cmp(&a.effective_timestamp()));

    if let Some(bound) = lower_bound_ms {
        records.retain(|record| record.effective_timestamp() >= bound);
    }

    debug!(count = records.len(), "fetched transaction history");
    Ok(records)
}
