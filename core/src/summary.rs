//! Aggregation of balance movements into per-asset totals
//!
//! Sums absolute sent/received amounts for the native coin and the
//! stablecoin across a filtered record set. Generic tokens are
//! classified per transaction for display but carry no aggregate total;
//! that asymmetry is part of the contract, not an oversight to fix here.

use crate::asset::AssetClass;
use crate::types::TransactionRecord;

/// Sent/received totals for one tracked asset class
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AssetTotals {
    /// Total debited, display scale
    pub sent: f64,
    /// Total credited, display scale
    pub received: f64,
}

impl AssetTotals {
    /// Net flow: positive means more received than sent
    pub fn net(&self) -> f64 {
        self.received - self.sent
    }
}

/// Aggregated movements over one fetched window
#[derive(Debug, Clone, Default)]
pub struct CoinSummary {
    /// Native coin totals in SUI
    pub native: AssetTotals,
    /// Stablecoin totals in USDC
    pub stable: AssetTotals,
    /// Number of records aggregated, including ones without balance changes
    pub transaction_count: usize,
}

/// Aggregate every balance change in `records` into per-asset totals
pub fn aggregate(records: &[TransactionRecord]) -> CoinSummary {
    let mut summary = CoinSummary::default();

    for record in records {
        for change in &record.balance_changes {
            let asset = AssetClass::from_coin_type(&change.coin_type);
            let amount = asset.to_decimal(change.amount);
            let totals = match asset {
                AssetClass::Native => &mut summary.native,
                AssetClass::Stable => &mut summary.stable,
                AssetClass::Token(_) => continue,
            };
            if change.amount < 0 {
                totals.sent += amount;
            } else {
                totals.received += amount;
            }
        }
        summary.transaction_count += 1;
    }

    summary
}
