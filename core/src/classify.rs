//! Transaction classification into human-readable summaries
//!
//! One raw transaction record becomes a primary summary line plus
//! secondary detail lines. Categories contribute in fixed precedence —
//! balance changes, object changes, events, call operations — and the
//! first line produced overall becomes the primary summary. Event
//! labels come from an ordered predicate table so precedence and
//! fallback stay auditable.

use crate::asset::{last_segment, AssetClass};
use crate::types::{CallOperation, ObjectChangeKind, TransactionRecord, TxStatus};

/// Ordered event-label table, matched case-insensitively, first hit wins
const EVENT_RULES: &[(&str, &str)] = &[
    ("swap", "Token swap"),
    ("stake", "Staking operation"),
    ("liquidity", "Liquidity operation"),
    ("mint", "Token minting"),
    ("burn", "Token burning"),
];

/// Addresses longer than this render shortened with a `...` tail
const SHORT_ADDRESS_LEN: usize = 8;

/// A transaction reduced to display form
#[derive(Debug, Clone)]
pub struct ClassifiedTransaction {
    /// Transaction digest, carried through for display
    pub digest: String,
    /// Original timestamp, for the time column
    pub timestamp_ms: Option<u64>,
    /// Execution status
    pub status: TxStatus,
    /// What happened, one line
    pub primary_summary: String,
    /// Everything else worth mentioning, in production order
    pub secondary_details: Vec<String>,
}

/// Classify one record from the perspective of `wallet`
pub fn classify(record: &TransactionRecord, wallet: &str) -> ClassifiedTransaction {
    let external_recipient = resolve_external_recipient(record, wallet);
    let external_sender = record
        .sender
        .as_deref()
        .filter(|sender| *sender != wallet);

    let mut details = Vec::new();

    describe_balance_changes(
        record,
        wallet,
        external_recipient,
        external_sender,
        &mut details,
    );
    describe_object_changes(record, &mut details);
    describe_events(record, &mut details);
    if record.sender.as_deref() == Some(wallet) {
        describe_call_operations(record, wallet, &mut details);
    }

    // The resolved counterparty overrides a self-reference, but only in
    // the first rendered detail line.
    if let Some(recipient) = external_recipient {
        if let Some(first) = details.first_mut() {
            if first.contains("to yourself") {
                *first = first.replace(
                    "to yourself (same wallet)",
                    &format!("to {}", shorten_address(recipient)),
                );
            }
        }
    }

    if details.is_empty() {
        details.push("Blockchain operation".to_string());
    }

    let primary_summary = details.remove(0);
    ClassifiedTransaction {
        digest: record.digest.clone(),
        timestamp_ms: record.timestamp_ms,
        status: record.status,
        primary_summary,
        secondary_details: details,
    }
}

/// First transfer recipient that is not the queried wallet
///
/// Two passes in fixed order: programmable `TransferObjects` arguments
/// first, then legacy `TransferSui` arguments.
fn resolve_external_recipient<'a>(
    record: &'a TransactionRecord,
    wallet: &str,
) -> Option<&'a str> {
    for operation in &record.call_operations {
        if let CallOperation::TransferObjects {
            recipient: Some(recipient),
        } = operation
        {
            if recipient != wallet {
                return Some(recipient);
            }
        }
    }
    for operation in &record.call_operations {
        if let CallOperation::TransferSui {
            recipient: Some(recipient),
        } = operation
        {
            if recipient != wallet {
                return Some(recipient);
            }
        }
    }
    None
}

fn describe_balance_changes(
    record: &TransactionRecord,
    wallet: &str,
    external_recipient: Option<&str>,
    external_sender: Option<&str>,
    details: &mut Vec<String>,
) {
    for change in &record.balance_changes {
        // Unresolvable owners are dropped, not reported.
        let Some(owner) = change.owner.as_deref() else {
            continue;
        };
        let asset = AssetClass::from_coin_type(&change.coin_type);
        let amount = asset.format_amount(change.amount);

        let line = if change.amount < 0 {
            let target = match external_recipient {
                Some(recipient) => shorten_address(recipient),
                None if owner == wallet => "yourself (same wallet)".to_string(),
                None => shorten_address(owner),
            };
            format!("Sent {} to {}", amount, target)
        } else {
            let source = match external_sender {
                Some(sender) => shorten_address(sender),
                None if owner == wallet => "yourself (same wallet)".to_string(),
                None => shorten_address(owner),
            };
            format!("Received {} from {}", amount, source)
        };
        details.push(line);
    }
}

fn describe_object_changes(record: &TransactionRecord, details: &mut Vec<String>) {
    for change in &record.object_changes {
        let object_type = change.object_type.as_deref().unwrap_or("object");
        let line = match &change.kind {
            ObjectChangeKind::Created => format!("Created {}", object_type),
            ObjectChangeKind::Transferred => format!("Transferred {}", object_type),
            ObjectChangeKind::Mutated => format!("Modified {}", object_type),
            ObjectChangeKind::Deleted => format!("Deleted {}", object_type),
            ObjectChangeKind::Other(kind) => format!("Object change: {}", kind),
        };
        details.push(line);
    }
}

fn describe_events(record: &TransactionRecord, details: &mut Vec<String>) {
    for event in &record.events {
        let lowered = event.event_type.to_lowercase();
        let line = EVENT_RULES
            .iter()
            .find(|(needle, _)| lowered.contains(needle))
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| format!("Event: {}", last_segment(&event.event_type)));
        details.push(line);
    }
}

fn describe_call_operations(record: &TransactionRecord, wallet: &str, details: &mut Vec<String>) {
    for operation in &record.call_operations {
        let line = match operation {
            CallOperation::MoveCall { target } => {
                format!("Called {}", last_segment(target))
            }
            CallOperation::TransferObjects { .. } => "Object transfer".to_string(),
            CallOperation::SplitCoins => "Coin splitting".to_string(),
            CallOperation::MergeCoins => "Coin merging".to_string(),
            CallOperation::TransferSui { recipient } => match recipient.as_deref() {
                Some(recipient) if recipient != wallet => {
                    format!("TransferSui to {}", shorten_address(recipient))
                }
                Some(_) => "TransferSui to yourself".to_string(),
                None => "TransferSui".to_string(),
            },
            CallOperation::Other(kind) => format!("Operation: {}", kind),
        };
        details.push(line);
    }
}

/// Shorten a long address to its first 8 characters plus `...`
pub(crate) fn shorten_address(address: &str) -> String {
    if address.chars().count() > SHORT_ADDRESS_LEN {
        let head: String = address.chars().take(SHORT_ADDRESS_LEN).collect();
        format!("{}...", head)
    } else {
        address.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BalanceChange, EventRecord, ObjectChange};

    const WALLET: &str = "0x4f2e63be8e7fe287836e29cde6f3d5cbc96eefd0c0e3f3747668faa2ae7324b0";
    const OTHER: &str = "0x9ace7a2c8d11f3f2bd6e9d6bba7412c7e9687cf8acbc25818ff9a700345f0a91";

    fn empty_record() -> TransactionRecord {
        TransactionRecord {
            digest: "digest".to_string(),
            timestamp_ms: Some(1_710_419_400_000),
            status: TxStatus::Success,
            sender: Some(WALLET.to_string()),
            balance_changes: Vec::new(),
            object_changes: Vec::new(),
            events: Vec::new(),
            call_operations: Vec::new(),
        }
    }

    fn sui_change(owner: &str, amount: i128) -> BalanceChange {
        BalanceChange {
            owner: Some(owner.to_string()),
            coin_type: "0x2::sui::SUI".to_string(),
            amount,
        }
    }

    #[test]
    fn test_self_transfer_renders_same_wallet() {
        // Debit on the own wallet with no resolvable counterparty.
        let mut record = empty_record();
        record.balance_changes.push(sui_change(WALLET, -2_000_000_000));

        let classified = classify(&record, WALLET);
        assert_eq!(
            classified.primary_summary,
            "Sent 2.000000000 SUI to yourself (same wallet)"
        );
    }

    #[test]
    fn test_external_recipient_replaces_self_reference() {
        let mut record = empty_record();
        record.balance_changes.push(sui_change(WALLET, -2_000_000_000));
        record.call_operations.push(CallOperation::TransferObjects {
            recipient: Some(OTHER.to_string()),
        });

        let classified = classify(&record, WALLET);
        assert_eq!(
            classified.primary_summary,
            "Sent 2.000000000 SUI to 0x9ace7a..."
        );
    }

    #[test]
    fn test_received_from_external_sender() {
        let mut record = empty_record();
        record.sender = Some(OTHER.to_string());
        record.balance_changes.push(sui_change(WALLET, 1_500_000_000));

        let classified = classify(&record, WALLET);
        assert_eq!(
            classified.primary_summary,
            "Received 1.500000000 SUI from 0x9ace7a..."
        );
    }

    #[test]
    fn test_stablecoin_and_generic_token_rendering() {
        let mut record = empty_record();
        record.balance_changes.push(BalanceChange {
            owner: Some(WALLET.to_string()),
            coin_type: "0xdba3::usdc::USDC".to_string(),
            amount: -1_250_000,
        });
        record.balance_changes.push(BalanceChange {
            owner: Some(WALLET.to_string()),
            coin_type: "0xabc::cetus::CETUS".to_string(),
            amount: 42,
        });

        let classified = classify(&record, WALLET);
        assert_eq!(
            classified.primary_summary,
            "Sent 1.25 USDC to yourself (same wallet)"
        );
        assert_eq!(
            classified.secondary_details,
            vec!["Received 42 CETUS from yourself (same wallet)"]
        );
    }

    #[test]
    fn test_unresolvable_owner_dropped_silently() {
        let mut record = empty_record();
        record.balance_changes.push(BalanceChange {
            owner: None,
            coin_type: "0x2::sui::SUI".to_string(),
            amount: -1,
        });

        let classified = classify(&record, WALLET);
        assert_eq!(classified.primary_summary, "Blockchain operation");
    }

    #[test]
    fn test_balance_change_outranks_object_change() {
        let mut record = empty_record();
        record.balance_changes.push(sui_change(WALLET, -1_000_000_000));
        record.object_changes.push(ObjectChange {
            kind: ObjectChangeKind::Created,
            object_type: Some("0x2::coin::Coin".to_string()),
        });

        let classified = classify(&record, WALLET);
        assert!(classified.primary_summary.starts_with("Sent"));
        assert_eq!(
            classified.secondary_details,
            vec!["Created 0x2::coin::Coin"]
        );
    }

    #[test]
    fn test_object_change_lines() {
        let mut record = empty_record();
        record.object_changes.push(ObjectChange {
            kind: ObjectChangeKind::Mutated,
            object_type: None,
        });
        record.object_changes.push(ObjectChange {
            kind: ObjectChangeKind::Other("wrapped".to_string()),
            object_type: Some("0xabc::nft::Nft".to_string()),
        });

        let classified = classify(&record, WALLET);
        assert_eq!(classified.primary_summary, "Modified object");
        assert_eq!(classified.secondary_details, vec!["Object change: wrapped"]);
    }

    #[test]
    fn test_event_table_and_fallback() {
        let mut record = empty_record();
        for event_type in [
            "0xabc::pool::SwapEvent",
            "0xdef::staking::StakeChanged",
            "0xdef::pool::LiquidityAdded",
            "0xdef::supply::MintEvent",
            "0xdef::supply::BurnEvent",
            "0xdef::registry::Registered",
        ] {
            record.events.push(EventRecord {
                event_type: event_type.to_string(),
            });
        }

        let classified = classify(&record, WALLET);
        let mut lines = vec![classified.primary_summary.clone()];
        lines.extend(classified.secondary_details.clone());
        assert_eq!(
            lines,
            vec![
                "Token swap",
                "Staking operation",
                "Liquidity operation",
                "Token minting",
                "Token burning",
                "Event: Registered",
            ]
        );
    }

    #[test]
    fn test_call_operations_only_for_own_transactions() {
        let mut record = empty_record();
        record.call_operations.push(CallOperation::MoveCall {
            target: "0x2::pay::split".to_string(),
        });
        record.call_operations.push(CallOperation::SplitCoins);
        record.call_operations.push(CallOperation::MergeCoins);

        let classified = classify(&record, WALLET);
        let mut lines = vec![classified.primary_summary.clone()];
        lines.extend(classified.secondary_details.clone());
        assert_eq!(lines, vec!["Called split", "Coin splitting", "Coin merging"]);

        // Same record viewed as a counterparty transaction: the calls
        // belong to someone else and are not reported.
        record.sender = Some(OTHER.to_string());
        let classified = classify(&record, WALLET);
        assert_eq!(classified.primary_summary, "Blockchain operation");
    }

    #[test]
    fn test_transfer_sui_operation_variants() {
        let mut record = empty_record();
        record.call_operations.push(CallOperation::TransferSui {
            recipient: Some(OTHER.to_string()),
        });
        record.call_operations.push(CallOperation::TransferSui {
            recipient: Some(WALLET.to_string()),
        });
        record.call_operations.push(CallOperation::TransferSui { recipient: None });

        let classified = classify(&record, WALLET);
        let mut lines = vec![classified.primary_summary.clone()];
        lines.extend(classified.secondary_details.clone());
        assert_eq!(
            lines,
            vec![
                "TransferSui to 0x9ace7a...",
                "TransferSui to yourself",
                "TransferSui",
            ]
        );
    }

    #[test]
    fn test_self_reference_patch_only_touches_exact_phrase() {
        // "TransferSui to yourself" contains "to yourself" but not the
        // full "(same wallet)" phrase, so the patch must leave it alone
        // even though an external recipient was resolved.
        let mut record = empty_record();
        record.call_operations.push(CallOperation::TransferSui {
            recipient: Some(WALLET.to_string()),
        });
        record.call_operations.push(CallOperation::TransferObjects {
            recipient: Some(OTHER.to_string()),
        });

        let classified = classify(&record, WALLET);
        assert_eq!(classified.primary_summary, "TransferSui to yourself");
    }

    #[test]
    fn test_empty_record_falls_back() {
        let classified = classify(&empty_record(), WALLET);
        assert_eq!(classified.primary_summary, "Blockchain operation");
        assert!(classified.secondary_details.is_empty());
    }
}
