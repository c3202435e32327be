use std::collections::HashSet;

use log::info;

use crate::{
    dataset::{normalize, Catalog, Dataset, Transaction},
    types::{ItemName, TransactionId},
};

const EMPTY_MARKER: &str = "(empty)";

/// One transaction as it arrives from the entry form or the CSV file:
/// an id plus the raw comma-separated item text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub transaction_id: TransactionId,
    pub items: String,
}

impl RawTransaction {
    pub fn new(transaction_id: TransactionId, items: impl Into<String>) -> Self {
        RawTransaction {
            transaction_id,
            items: items.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleaningReport {
    pub original_total: usize,
    pub blank_removed: usize,
    pub empty_transactions: usize,
    pub single_item_removed: usize,
    pub invalid_item_transactions: usize,
    pub duplicates_removed: usize,
    pub valid_transactions: usize,
    pub total_items: usize,
    pub unique_items: usize,
}

/// Turn raw rows into a mining-ready dataset.
///
/// Duplicate items are removed first. Rows are then dropped when blank, empty,
/// down to a single distinct item, or (with a catalog) carrying an unknown
/// product.
pub fn clean(raw_transactions: &[RawTransaction], catalog: Option<&Catalog>) -> (Dataset, CleaningReport) {
    let mut report = CleaningReport {
        original_total: raw_transactions.len(),
        ..CleaningReport::default()
    };
    let mut transactions = Vec::with_capacity(raw_transactions.len());

    for raw in raw_transactions {
        let text = raw.items.trim();
        if text.is_empty() {
            report.blank_removed += 1;
            continue;
        }

        let text = text.to_lowercase();
        if text == EMPTY_MARKER {
            report.empty_transactions += 1;
            continue;
        }

        let items: Vec<ItemName> = text
            .split(',')
            .map(normalize)
            .filter(|item| !item.is_empty())
            .collect();
        let unique: HashSet<ItemName> = items.iter().cloned().collect();
        report.duplicates_removed += items.len() - unique.len();

        match unique.len() {
            0 => {
                report.empty_transactions += 1;
                continue;
            }
            1 => {
                report.single_item_removed += 1;
                continue;
            }
            _ => {}
        }

        if let Some(catalog) = catalog {
            if unique.iter().any(|item| !catalog.contains(item)) {
                report.invalid_item_transactions += 1;
                continue;
            }
        }

        transactions.push(Transaction {
            id: raw.transaction_id,
            items: unique,
        });
    }

    let dataset = Dataset::new(transactions);
    report.valid_transactions = dataset.len();
    report.total_items = dataset.iter().map(Transaction::len).sum();
    report.unique_items = dataset.items().len();

    info!(
        "cleaned {} transactions: {} blank, {} empty, {} single-item, {} with invalid items, {} duplicate items removed",
        report.original_total,
        report.blank_removed,
        report.empty_transactions,
        report.single_item_removed,
        report.invalid_item_transactions,
        report.duplicates_removed
    );
    info!(
        "{} valid transactions, {} items, {} unique items",
        report.valid_transactions, report.total_items, report.unique_items
    );

    (dataset, report)
}
