//! Horizontal transaction table and the product catalog.
//!
//! Both are owned by the caller and only borrowed by the miners.

pub mod clean;
pub mod io;

use std::collections::{BTreeSet, HashSet};

use crate::types::{ItemName, TransactionId};

/// Trimmed, lowercased form of a raw item name.
pub fn normalize(item: &str) -> ItemName {
    item.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub items: HashSet<ItemName>,
}

impl Transaction {
    pub fn new<I, S>(id: TransactionId, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemName>,
    {
        Transaction {
            id,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains_all(&self, itemset: &[ItemName]) -> bool {
        itemset.iter().all(|item| self.items.contains(item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    transactions: Vec<Transaction>,
}

impl Dataset {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Dataset { transactions }
    }

    /// Number of rows. Duplicate transaction ids are counted once per row.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Distinct items across all transactions, sorted.
    pub fn items(&self) -> Vec<ItemName> {
        self.transactions
            .iter()
            .flat_map(|transaction| transaction.items.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromIterator<Transaction> for Dataset {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

/// Known product names, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<ItemName>,
    lookup: HashSet<ItemName>,
}

impl Catalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Catalog::default();
        for name in names {
            let name = normalize(name.as_ref());
            if name.is_empty() || catalog.lookup.contains(&name) {
                continue;
            }
            catalog.lookup.insert(name.clone());
            catalog.names.push(name);
        }
        catalog
    }

    pub fn from_dataset(dataset: &Dataset) -> Self {
        Catalog::new(dataset.items())
    }

    pub fn contains(&self, item: &str) -> bool {
        self.lookup.contains(item)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemName> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
