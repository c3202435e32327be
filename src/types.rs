use std::collections::BTreeMap;

pub type ItemName = String;
pub type TransactionId = u64;

/// Sorted, duplicate-free list of item names.
pub type Itemset = Vec<ItemName>;

pub type ItemsetLength = usize;
pub type FrequentItemsets = BTreeMap<ItemsetLength, Vec<Itemset>>;
