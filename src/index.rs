//! Vertical view of a dataset: item -> set of transaction ids.
//!
//! Transaction ids are mapped to dense positions so each item's id set is a
//! bit vector and intersection is a bitwise AND.

use std::collections::{BTreeMap, HashMap};

use bitvec::prelude::*;

use crate::{
    dataset::Dataset,
    error::{MiningError, Result},
    types::{ItemName, TransactionId},
};

pub type TidSet = BitVec<usize, Lsb0>;

#[derive(Debug, Clone)]
pub struct VerticalIndex {
    /// position -> transaction id, ascending
    transaction_ids: Vec<TransactionId>,
    tidsets: BTreeMap<ItemName, TidSet>,
    universe_size: usize,
}

impl VerticalIndex {
    pub fn build(dataset: &Dataset) -> Self {
        let mut transaction_ids: Vec<TransactionId> = dataset
            .iter()
            .filter(|transaction| !transaction.is_empty())
            .map(|transaction| transaction.id)
            .collect();
        transaction_ids.sort_unstable();
        transaction_ids.dedup();

        let positions: HashMap<TransactionId, usize> = transaction_ids
            .iter()
            .enumerate()
            .map(|(position, &id)| (id, position))
            .collect();

        let num_positions = transaction_ids.len();
        let mut tidsets: BTreeMap<ItemName, TidSet> = BTreeMap::new();
        for transaction in dataset {
            let Some(&position) = positions.get(&transaction.id) else {
                continue;
            };
            for item in &transaction.items {
                tidsets
                    .entry(item.clone())
                    .or_insert_with(|| bitvec![usize, Lsb0; 0; num_positions])
                    .set(position, true);
            }
        }

        let mut universe = bitvec![usize, Lsb0; 0; num_positions];
        for tidset in tidsets.values() {
            universe |= tidset.as_bitslice();
        }
        let universe_size = universe.count_ones();

        VerticalIndex {
            transaction_ids,
            tidsets,
            universe_size,
        }
    }

    /// Number of distinct transaction ids appearing anywhere in the index.
    ///
    /// This is not the row count of the source dataset: repeated ids collapse
    /// and transactions without items never enter the index.
    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    /// Indexed items, sorted.
    pub fn items(&self) -> impl Iterator<Item = &ItemName> {
        self.tidsets.keys()
    }

    /// `(item, id set)` pairs, sorted by item.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, &TidSet)> {
        self.tidsets.iter()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.tidsets.contains_key(item)
    }

    pub fn tidset(&self, item: &str) -> Result<&TidSet> {
        self.tidsets
            .get(item)
            .ok_or_else(|| MiningError::ItemNotIndexed(item.to_string()))
    }

    /// Intersection of the id sets of every item in `itemset`.
    /// The empty itemset yields the whole universe.
    pub fn intersect(&self, itemset: &[ItemName]) -> Result<TidSet> {
        let mut items = itemset.iter();
        let mut acc = match items.next() {
            Some(first) => self.tidset(first)?.clone(),
            None => bitvec![usize, Lsb0; 1; self.transaction_ids.len()],
        };
        for item in items {
            acc &= self.tidset(item)?.as_bitslice();
        }
        Ok(acc)
    }

    pub fn count(&self, itemset: &[ItemName]) -> Result<usize> {
        Ok(self.intersect(itemset)?.count_ones())
    }

    /// Transaction ids containing `item`, ascending.
    pub fn transaction_ids_of(&self, item: &str) -> Result<Vec<TransactionId>> {
        Ok(self
            .tidset(item)?
            .iter_ones()
            .map(|position| self.transaction_ids[position])
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Transaction;

    fn itemset(items: &[&str]) -> Vec<ItemName> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Transaction::new(10, vec!["bread", "milk"]),
            Transaction::new(42, vec!["bread", "milk", "eggs"]),
            Transaction::new(3, vec!["milk", "eggs"]),
        ])
    }

    #[test]
    fn maps_items_to_transaction_ids() {
        let index = VerticalIndex::build(&dataset());

        assert_eq!(index.transaction_ids_of("bread").unwrap(), vec![10, 42]);
        assert_eq!(index.transaction_ids_of("milk").unwrap(), vec![3, 10, 42]);
        assert_eq!(index.transaction_ids_of("eggs").unwrap(), vec![3, 42]);
        assert_eq!(
            index.items().cloned().collect::<Vec<_>>(),
            vec!["bread", "eggs", "milk"]
        );
    }

    #[test]
    fn intersects_tidsets() {
        let index = VerticalIndex::build(&dataset());

        assert_eq!(index.count(&itemset(&["bread", "eggs"])).unwrap(), 1);
        assert_eq!(index.count(&itemset(&["bread", "milk"])).unwrap(), 2);
        assert_eq!(index.count(&[]).unwrap(), 3);
    }

    #[test]
    fn universe_counts_distinct_ids() {
        let dataset = Dataset::new(vec![
            Transaction::new(1, vec!["bread", "milk"]),
            Transaction::new(1, vec!["eggs", "milk"]),
            Transaction::new(2, vec!["bread", "eggs"]),
            Transaction::new(3, Vec::<String>::new()),
        ]);
        let index = VerticalIndex::build(&dataset);

        assert_eq!(dataset.len(), 4);
        assert_eq!(index.universe_size(), 2);
        assert_eq!(index.transaction_ids_of("milk").unwrap(), vec![1]);
    }

    #[test]
    fn unknown_item_is_a_lookup_failure() {
        let index = VerticalIndex::build(&dataset());

        let err = index.count(&itemset(&["bread", "caviar"])).unwrap_err();
        assert!(matches!(err, MiningError::ItemNotIndexed(item) if item == "caviar"));
    }
}
