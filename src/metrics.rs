//! Support, confidence and lift.
//!
//! [`Dataset`] answers support queries horizontally, scanning rows and
//! dividing by the row count. [`VerticalIndex`] answers them by intersecting
//! id sets and dividing by its universe size. Confidence and lift are derived
//! from support identically for both, clamping to 0 when a divisor is 0.

use crate::{
    dataset::Dataset,
    error::Result,
    index::VerticalIndex,
    types::{ItemName, Itemset},
};

pub trait SupportCounter {
    fn support(&self, itemset: &[ItemName]) -> Result<f64>;

    /// `support(antecedent ∪ consequent) / support(antecedent)`
    fn confidence(&self, antecedent: &[ItemName], consequent: &[ItemName]) -> Result<f64> {
        let divisor = self.support(antecedent)?;
        Ok(ratio(self.support(&union(antecedent, consequent))?, divisor))
    }

    /// `confidence(antecedent -> consequent) / support(consequent)`
    fn lift(&self, antecedent: &[ItemName], consequent: &[ItemName]) -> Result<f64> {
        let divisor = self.support(consequent)?;
        Ok(ratio(self.confidence(antecedent, consequent)?, divisor))
    }
}

impl SupportCounter for Dataset {
    /// Items missing from every transaction simply have support 0.
    fn support(&self, itemset: &[ItemName]) -> Result<f64> {
        Ok(horizontal_support(self, itemset))
    }
}

impl SupportCounter for VerticalIndex {
    /// Fails with [`MiningError::ItemNotIndexed`](crate::MiningError::ItemNotIndexed)
    /// for items the index never saw.
    fn support(&self, itemset: &[ItemName]) -> Result<f64> {
        let count = self.count(itemset)?;
        Ok(ratio(count as f64, self.universe_size() as f64))
    }
}

/// Fraction of rows containing every item of `itemset`. Never fails.
pub fn horizontal_support(dataset: &Dataset, itemset: &[ItemName]) -> f64 {
    let count = dataset
        .iter()
        .filter(|transaction| transaction.contains_all(itemset))
        .count();
    ratio(count as f64, dataset.len() as f64)
}

/// `dividend / divisor`, or 0 when the divisor is 0.
pub fn ratio(dividend: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        0.0
    } else {
        dividend / divisor
    }
}

/// Sorted union of two itemsets.
pub fn union(a: &[ItemName], b: &[ItemName]) -> Itemset {
    let mut items: Itemset = a.iter().chain(b.iter()).cloned().collect();
    items.sort_unstable();
    items.dedup();
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset::Transaction, error::MiningError};

    macro_rules! itemset {
        ($($x:expr),*) => {
            {
                let mut vec: Itemset = vec![];
                $(vec.push($x.to_string());)*
                vec
            }
        };
    }

    const EPS: f64 = 1e-12;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Transaction::new(1, vec!["bread", "milk"]),
            Transaction::new(2, vec!["bread", "milk", "eggs"]),
            Transaction::new(3, vec!["milk", "butter"]),
            Transaction::new(4, vec!["milk", "eggs"]),
            Transaction::new(5, vec!["bread", "milk", "eggs"]),
        ])
    }

    #[test]
    fn horizontal_support_counts_rows() {
        let dataset = dataset();

        assert!((dataset.support(&itemset!["bread"]).unwrap() - 0.6).abs() < EPS);
        assert!((dataset.support(&itemset!["milk"]).unwrap() - 1.0).abs() < EPS);
        assert!((dataset.support(&itemset!["bread", "eggs"]).unwrap() - 0.4).abs() < EPS);
        assert_eq!(dataset.support(&itemset!["caviar"]).unwrap(), 0.0);
    }

    #[test]
    fn horizontal_support_of_empty_dataset_is_zero() {
        assert_eq!(Dataset::default().support(&itemset!["bread"]).unwrap(), 0.0);
    }

    #[test]
    fn vertical_matches_horizontal_on_clean_input() {
        let dataset = dataset();
        let index = VerticalIndex::build(&dataset);

        for items in [
            itemset!["bread"],
            itemset!["eggs", "milk"],
            itemset!["bread", "eggs", "milk"],
            itemset!["butter", "milk"],
        ] {
            let horizontal = dataset.support(&items).unwrap();
            let vertical = index.support(&items).unwrap();
            assert!((horizontal - vertical).abs() < EPS, "{:?}", items);
        }
    }

    #[test]
    fn vertical_total_is_distinct_ids_not_rows() {
        let dataset = Dataset::new(vec![
            Transaction::new(1, vec!["bread", "milk"]),
            Transaction::new(1, vec!["bread", "eggs"]),
            Transaction::new(2, vec!["milk", "eggs"]),
        ]);
        let index = VerticalIndex::build(&dataset);

        // rows: 2 of 3 contain bread; ids: 1 of 2 contain bread
        assert!((dataset.support(&itemset!["bread"]).unwrap() - 2.0 / 3.0).abs() < EPS);
        assert!((index.support(&itemset!["bread"]).unwrap() - 0.5).abs() < EPS);
    }

    #[test]
    fn confidence_and_lift() {
        let dataset = dataset();

        let confidence = dataset.confidence(&itemset!["bread"], &itemset!["milk"]).unwrap();
        assert!((confidence - 1.0).abs() < EPS);
        let lift = dataset.lift(&itemset!["bread"], &itemset!["milk"]).unwrap();
        assert!((lift - 1.0).abs() < EPS);

        let confidence = dataset.confidence(&itemset!["milk"], &itemset!["eggs"]).unwrap();
        assert!((confidence - 0.6).abs() < EPS);
        let lift = dataset.lift(&itemset!["eggs"], &itemset!["bread"]).unwrap();
        // (0.4 / 0.6) / 0.6
        assert!((lift - 10.0 / 9.0).abs() < EPS);
    }

    #[test]
    fn zero_divisor_clamps_to_zero() {
        let dataset = dataset();

        assert_eq!(dataset.confidence(&itemset!["caviar"], &itemset!["milk"]).unwrap(), 0.0);
        assert_eq!(dataset.lift(&itemset!["milk"], &itemset!["caviar"]).unwrap(), 0.0);
    }

    #[test]
    fn vertical_lookup_failure_propagates() {
        let index = VerticalIndex::build(&dataset());

        let err = index.confidence(&itemset!["bread"], &itemset!["caviar"]).unwrap_err();
        assert!(matches!(err, MiningError::ItemNotIndexed(_)));
    }

    #[test]
    fn union_is_sorted_and_distinct() {
        assert_eq!(
            union(&itemset!["milk", "bread"], &itemset!["eggs", "bread"]),
            itemset!["bread", "eggs", "milk"]
        );
    }
}
