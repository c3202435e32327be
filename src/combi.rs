use itertools::Itertools;

use crate::types::{ItemName, Itemset, ItemsetLength};

/// Distinct items appearing in any of `itemsets`, sorted.
pub fn item_pool(itemsets: &[Itemset]) -> Vec<ItemName> {
    itemsets
        .iter()
        .flatten()
        .cloned()
        .sorted()
        .dedup()
        .collect()
}

/// Every `size`-combination of `pool`. A sorted pool yields sorted itemsets.
pub fn candidates(pool: &[ItemName], size: ItemsetLength) -> Vec<Itemset> {
    if size == 0 || size > pool.len() {
        return vec![];
    }
    pool.iter()
        .cloned()
        .combinations(size)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn names(items: &[&str]) -> Vec<ItemName> {
        items.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn test_item_pool() {
        let itemsets = vec![
            names(&["bread", "milk"]),
            names(&["eggs", "milk"]),
            names(&["bread", "eggs"]),
        ];
        assert_eq!(item_pool(&itemsets), names(&["bread", "eggs", "milk"]));
        assert!(item_pool(&[]).is_empty());
    }

    #[test]
    fn test_candidates() {
        let pool = names(&["bread", "eggs", "milk"]);
        let y = candidates(&pool, 2);
        assert_eq!(
            y,
            vec![
                names(&["bread", "eggs"]),
                names(&["bread", "milk"]),
                names(&["eggs", "milk"]),
            ]
        );
    }

    #[test]
    fn test_candidates_pool_too_small() {
        let pool = names(&["bread", "eggs"]);
        assert!(candidates(&pool, 3).is_empty());
        assert!(candidates(&pool, 0).is_empty());
    }

    #[test]
    fn test_candidates_regenerate_from_pool() {
        // {bread, butter} was never frequent but both items survive in the pool
        let level = vec![names(&["bread", "milk"]), names(&["butter", "milk"])];
        let pool = item_pool(&level);
        let y = candidates(&pool, 2);
        assert!(y.contains(&names(&["bread", "butter"])));
        assert_eq!(y.len(), 3);
    }
}
