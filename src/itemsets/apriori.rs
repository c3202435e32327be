use std::collections::BTreeMap;

use log::debug;
use rayon::prelude::*;

use crate::{
    combi::{candidates, item_pool},
    dataset::{Catalog, Dataset},
    itemsets::{warn_on_blowup, MiningResult, Strategy},
    metrics::horizontal_support,
    types::{FrequentItemsets, Itemset},
};

/// Level-wise candidate generation and test over the horizontal table.
///
/// Level 1 tests every catalog item. Level `k` tests every `k`-combination of
/// the items appearing in any frequent itemset of level `k - 1`, so pairs that
/// were never frequent together can be regenerated as long as both items
/// survive in the pool. Mining stops at the first empty level, which is kept
/// in the result as an empty entry.
pub fn mine(dataset: &Dataset, catalog: &Catalog, min_support: f64) -> MiningResult<FrequentItemsets> {
    let mut levels: FrequentItemsets = BTreeMap::new();

    debug!("apriori: counting {} catalog items", catalog.len());
    let seeds: Vec<Itemset> = catalog.iter().map(|item| vec![item.clone()]).collect();
    let frequent = frequent_candidates(dataset, seeds, min_support);
    debug!("apriori: {} frequent itemsets of length 1", frequent.len());
    if frequent.is_empty() {
        return MiningResult::NoFrequentItemsets;
    }

    let mut pool = item_pool(&frequent);
    levels.insert(1, frequent);

    for size in 2.. {
        let candidates = candidates(&pool, size);
        warn_on_blowup(Strategy::Apriori, size, candidates.len());
        let num_candidates = candidates.len();

        let frequent = frequent_candidates(dataset, candidates, min_support);
        debug!(
            "apriori: {} of {} candidates of length {} are frequent",
            frequent.len(),
            num_candidates,
            size
        );

        if frequent.is_empty() {
            levels.insert(size, frequent);
            break;
        }
        pool = item_pool(&frequent);
        levels.insert(size, frequent);
    }

    MiningResult::Found(levels)
}

/// Candidates whose support meets `min_support`, in candidate order.
fn frequent_candidates(dataset: &Dataset, candidates: Vec<Itemset>, min_support: f64) -> Vec<Itemset> {
    candidates
        .into_par_iter()
        .filter(|candidate| horizontal_support(dataset, candidate) >= min_support)
        .collect()
}
