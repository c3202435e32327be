use std::collections::BTreeMap;

use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use crate::{
    index::{TidSet, VerticalIndex},
    itemsets::{warn_on_blowup, MiningResult, Strategy},
    types::{FrequentItemsets, ItemName, Itemset},
};

/// Minimum id-set size for `min_support` over a universe of `universe_size` ids.
pub fn minimum_count(universe_size: usize, min_support: f64) -> usize {
    (universe_size as f64 * min_support).ceil() as usize
}

/// Intersection-based mining over a vertical index.
///
/// Level 1 keeps items whose id set is strictly larger than
/// [`minimum_count`]. Level `k` intersects every `k`-combination of those
/// level-1 items and keeps intersections of at least [`minimum_count`] ids.
/// Mining stops at the first level with no survivors; that level is not
/// recorded.
pub fn mine(index: &VerticalIndex, min_support: f64) -> MiningResult<FrequentItemsets> {
    let minimum = minimum_count(index.universe_size(), min_support);
    debug!(
        "eclat: {} items over {} transactions, minimum count {}",
        index.items().count(),
        index.universe_size(),
        minimum
    );

    let frequent_items: Vec<(&ItemName, &TidSet)> = index
        .iter()
        .filter(|(_, tidset)| tidset.count_ones() > minimum)
        .collect();
    debug!("eclat: {} frequent itemsets of length 1", frequent_items.len());
    if frequent_items.is_empty() {
        return MiningResult::NoFrequentItemsets;
    }

    let mut levels: FrequentItemsets = BTreeMap::new();
    levels.insert(
        1,
        frequent_items.iter().map(|(item, _)| vec![(*item).clone()]).collect(),
    );

    for size in 2..=frequent_items.len() {
        let candidates: Vec<Vec<usize>> = (0..frequent_items.len()).combinations(size).collect();
        warn_on_blowup(Strategy::Eclat, size, candidates.len());
        let num_candidates = candidates.len();

        let found: Vec<Itemset> = candidates
            .into_par_iter()
            .filter_map(|positions| {
                let mut tidset = frequent_items[positions[0]].1.clone();
                for &position in &positions[1..] {
                    tidset &= frequent_items[position].1.as_bitslice();
                }
                (tidset.count_ones() >= minimum).then(|| {
                    positions
                        .iter()
                        .map(|&position| frequent_items[position].0.clone())
                        .collect()
                })
            })
            .collect();
        debug!(
            "eclat: {} of {} candidates of length {} are frequent",
            found.len(),
            num_candidates,
            size
        );

        if found.is_empty() {
            break;
        }
        levels.insert(size, found);
    }

    MiningResult::Found(levels)
}
