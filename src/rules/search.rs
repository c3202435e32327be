use itertools::Itertools;
use log::info;
use rayon::prelude::*;

use crate::{
    error::Result,
    metrics::SupportCounter,
    rules::{Rule, RuleSet},
    types::{FrequentItemsets, ItemName, Itemset},
};

/// Generate rules based on frequent itemsets.
///
/// Every itemset of size 2 or more is split every possible way into a
/// non-empty antecedent and its complement. Rules with confidence below
/// `min_confidence` are dropped and the rest are deduplicated by
/// `(antecedent, consequent)`.
pub fn generate_rules<C>(frequent: &FrequentItemsets, min_confidence: f64, counter: &C) -> Result<RuleSet>
where
    C: SupportCounter + Sync + ?Sized,
{
    let itemsets: Vec<&Itemset> = frequent
        .iter()
        .filter(|(itemset_size, _)| **itemset_size > 1)
        .flat_map(|(_, itemsets)| itemsets.iter())
        .collect();

    let rules: RuleSet = itemsets
        .par_iter()
        .map(|itemset| rules_from_itemset(itemset, min_confidence, counter))
        .collect::<Result<Vec<Vec<Rule>>>>()?
        .into_iter()
        .flatten()
        .collect();

    info!(
        "{} rules with confidence >= {} from {} itemsets",
        rules.len(),
        min_confidence,
        itemsets.len()
    );
    Ok(rules)
}

/// Given an itemset, find the rules that can be generated from it.
/// Produces up to `2^n - 2` rules for an itemset of `n` items.
pub fn rules_from_itemset<C>(itemset: &[ItemName], min_confidence: f64, counter: &C) -> Result<Vec<Rule>>
where
    C: SupportCounter + ?Sized,
{
    let mut rules = Vec::new();

    for split in 1..itemset.len() {
        for antecedent in itemset.iter().cloned().combinations(split) {
            let consequent: Itemset = itemset
                .iter()
                .filter(|&item| !antecedent.contains(item))
                .cloned()
                .collect();

            let rule = Rule::new(antecedent, consequent, counter)?;
            if rule.confidence() >= min_confidence {
                rules.push(rule);
            }
        }
    }

    Ok(rules)
}
