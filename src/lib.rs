//! Association rule mining over market-basket transactions.
//!
//! Frequent itemsets are found with either [`Strategy::Apriori`] (level-wise
//! candidate testing over the transaction table) or [`Strategy::Eclat`]
//! (id-set intersection over a [`VerticalIndex`]). Rules are then generated
//! from every split of every frequent itemset and scored by support,
//! confidence and lift.

pub mod cli;
mod combi;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod index;
pub mod itemsets;
pub mod metrics;
pub mod report;
pub mod rules;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

use log::info;

pub use config::MiningConfig;
pub use dataset::{Catalog, Dataset, Transaction};
pub use error::{MiningError, Result};
pub use index::VerticalIndex;
pub use itemsets::{MiningResult, Strategy};
pub use metrics::SupportCounter;
pub use report::RuleMetric;
pub use rules::{generate_rules, Rule, RuleSet};
pub use types::{FrequentItemsets, ItemName, Itemset};

/// Mine `dataset` and generate rules in one call.
///
/// Fails with [`MiningError::InvalidMinSupport`] or
/// [`MiningError::InvalidMinConfidence`] before any mining when a threshold is
/// out of range.
pub fn mine_and_generate_rules(
    dataset: &Dataset,
    min_support: f64,
    min_confidence: f64,
    strategy: Strategy,
) -> Result<MiningResult<RuleSet>> {
    let config = MiningConfig::new(min_support, min_confidence, strategy)?;
    mine_with_catalog(dataset, None, &config)
}

/// Like [`mine_and_generate_rules`], seeding Apriori from `catalog` when given.
pub fn mine_with_catalog(
    dataset: &Dataset,
    catalog: Option<&Catalog>,
    config: &MiningConfig,
) -> Result<MiningResult<RuleSet>> {
    config.validate()?;
    info!(
        "mining {} transactions with {} (min_support={}, min_confidence={})",
        dataset.len(),
        config.strategy,
        config.min_support,
        config.min_confidence
    );

    match config.strategy {
        Strategy::Apriori => {
            let frequent = config.strategy.mine(dataset, catalog, config.min_support);
            match frequent {
                MiningResult::Found(frequent) => Ok(MiningResult::Found(generate_rules(
                    &frequent,
                    config.min_confidence,
                    dataset,
                )?)),
                MiningResult::NoFrequentItemsets => Ok(MiningResult::NoFrequentItemsets),
            }
        }
        Strategy::Eclat => {
            let index = VerticalIndex::build(dataset);
            match itemsets::eclat::mine(&index, config.min_support) {
                MiningResult::Found(frequent) => Ok(MiningResult::Found(generate_rules(
                    &frequent,
                    config.min_confidence,
                    &index,
                )?)),
                MiningResult::NoFrequentItemsets => Ok(MiningResult::NoFrequentItemsets),
            }
        }
    }
}
