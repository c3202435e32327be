//! Frequent itemset mining.
//!
//! Two interchangeable strategies produce the same level map
//! (`itemset size -> frequent itemsets of that size`):
//! [`apriori`] tests candidates against the horizontal table and
//! [`eclat`] intersects id sets of a [`VerticalIndex`].
//!
//! The strategies keep their own threshold comparisons. Apriori keeps an
//! itemset when `support >= min_support` at every level. Eclat keeps a single
//! item only when its id set is strictly larger than
//! `ceil(universe * min_support)`, and larger itemsets when the intersection
//! is at least that size. An item sitting exactly on the threshold is
//! therefore frequent for Apriori and not for Eclat.

pub mod apriori;
pub mod eclat;

use std::{fmt, str::FromStr};

use log::warn;

use crate::{
    dataset::{Catalog, Dataset},
    error::MiningError,
    index::VerticalIndex,
    types::{FrequentItemsets, ItemsetLength},
};

/// Candidate count per level above which a run is flagged as a likely
/// combinatorial blow-up. The search itself is never cut short.
pub const CANDIDATE_WARNING_THRESHOLD: usize = 1_000_000;

/// Outcome of a mining run.
#[derive(Debug, Clone, PartialEq)]
pub enum MiningResult<T> {
    Found(T),
    /// No single item met the minimum support.
    NoFrequentItemsets,
}

impl<T> MiningResult<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, MiningResult::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            MiningResult::Found(value) => Some(value),
            MiningResult::NoFrequentItemsets => None,
        }
    }

    pub fn as_ref(&self) -> MiningResult<&T> {
        match self {
            MiningResult::Found(value) => MiningResult::Found(value),
            MiningResult::NoFrequentItemsets => MiningResult::NoFrequentItemsets,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> MiningResult<U> {
        match self {
            MiningResult::Found(value) => MiningResult::Found(f(value)),
            MiningResult::NoFrequentItemsets => MiningResult::NoFrequentItemsets,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Strategy {
    #[default]
    Apriori,
    Eclat,
}

impl Strategy {
    /// Mine `dataset` with this strategy.
    ///
    /// Apriori seeds level 1 from `catalog`, falling back to the dataset's own
    /// items. Eclat builds its vertical index here and ignores the catalog.
    /// `min_support` must already be validated (see [`MiningConfig`](crate::MiningConfig)).
    pub fn mine(
        self,
        dataset: &Dataset,
        catalog: Option<&Catalog>,
        min_support: f64,
    ) -> MiningResult<FrequentItemsets> {
        match self {
            Strategy::Apriori => match catalog {
                Some(catalog) => apriori::mine(dataset, catalog, min_support),
                None => apriori::mine(dataset, &Catalog::from_dataset(dataset), min_support),
            },
            Strategy::Eclat => eclat::mine(&VerticalIndex::build(dataset), min_support),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Apriori => write!(f, "apriori"),
            Strategy::Eclat => write!(f, "eclat"),
        }
    }
}

impl FromStr for Strategy {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "apriori" => Ok(Strategy::Apriori),
            "eclat" => Ok(Strategy::Eclat),
            _ => Err(MiningError::UnknownStrategy(s.to_string())),
        }
    }
}

fn warn_on_blowup(strategy: Strategy, size: ItemsetLength, num_candidates: usize) {
    if num_candidates > CANDIDATE_WARNING_THRESHOLD {
        warn!(
            "{}: {} candidates of length {}; consider raising the minimum support",
            strategy, num_candidates, size
        );
    }
}
