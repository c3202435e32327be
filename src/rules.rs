//! Association rules derived from frequent itemsets.

pub mod rule;
pub mod search;

use std::collections::HashSet;

pub use rule::Rule;
pub use search::{generate_rules, rules_from_itemset};

/// Rules keyed by `(antecedent, consequent)`.
pub type RuleSet = HashSet<Rule>;
