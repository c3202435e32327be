use std::{cmp::Ordering, fmt};

use crate::rules::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum RuleMetric {
    Support,
    Confidence,
    #[default]
    Lift,
}

impl RuleMetric {
    pub fn of(self, rule: &Rule) -> f64 {
        match self {
            RuleMetric::Support => rule.support(),
            RuleMetric::Confidence => rule.confidence(),
            RuleMetric::Lift => rule.lift(),
        }
    }
}

impl fmt::Display for RuleMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleMetric::Support => write!(f, "support"),
            RuleMetric::Confidence => write!(f, "confidence"),
            RuleMetric::Lift => write!(f, "lift"),
        }
    }
}

/// Highest `metric` first; ties ordered by antecedent, then consequent.
pub fn sort_rules<I>(rules: I, metric: RuleMetric) -> Vec<Rule>
where
    I: IntoIterator<Item = Rule>,
{
    let mut rules: Vec<Rule> = rules.into_iter().collect();
    rules.sort_by(|a, b| compare(a, b, metric));
    rules
}

fn compare(a: &Rule, b: &Rule, metric: RuleMetric) -> Ordering {
    metric
        .of(b)
        .total_cmp(&metric.of(a))
        .then_with(|| a.antecedent().cmp(b.antecedent()))
        .then_with(|| a.consequent().cmp(b.consequent()))
}

pub fn format_rule(rule: &Rule) -> String {
    format!(
        "{}  support={:.4} confidence={:.4} lift={:.4}",
        rule, rule.support(), rule.confidence(), rule.lift()
    )
}

/// One line per rule, in the given order.
pub fn format_rules(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(format_rule)
        .collect::<Vec<_>>()
        .join("\n")
}
