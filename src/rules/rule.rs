use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
};

use crate::{
    error::Result,
    metrics::{union, SupportCounter},
    types::{ItemName, Itemset},
};

/// `antecedent -> consequent` with its metrics, computed once at construction.
///
/// Identity is the `(antecedent, consequent)` pair; the metrics take no part
/// in equality or hashing.
#[derive(Debug, Clone)]
pub struct Rule {
    antecedent: Itemset,
    consequent: Itemset,
    support: f64,
    confidence: f64,
    lift: f64,
}

impl Rule {
    pub fn new<C>(mut antecedent: Itemset, mut consequent: Itemset, counter: &C) -> Result<Rule>
    where
        C: SupportCounter + ?Sized,
    {
        antecedent.sort_unstable();
        antecedent.dedup();
        consequent.sort_unstable();
        consequent.dedup();

        let support = counter.support(&union(&antecedent, &consequent))?;
        let confidence = counter.confidence(&antecedent, &consequent)?;
        let lift = counter.lift(&antecedent, &consequent)?;

        Ok(Rule {
            antecedent,
            consequent,
            support,
            confidence,
            lift,
        })
    }

    /// Rebuild a rule from previously computed metrics.
    pub(crate) fn from_metrics(
        antecedent: Itemset,
        consequent: Itemset,
        support: f64,
        confidence: f64,
        lift: f64,
    ) -> Rule {
        Rule {
            antecedent,
            consequent,
            support,
            confidence,
            lift,
        }
    }

    pub fn antecedent(&self) -> &[ItemName] {
        &self.antecedent
    }

    pub fn consequent(&self) -> &[ItemName] {
        &self.consequent
    }

    /// `antecedent ∪ consequent`
    pub fn itemset(&self) -> Itemset {
        union(&self.antecedent, &self.consequent)
    }

    pub fn support(&self) -> f64 {
        self.support
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn lift(&self) -> f64 {
        self.lift
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{{}}} -> {{{}}}",
            self.antecedent.join(", "),
            self.consequent.join(", ")
        )
    }
}
