//! Flat CSV file with one rule per row:
//! `antecedent,consequent,support,confidence,lift`, item lists joined by `;`.

use std::{
    io::{Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{MiningError, Result},
    rules::Rule,
    types::{ItemName, Itemset},
};

pub const ITEM_DELIMITER: char = ';';

const HEADER: [&str; 5] = ["antecedent", "consequent", "support", "confidence", "lift"];

#[derive(Debug, Serialize, Deserialize)]
struct RuleRecord {
    antecedent: String,
    consequent: String,
    support: f64,
    confidence: f64,
    lift: f64,
}

impl RuleRecord {
    /// Fails when an item name contains [`ITEM_DELIMITER`], which could not
    /// be read back as the same item.
    fn from_rule(rule: &Rule, line: u64) -> Result<Self> {
        Ok(RuleRecord {
            antecedent: join_items(rule.antecedent(), line)?,
            consequent: join_items(rule.consequent(), line)?,
            support: rule.support(),
            confidence: rule.confidence(),
            lift: rule.lift(),
        })
    }
}

fn join_items(items: &[ItemName], line: u64) -> Result<String> {
    if let Some(item) = items.iter().find(|item| item.contains(ITEM_DELIMITER)) {
        return Err(MiningError::InvalidRecord {
            line,
            reason: format!("item {:?} contains the item delimiter {:?}", item, ITEM_DELIMITER),
        });
    }
    Ok(items.join(&ITEM_DELIMITER.to_string()))
}

fn split_items(field: &str) -> Itemset {
    let mut items: Itemset = field
        .split(ITEM_DELIMITER)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    items.sort_unstable();
    items.dedup();
    items
}

/// Writes the header even when `rules` is empty. Nothing is written if any
/// rule is rejected.
pub fn write_rules_to<'a, W, I>(wtr: W, rules: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Rule>,
{
    let records = rules
        .into_iter()
        .zip(2..)
        .map(|(rule, line)| RuleRecord::from_rule(rule, line))
        .collect::<Result<Vec<_>>>()?;

    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(wtr);
    wtr.write_record(HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_rules<'a, P, I>(path: P, rules: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Rule>,
{
    write_rules_to(std::fs::File::create(path)?, rules)
}

pub fn read_rules_from<R: Read>(rdr: R) -> Result<Vec<Rule>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let headers = rdr.headers()?.clone();
    let mut rules = Vec::new();

    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());
        let row: RuleRecord = record.deserialize(Some(&headers))?;

        let antecedent = split_items(&row.antecedent);
        let consequent = split_items(&row.consequent);
        if antecedent.is_empty() || consequent.is_empty() {
            return Err(MiningError::InvalidRecord {
                line,
                reason: "antecedent and consequent must both be non-empty".to_string(),
            });
        }
        if antecedent.iter().any(|item| consequent.contains(item)) {
            return Err(MiningError::InvalidRecord {
                line,
                reason: "antecedent and consequent overlap".to_string(),
            });
        }

        rules.push(Rule::from_metrics(
            antecedent,
            consequent,
            row.support,
            row.confidence,
            row.lift,
        ));
    }

    Ok(rules)
}

pub fn read_rules<P: AsRef<Path>>(path: P) -> Result<Vec<Rule>> {
    read_rules_from(std::fs::File::open(path)?)
}
