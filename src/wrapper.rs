use pyo3::{exceptions::PyValueError, prelude::*, wrap_pyfunction};

use crate::{
    dataset::{normalize, Dataset, Transaction},
    error::MiningError,
    mine_and_generate_rules, report, MiningResult, RuleMetric, Strategy,
};

type PyRule = (Vec<String>, Vec<String>, f64, f64, f64);

impl From<MiningError> for PyErr {
    fn from(err: MiningError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Mine association rules from a list of transactions.
///
/// Item names are trimmed and lowercased. Returns `None` when no item is
/// frequent, otherwise a list of `(antecedent, consequent, support,
/// confidence, lift)` ranked by lift.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, min_confidence, strategy = "apriori"))]
fn mine_rules(
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: f64,
    strategy: &str,
) -> PyResult<Option<Vec<PyRule>>> {
    let strategy: Strategy = strategy.parse()?;
    let dataset: Dataset = transactions
        .into_iter()
        .enumerate()
        .map(|(id, items)| {
            let items = items
                .iter()
                .map(|item| normalize(item))
                .filter(|item| !item.is_empty());
            Transaction::new(id as u64 + 1, items)
        })
        .collect();

    match mine_and_generate_rules(&dataset, min_support, min_confidence, strategy)? {
        MiningResult::NoFrequentItemsets => Ok(None),
        MiningResult::Found(rules) => Ok(Some(
            report::sort_rules(rules, RuleMetric::Lift)
                .into_iter()
                .map(|rule| {
                    (
                        rule.antecedent().to_vec(),
                        rule.consequent().to_vec(),
                        rule.support(),
                        rule.confidence(),
                        rule.lift(),
                    )
                })
                .collect(),
        )),
    }
}

#[pymodule]
fn basket_rules(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine_rules, m)?)?;
    Ok(())
}
