//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::{config::MiningConfig, error::Result, itemsets::Strategy, report::RuleMetric};

/// Mine association rules from a transactions CSV
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Transactions CSV with columns `transaction_id,items`
    #[arg(short, long)]
    pub transactions: PathBuf,

    /// Optional product catalog CSV with a `product_name` column
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Frequent itemset mining strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Apriori)]
    pub strategy: Strategy,

    /// Minimum support, in (0, 1]
    #[arg(long, default_value = "0.2")]
    pub min_support: f64,

    /// Minimum confidence, in [0, 1]
    #[arg(long, default_value = "0.5")]
    pub min_confidence: f64,

    /// Metric to rank rules by
    #[arg(long, value_enum, default_value_t = RuleMetric::Lift)]
    pub sort_by: RuleMetric,

    /// Print only the first N rules
    #[arg(long)]
    pub top: Option<usize>,

    /// Write the ranked rules to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn mining_config(&self) -> Result<MiningConfig> {
        MiningConfig::new(self.min_support, self.min_confidence, self.strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MiningError;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["basket-rules", "--transactions", "tx.csv"]);

        assert_eq!(args.strategy, Strategy::Apriori);
        assert_eq!(args.sort_by, RuleMetric::Lift);
        assert_eq!(args.top, None);
        assert_eq!(args.mining_config().unwrap(), MiningConfig::default());
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::parse_from([
            "basket-rules",
            "-t",
            "tx.csv",
            "--catalog",
            "products.csv",
            "--strategy",
            "eclat",
            "--min-support",
            "0.4",
            "--min-confidence",
            "0.7",
            "--sort-by",
            "confidence",
            "--top",
            "5",
            "-o",
            "rules.csv",
        ]);

        assert_eq!(args.strategy, Strategy::Eclat);
        assert_eq!(args.sort_by, RuleMetric::Confidence);
        assert_eq!(args.top, Some(5));
        assert_eq!(args.output, Some(PathBuf::from("rules.csv")));

        let config = args.mining_config().unwrap();
        assert_eq!(config.min_support, 0.4);
        assert_eq!(config.min_confidence, 0.7);
    }

    #[test]
    fn test_invalid_thresholds() {
        let args = Args::parse_from(["basket-rules", "-t", "tx.csv", "--min-support", "1.5"]);
        assert!(matches!(
            args.mining_config(),
            Err(MiningError::InvalidMinSupport(_))
        ));
    }
}
