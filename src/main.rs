use anyhow::{Context, Result};
use basket_rules::{
    cli::Args,
    dataset::{clean::clean, io},
    export, mine_with_catalog, report, MiningResult,
};
use clap::Parser;
use log::info;
use std::time::Instant;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = args.mining_config()?;

    let catalog = match &args.catalog {
        Some(path) => Some(
            io::read_catalog(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?,
        ),
        None => None,
    };
    let raw = io::read_raw_transactions(&args.transactions)
        .with_context(|| format!("failed to read transactions {}", args.transactions.display()))?;

    let (dataset, cleaning) = clean(&raw, catalog.as_ref());
    info!(
        "{} of {} transactions kept, {} distinct items",
        cleaning.valid_transactions, cleaning.original_total, cleaning.unique_items
    );

    let start_time = Instant::now();
    let rules = match mine_with_catalog(&dataset, catalog.as_ref(), &config)? {
        MiningResult::Found(rules) => rules,
        MiningResult::NoFrequentItemsets => {
            println!(
                "No frequent itemsets at min_support={}; try a lower threshold.",
                config.min_support
            );
            if let Some(path) = &args.output {
                export::write_rules(path, std::iter::empty())
                    .with_context(|| format!("failed to write rules to {}", path.display()))?;
                info!("wrote an empty rule file to {}", path.display());
            }
            return Ok(());
        }
    };
    info!("mined {} rules in {:.2?}", rules.len(), start_time.elapsed());

    let mut ranked = report::sort_rules(rules, args.sort_by);
    if let Some(top) = args.top {
        ranked.truncate(top);
    }

    if ranked.is_empty() {
        println!(
            "No rules with confidence >= {}.",
            config.min_confidence
        );
    } else {
        println!("{}", report::format_rules(&ranked));
    }

    if let Some(path) = &args.output {
        export::write_rules(path, &ranked)
            .with_context(|| format!("failed to write rules to {}", path.display()))?;
        info!("wrote {} rules to {}", ranked.len(), path.display());
    }

    Ok(())
}
