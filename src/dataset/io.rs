//! Readers for the two flat inputs: `transaction_id,items` and `product_name`.

use std::{io::Read, path::Path};

use serde::Deserialize;

use crate::{
    dataset::{clean::RawTransaction, Catalog},
    error::Result,
    types::TransactionId,
};

#[derive(Debug, Deserialize)]
struct TransactionRecord {
    transaction_id: TransactionId,
    #[serde(default)]
    items: String,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    product_name: String,
}

fn reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr)
}

pub fn read_raw_transactions_from<R: Read>(rdr: R) -> Result<Vec<RawTransaction>> {
    reader(rdr)
        .deserialize::<TransactionRecord>()
        .map(|record| {
            let record = record?;
            Ok(RawTransaction::new(record.transaction_id, record.items))
        })
        .collect()
}

pub fn read_raw_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<RawTransaction>> {
    read_raw_transactions_from(std::fs::File::open(path)?)
}

pub fn read_catalog_from<R: Read>(rdr: R) -> Result<Catalog> {
    let names = reader(rdr)
        .deserialize::<ProductRecord>()
        .map(|record| record.map(|record| record.product_name))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Catalog::new(names))
}

pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    read_catalog_from(std::fs::File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_transactions_with_quoted_item_lists() {
        let data = "transaction_id,items\n1,\"bread, milk\"\n2,\n7,\"eggs,milk\"\n";
        let raw = read_raw_transactions_from(data.as_bytes()).unwrap();

        assert_eq!(
            raw,
            vec![
                RawTransaction::new(1, "bread, milk"),
                RawTransaction::new(2, ""),
                RawTransaction::new(7, "eggs,milk"),
            ]
        );
    }

    #[test]
    fn rejects_non_numeric_transaction_id() {
        let data = "transaction_id,items\nabc,\"bread,milk\"\n";
        assert!(read_raw_transactions_from(data.as_bytes()).is_err());
    }

    #[test]
    fn reads_catalog_ignoring_extra_columns() {
        let data = "product_id,product_name,price\n1,Bread,2.5\n2,milk,1.0\n3,bread,2.5\n";
        let catalog = read_catalog_from(data.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("bread"));
        assert!(catalog.contains("milk"));
    }
}
