use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{GatewatchError, Result};
use crate::models::{CheckoutRecord, RawTransaction, Transaction};

/// Fixed input filenames, read from the working directory.
pub const CHECKOUT_FILE: &str = "checkout_2.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";

/// Timestamp formats accepted in the transactions export.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(ts);
        }
    }
    Err(GatewatchError::Timestamp(raw.to_string()))
}

pub fn load_checkouts(path: &Path) -> Result<Vec<CheckoutRecord>> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new().from_reader(BufReader::new(file));
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: CheckoutRecord = result?;
        rows.push(record);
    }
    Ok(rows)
}

pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new().from_reader(BufReader::new(file));
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let raw: RawTransaction = result?;
        rows.push(Transaction {
            timestamp: parse_timestamp(&raw.timestamp)?,
            status: raw.status,
            count: raw.count,
        });
    }
    Ok(rows)
}
