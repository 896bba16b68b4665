use crate::domain::transaction::TransactionKind;
use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One requested balance change from a batch file.
///
/// Amounts are kept as given; the service validates them when the entry is
/// applied.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct BatchEntry {
    pub r#type: TransactionKind,
    pub account: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Reads batch entries from a CSV source with a `type, account, amount` header.
///
/// Fields are trimmed, so `deposit, abc123, 1.0` is accepted. A row that does
/// not fit `BatchEntry` yields an error for that row only.
pub struct TransactionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TransactionReader<R> {
    /// Wraps a batch file or any other byte source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes entries.
    pub fn entries(self) -> impl Iterator<Item = Result<BatchEntry>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BankError::from))
    }
}
