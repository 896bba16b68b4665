use crate::domain::account::Account;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes accounts or transaction history as CSV with a header row.
pub struct LedgerWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> LedgerWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes `id,owner,balance` rows.
    pub fn write_accounts(&mut self, accounts: &[Account]) -> Result<()> {
        self.write_rows(accounts)
    }

    /// Writes `id,account_id,type,amount,created_at` rows.
    pub fn write_transactions(&mut self, transactions: &[Transaction]) -> Result<()> {
        self.write_rows(transactions)
    }

    fn write_rows<T: Serialize>(&mut self, rows: &[T]) -> Result<()> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
