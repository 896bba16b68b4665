use crate::infrastructure::json_file::JsonFileStore;
use clap::Args;
use std::path::PathBuf;

/// Locations of the two ledger documents.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct StorageConfig {
    /// JSON document holding every account
    #[arg(long, env = "BANK_ACCOUNTS_FILE", default_value = "data/accounts.json")]
    pub accounts_file: PathBuf,

    /// JSON document holding the transaction history
    #[arg(
        long,
        env = "BANK_TRANSACTIONS_FILE",
        default_value = "data/transactions.json"
    )]
    pub transactions_file: PathBuf,
}

impl StorageConfig {
    pub fn open(&self) -> JsonFileStore {
        JsonFileStore::new(&self.accounts_file, &self.transactions_file)
    }
}
