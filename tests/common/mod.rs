#![allow(dead_code)]

use bank_ledger::application::service::AccountService;
use bank_ledger::infrastructure::json_file::JsonFileStore;
use std::fs::File;
use std::io::Error;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn accounts_path(dir: &TempDir) -> PathBuf {
    dir.path().join("accounts.json")
}

pub fn transactions_path(dir: &TempDir) -> PathBuf {
    dir.path().join("transactions.json")
}

pub fn file_store(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(accounts_path(dir), transactions_path(dir))
}

pub fn file_service(dir: &TempDir) -> AccountService {
    AccountService::new(Box::new(file_store(dir)))
}

/// Writes a batch file of `rows` deposits of 1.0 into `account`.
pub fn generate_csv(path: &Path, account: &str, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "account", "amount"])?;

    for _ in 1..=rows {
        wtr.write_record(["deposit", account, "1.0"])?;
    }

    wtr.flush()?;
    Ok(())
}
