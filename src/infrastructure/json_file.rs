use crate::domain::account::Account;
use crate::domain::ports::AccountStore;
use crate::domain::transaction::Transaction;
use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::NamedTempFile;

/// A persistent store backed by two pretty-printed JSON documents.
///
/// The accounts document holds the full account set and the transactions
/// document holds the append-only history. Every mutation reads the whole
/// document, changes it in memory and writes it back.
///
/// One internal mutex serializes all calls on an instance, so two mutations
/// never interleave. Nothing guards against a second instance or another
/// process using the same files.
///
/// `apply_transaction` writes the accounts document first and the transactions
/// document second. If the second write fails, the balance change is already
/// durable while its record is missing; the error is still returned to the
/// caller.
pub struct JsonFileStore {
    accounts_path: PathBuf,
    transactions_path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store over the two document paths. Neither file has to exist.
    pub fn new(accounts_path: impl Into<PathBuf>, transactions_path: impl Into<PathBuf>) -> Self {
        Self {
            accounts_path: accounts_path.into(),
            transactions_path: transactions_path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn accounts_path(&self) -> &Path {
        &self.accounts_path
    }

    pub fn transactions_path(&self) -> &Path {
        &self.transactions_path
    }

    fn exclusive(&self) -> MutexGuard<'_, ()> {
        // The guarded state lives on disk, so a panic in another holder leaves
        // nothing half-updated in memory.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Reads a JSON array document. `None` when the file is absent or blank.
fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(BankError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(&data)
        .map(Some)
        .map_err(|source| BankError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}

/// Replaces the document at `path` with `items`.
///
/// The new content goes to a temporary file in the same directory which is
/// then renamed over the target, so readers see either the old or the new
/// document.
fn write_document<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let io_err = |source: io::Error| BankError::Io {
        path: path.to_path_buf(),
        source,
    };

    let data = serde_json::to_vec_pretty(items).map_err(|e| io_err(e.into()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(io_err)?;

    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(&data).map_err(io_err)?;
    file.as_file().sync_all().map_err(io_err)?;
    file.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

impl AccountStore for JsonFileStore {
    fn create_account(&self, account: Account) -> Result<()> {
        let _guard = self.exclusive();

        let mut accounts: Vec<Account> = read_document(&self.accounts_path)?.unwrap_or_default();
        if accounts.iter().any(|a| a.id() == account.id()) {
            tracing::warn!(account_id = account.id(), "Account already exists");
            return Err(BankError::AlreadyExists(account.id().to_string()));
        }

        let account_id = account.id().to_string();
        accounts.push(account);
        write_document(&self.accounts_path, &accounts)?;

        tracing::info!(%account_id, total_accounts = accounts.len(), "Account created");
        Ok(())
    }

    fn load_account(&self, id: &str) -> Result<Account> {
        let _guard = self.exclusive();

        let accounts: Vec<Account> = read_document(&self.accounts_path)?.unwrap_or_default();
        tracing::debug!(account_id = id, scanned = accounts.len(), "Loading account");
        accounts
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| BankError::NotFound(id.to_string()))
    }

    fn apply_transaction(
        &self,
        account_id: &str,
        delta: Decimal,
        record: Transaction,
    ) -> Result<Account> {
        if account_id.is_empty() {
            return Err(BankError::InvalidInput("account id cannot be empty".into()));
        }

        let _guard = self.exclusive();

        let mut accounts: Vec<Account> = read_document(&self.accounts_path)?.unwrap_or_default();
        // Parsed up front so a corrupt history is reported before any balance moves.
        let mut transactions: Vec<Transaction> =
            read_document(&self.transactions_path)?.unwrap_or_default();

        let account = accounts
            .iter_mut()
            .find(|a| a.id() == account_id)
            .ok_or_else(|| BankError::NotFound(account_id.to_string()))?;

        if let Err(e) = account.apply(delta) {
            tracing::warn!(account_id, %delta, error = %e, "Transaction rejected");
            return Err(e);
        }
        let updated = account.clone();

        write_document(&self.accounts_path, &accounts)?;

        let tx_id = record.id;
        transactions.push(record);
        if let Err(e) = write_document(&self.transactions_path, &transactions) {
            tracing::error!(
                account_id,
                %tx_id,
                %delta,
                error = %e,
                "Balance persisted but transaction record was not written"
            );
            return Err(e);
        }

        tracing::info!(
            account_id,
            %tx_id,
            %delta,
            balance = %updated.balance(),
            "Transaction applied"
        );
        Ok(updated)
    }

    fn all_accounts(&self) -> Result<Vec<Account>> {
        let _guard = self.exclusive();
        Ok(read_document(&self.accounts_path)?.unwrap_or_default())
    }

    fn transactions_for(&self, account_id: &str) -> Result<Vec<Transaction>> {
        let _guard = self.exclusive();

        let transactions: Vec<Transaction> =
            read_document(&self.transactions_path)?.unwrap_or_default();
        Ok(transactions
            .into_iter()
            .filter(|tx| tx.account_id == account_id)
            .collect())
    }
}
