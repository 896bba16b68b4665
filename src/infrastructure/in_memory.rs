use crate::domain::account::Account;
use crate::domain::ports::AccountStore;
use crate::domain::transaction::Transaction;
use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct Ledger {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
}

/// A thread-safe in-memory store for accounts and their history.
///
/// Same contract as the file store without the disk. Useful for tests and for
/// scratch runs where persistence is not required. `Clone` shares the state.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    ledger: Arc<Mutex<Ledger>>,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AccountStore for InMemoryStore {
    fn create_account(&self, account: Account) -> Result<()> {
        let mut ledger = self.ledger();
        if ledger.accounts.iter().any(|a| a.id() == account.id()) {
            return Err(BankError::AlreadyExists(account.id().to_string()));
        }
        ledger.accounts.push(account);
        Ok(())
    }

    fn load_account(&self, id: &str) -> Result<Account> {
        self.ledger()
            .accounts
            .iter()
            .find(|a| a.id() == id)
            .cloned()
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

        let mut ledger = self.ledger();
        let account = ledger
            .accounts
            .iter_mut()
            .find(|a| a.id() == account_id)
            .ok_or_else(|| BankError::NotFound(account_id.to_string()))?;
        account.apply(delta)?;
        let updated = account.clone();
        ledger.transactions.push(record);
        Ok(updated)
    }

    fn all_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.ledger().accounts.clone())
    }

    fn transactions_for(&self, account_id: &str) -> Result<Vec<Transaction>> {
        Ok(self
            .ledger()
            .transactions
            .iter()
            .filter(|tx| tx.account_id == account_id)
            .cloned()
            .collect())
    }
}
