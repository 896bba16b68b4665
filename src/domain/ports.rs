use super::account::Account;
use super::transaction::Transaction;
use crate::error::Result;
use rust_decimal::Decimal;

/// Persistence port for accounts and their transaction history.
///
/// Implementations serialize every call: a caller never observes a
/// half-applied mutation from another caller.
pub trait AccountStore: Send + Sync {
    /// Adds a new account. Fails with `AlreadyExists` on a duplicate id.
    fn create_account(&self, account: Account) -> Result<()>;

    /// Returns a copy of the account with the given id.
    fn load_account(&self, id: &str) -> Result<Account>;

    /// Applies `delta` to the account and appends `record` to the history.
    ///
    /// Returns the updated account.
    fn apply_transaction(
        &self,
        account_id: &str,
        delta: Decimal,
        record: Transaction,
    ) -> Result<Account>;

    fn all_accounts(&self) -> Result<Vec<Account>>;

    /// Transactions recorded for `account_id`, oldest first.
    fn transactions_for(&self, account_id: &str) -> Result<Vec<Transaction>>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
