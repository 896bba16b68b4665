use crate::domain::account::{Account, Amount};
use crate::domain::ports::AccountStoreBox;
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::error::{BankError, Result};
use rust_decimal::Decimal;

/// The entry point for account operations.
///
/// `AccountService` only checks the shape of its inputs. Whether a balance
/// change is allowed is decided by [`Account::apply`] inside the store, under
/// the store's lock.
pub struct AccountService {
    store: AccountStoreBox,
}

fn require_id(account_id: &str) -> Result<()> {
    if account_id.is_empty() {
        return Err(BankError::InvalidInput("account id cannot be empty".into()));
    }
    Ok(())
}

impl AccountService {
    /// Creates a new `AccountService` over the given store.
    pub fn new(store: AccountStoreBox) -> Self {
        Self { store }
    }

    /// Opens a new account with an initial balance.
    pub fn open_account(&self, id: &str, owner: &str, initial_balance: Decimal) -> Result<Account> {
        let account = Account::new(id, owner, initial_balance)?;
        self.store.create_account(account.clone())?;
        Ok(account)
    }

    pub fn deposit(&self, account_id: &str, amount: Decimal) -> Result<()> {
        self.transact(account_id, TransactionKind::Deposit, amount)
    }

    pub fn withdraw(&self, account_id: &str, amount: Decimal) -> Result<()> {
        self.transact(account_id, TransactionKind::Withdraw, amount)
    }

    pub fn check_balance(&self, account_id: &str) -> Result<Decimal> {
        require_id(account_id)?;
        Ok(self.store.load_account(account_id)?.balance())
    }

    /// Transaction history of one account, oldest first.
    pub fn transactions(&self, account_id: &str) -> Result<Vec<Transaction>> {
        require_id(account_id)?;
        self.store.transactions_for(account_id)
    }

    pub fn accounts(&self) -> Result<Vec<Account>> {
        self.store.all_accounts()
    }

    fn transact(&self, account_id: &str, kind: TransactionKind, amount: Decimal) -> Result<()> {
        require_id(account_id)?;
        let amount = Amount::new(amount)?;

        let record = Transaction::new(account_id, kind, amount);
        tracing::debug!(
            account_id,
            tx_id = %record.id,
            ?kind,
            amount = %amount.value(),
            "Submitting transaction"
        );
        self.store.apply_transaction(account_id, kind.delta(amount), record)?;
        Ok(())
    }
}
