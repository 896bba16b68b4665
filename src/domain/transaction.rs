use super::account::Amount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    /// Signed balance change this kind of transaction applies for `amount`.
    pub fn delta(self, amount: Amount) -> Decimal {
        match self {
            TransactionKind::Deposit => amount.value(),
            TransactionKind::Withdraw => -amount.value(),
        }
    }
}

/// Immutable record of a completed balance change.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub id: Uuid,
    pub account_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Amount,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(account_id: impl Into<String>, kind: TransactionKind, amount: Amount) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id: account_id.into(),
            kind,
            amount,
            created_at: Utc::now(),
        }
    }

    pub fn deposit(account_id: impl Into<String>, amount: Amount) -> Self {
        Self::new(account_id, TransactionKind::Deposit, amount)
    }

    pub fn withdraw(account_id: impl Into<String>, amount: Amount) -> Self {
        Self::new(account_id, TransactionKind::Withdraw, amount)
    }

    pub fn delta(&self) -> Decimal {
        self.kind.delta(self.amount)
    }
}
