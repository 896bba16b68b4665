use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Represents a strictly positive monetary amount for transactions.
///
/// Deserialization goes through [`Amount::new`], so a persisted record can never
/// carry a zero or negative amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(BankError::InvalidInput(format!(
                "amount must be greater than zero, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = BankError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A balance-holding account.
///
/// The balance is private: the only way to change it is [`Account::apply`],
/// which keeps it non-negative.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    id: String,
    owner: String,
    #[serde(deserialize_with = "deserialize_balance")]
    balance: Decimal,
}

fn deserialize_balance<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let balance = <Decimal as Deserialize>::deserialize(deserializer)?;
    if balance < Decimal::ZERO {
        return Err(serde::de::Error::custom(format!(
            "negative balance {balance}"
        )));
    }
    Ok(balance)
}

impl Account {
    pub fn new(id: impl Into<String>, owner: impl Into<String>, balance: Decimal) -> Result<Self> {
        let id = id.into();
        let owner = owner.into();
        if id.is_empty() {
            return Err(BankError::InvalidInput("account id cannot be empty".into()));
        }
        if owner.is_empty() {
            return Err(BankError::InvalidInput(format!(
                "owner of account {id} cannot be empty"
            )));
        }
        if balance < Decimal::ZERO {
            return Err(BankError::InvalidInput(format!(
                "initial balance of account {id} cannot be negative, got {balance}"
            )));
        }
        Ok(Self { id, owner, balance })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Moves the balance by `delta`.
    ///
    /// Fails without touching the balance when `delta` is zero, when a
    /// negative `delta` would take the balance below zero, or when the sum
    /// does not fit in a `Decimal`.
    pub fn apply(&mut self, delta: Decimal) -> Result<()> {
        if delta.is_zero() {
            return Err(BankError::InvalidAmount {
                account_id: self.id.clone(),
            });
        }
        let updated = self
            .balance
            .checked_add(delta)
            .ok_or_else(|| BankError::BalanceOverflow {
                account_id: self.id.clone(),
                balance: self.balance,
                delta,
            })?;
        if delta < Decimal::ZERO && updated < Decimal::ZERO {
            return Err(BankError::InsufficientFunds {
                account_id: self.id.clone(),
                balance: self.balance,
                requested: -delta,
            });
        }
        self.balance = updated;
        Ok(())
    }
}
