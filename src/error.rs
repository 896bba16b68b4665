use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BankError>;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid amount for account {account_id}: delta must be non-zero")]
    InvalidAmount { account_id: String },
    #[error(
        "Insufficient funds on account {account_id}: balance {balance}, requested {requested}"
    )]
    InsufficientFunds {
        account_id: String,
        balance: Decimal,
        requested: Decimal,
    },
    #[error("Balance of account {account_id} overflows: balance {balance}, delta {delta}")]
    BalanceOverflow {
        account_id: String,
        balance: Decimal,
        delta: Decimal,
    },
    #[error("Account {0} not found")]
    NotFound(String),
    #[error("Account {0} already exists")]
    AlreadyExists(String),
    #[error("Corrupt document {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
