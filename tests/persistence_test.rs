use bank_ledger::domain::transaction::TransactionKind;
use bank_ledger::error::BankError;
use rust_decimal_macros::dec;
use std::fs;
use tempfile::tempdir;

mod common;

#[test]
fn test_deposit_scenario_on_disk() {
    let dir = tempdir().unwrap();
    let service = common::file_service(&dir);
    service.open_account("abc123", "anton", dec!(100)).unwrap();

    service.deposit("abc123", dec!(50)).unwrap();

    assert_eq!(service.check_balance("abc123").unwrap(), dec!(150));
    let history = service.transactions("abc123").unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, TransactionKind::Deposit);
    assert_eq!(history[0].amount.value(), dec!(50));

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(common::accounts_path(&dir)).unwrap()).unwrap();
    assert_eq!(raw[0]["balance"], "150");
}

#[test]
fn test_withdraw_beyond_balance_on_disk() {
    let dir = tempdir().unwrap();
    let service = common::file_service(&dir);
    service.open_account("abc123", "anton", dec!(100)).unwrap();

    let result = service.withdraw("abc123", dec!(150));

    assert!(matches!(result, Err(BankError::InsufficientFunds { .. })));
    assert_eq!(service.check_balance("abc123").unwrap(), dec!(100));
    assert!(service.transactions("abc123").unwrap().is_empty());
    assert!(!common::transactions_path(&dir).exists());
}

#[test]
fn test_empty_id_touches_no_file() {
    let dir = tempdir().unwrap();
    let service = common::file_service(&dir);

    let result = service.withdraw("", dec!(10));

    assert!(matches!(result, Err(BankError::InvalidInput(_))));
    assert!(!common::accounts_path(&dir).exists());
    assert!(!common::transactions_path(&dir).exists());
}

#[test]
fn test_non_positive_amount_changes_nothing() {
    let dir = tempdir().unwrap();
    let service = common::file_service(&dir);
    service.open_account("abc123", "anton", dec!(100)).unwrap();
    service.deposit("abc123", dec!(1)).unwrap();
    let accounts_before = fs::read(common::accounts_path(&dir)).unwrap();
    let history_before = fs::read(common::transactions_path(&dir)).unwrap();

    assert!(matches!(
        service.deposit("abc123", dec!(0)),
        Err(BankError::InvalidInput(_))
    ));
    assert!(matches!(
        service.withdraw("abc123", dec!(-5)),
        Err(BankError::InvalidInput(_))
    ));

    assert_eq!(fs::read(common::accounts_path(&dir)).unwrap(), accounts_before);
    assert_eq!(
        fs::read(common::transactions_path(&dir)).unwrap(),
        history_before
    );
}

#[test]
fn test_duplicate_account_keeps_set_size() {
    let dir = tempdir().unwrap();
    let service = common::file_service(&dir);
    service.open_account("abc123", "anton", dec!(100)).unwrap();
    service.open_account("other", "stas", dec!(0)).unwrap();

    let result = service.open_account("abc123", "anton", dec!(5));

    assert!(matches!(result, Err(BankError::AlreadyExists(id)) if id == "abc123"));
    assert_eq!(service.accounts().unwrap().len(), 2);
    assert_eq!(service.check_balance("abc123").unwrap(), dec!(100));
}

#[test]
fn test_history_survives_restart() {
    let dir = tempdir().unwrap();
    {
        let service = common::file_service(&dir);
        service.open_account("abc123", "anton", dec!(0)).unwrap();
        service.deposit("abc123", dec!(100)).unwrap();
        service.withdraw("abc123", dec!(30)).unwrap();
    }

    let service = common::file_service(&dir);
    assert_eq!(service.check_balance("abc123").unwrap(), dec!(70));
    let kinds: Vec<TransactionKind> = service
        .transactions("abc123")
        .unwrap()
        .iter()
        .map(|tx| tx.kind)
        .collect();
    assert_eq!(kinds, vec![TransactionKind::Deposit, TransactionKind::Withdraw]);
}

#[test]
fn test_legacy_float_documents_are_readable() {
    let dir = tempdir().unwrap();
    fs::write(
        common::accounts_path(&dir),
        r#"[
  {
    "id": "123",
    "owner": "Stas",
    "balance": 100
  }
]"#,
    )
    .unwrap();
    let service = common::file_service(&dir);

    service.withdraw("123", dec!(50)).unwrap();

    assert_eq!(service.check_balance("123").unwrap(), dec!(50));
}

#[test]
fn test_corrupt_accounts_document_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(common::accounts_path(&dir), "not json at all").unwrap();
    let service = common::file_service(&dir);

    assert!(matches!(
        service.deposit("abc123", dec!(1)),
        Err(BankError::Corrupt { .. })
    ));
    assert!(matches!(
        service.check_balance("abc123"),
        Err(BankError::Corrupt { .. })
    ));
}
