use bank_ledger::application::service::AccountService;
use bank_ledger::config::StorageConfig;
use bank_ledger::domain::transaction::TransactionKind;
use bank_ledger::interfaces::csv::ledger_writer::LedgerWriter;
use bank_ledger::interfaces::csv::transaction_reader::TransactionReader;
use bank_ledger::telemetry;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    storage: StorageConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open a new account
    Open {
        id: String,
        owner: String,
        /// Initial balance
        #[arg(long, default_value = "0")]
        balance: Decimal,
    },
    /// Deposit funds into an account
    Deposit { id: String, amount: Decimal },
    /// Withdraw funds from an account
    Withdraw { id: String, amount: Decimal },
    /// Print the balance of an account
    Balance { id: String },
    /// Print the transaction history of an account as CSV
    History { id: String },
    /// Print every account as CSV
    Accounts,
    /// Apply a CSV file of `type, account, amount` rows, then print every account
    Batch { input: PathBuf },
}

fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let service = AccountService::new(Box::new(cli.storage.open()));
    let stdout = io::stdout();

    match cli.command {
        Command::Open { id, owner, balance } => {
            let account = service
                .open_account(&id, &owner, balance)
                .into_diagnostic()?;
            println!(
                "Opened account {} with balance {}",
                account.id(),
                account.balance()
            );
        }
        Command::Deposit { id, amount } => {
            service.deposit(&id, amount).into_diagnostic()?;
            println!("Deposited {amount} into {id}");
        }
        Command::Withdraw { id, amount } => {
            service.withdraw(&id, amount).into_diagnostic()?;
            println!("Withdrew {amount} from {id}");
        }
        Command::Balance { id } => {
            let balance = service.check_balance(&id).into_diagnostic()?;
            println!("{balance}");
        }
        Command::History { id } => {
            let transactions = service.transactions(&id).into_diagnostic()?;
            LedgerWriter::new(stdout.lock())
                .write_transactions(&transactions)
                .into_diagnostic()?;
        }
        Command::Accounts => {
            let accounts = service.accounts().into_diagnostic()?;
            LedgerWriter::new(stdout.lock())
                .write_accounts(&accounts)
                .into_diagnostic()?;
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = TransactionReader::new(file);
            for entry in reader.entries() {
                match entry {
                    Ok(entry) => {
                        let result = match entry.r#type {
                            TransactionKind::Deposit => {
                                service.deposit(&entry.account, entry.amount)
                            }
                            TransactionKind::Withdraw => {
                                service.withdraw(&entry.account, entry.amount)
                            }
                        };
                        if let Err(e) = result {
                            eprintln!("Error processing transaction: {}", e);
                        }
                    }
                    Err(e) => {
                        eprintln!("Error reading transaction: {}", e);
                    }
                }
            }

            let accounts = service.accounts().into_diagnostic()?;
            LedgerWriter::new(stdout.lock())
                .write_accounts(&accounts)
                .into_diagnostic()?;
        }
    }

    Ok(())
}
