pub mod ledger_writer;
pub mod transaction_reader;
