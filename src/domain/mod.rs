//! Domain entities and the storage port they are persisted through.

pub mod account;
pub mod ports;
pub mod transaction;
