pub mod account;
pub mod bank;
pub mod customer;
pub mod error;
pub mod ledger;
pub mod transaction;
