pub mod account;
pub mod catalog;
pub mod instrument;
pub mod ledger;
pub mod transaction;
