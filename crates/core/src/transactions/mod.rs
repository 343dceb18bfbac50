//! Transactions module - income and expense events.

mod transactions_model;

pub use transactions_model::{sort_newest_first, NewTransaction, Transaction, TransactionKind};
