//! Stocks module - tracked equities keyed by symbol.

mod stocks_model;

pub use stocks_model::{NewStock, Stock};
