//! Portfolio module - investment value snapshots.

mod portfolio_model;

pub use portfolio_model::{sort_oldest_first, NewPortfolioValue, PortfolioValue};
