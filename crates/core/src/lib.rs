//! Finboard Core - Ledger entities, the in-memory store, and analytics.
//!
//! This crate holds the domain models and the store behind the HTTP
//! server. It has no web or transport concerns of its own.

pub mod analytics;
pub mod cards;
pub mod constants;
pub mod errors;
pub mod ledger;
pub mod market;
pub mod portfolio;
pub mod settings;
pub mod stocks;
pub mod transactions;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
