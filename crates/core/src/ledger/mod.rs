//! Ledger module - the in-memory store that owns every collection.

mod arena;
pub mod ledger_traits;
pub mod mem_store;
pub mod sample_data;

pub use ledger_traits::LedgerStoreTrait;
pub use mem_store::MemLedgerStore;
