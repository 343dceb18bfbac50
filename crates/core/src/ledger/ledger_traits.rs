//! Ledger store contract.
//!
//! The HTTP layer depends on this trait only. Reads are synchronous; writes
//! and anything that may reach an external source are async, so a
//! persistent implementation can slot in behind the same seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::analytics::{AnalyticsOverview, CategoryTotal, MonthlyTrend};
use crate::cards::{Card, CardUpdate, NewCard};
use crate::errors::Result;
use crate::portfolio::{NewPortfolioValue, PortfolioValue};
use crate::settings::{UserSettings, UserSettingsUpdate};
use crate::stocks::{NewStock, Stock};
use crate::transactions::{NewTransaction, Transaction};

/// Owner of every ledger collection.
///
/// A lookup that misses is `Ok(None)` (or `Ok(false)` for deletes). `Err` is
/// reserved for operation failures.
#[async_trait]
pub trait LedgerStoreTrait: Send + Sync {
    // Cards

    /// All cards in insertion order.
    fn list_cards(&self) -> Result<Vec<Card>>;
    fn get_card(&self, id: &str) -> Result<Option<Card>>;
    /// Assigns an id and applies the balance / credit limit defaults.
    async fn create_card(&self, new_card: NewCard) -> Result<Card>;
    /// Shallow merge of the provided fields; `None` if the card is unknown.
    async fn update_card(&self, id: &str, update: CardUpdate) -> Result<Option<Card>>;
    /// Whether a card was removed.
    async fn delete_card(&self, id: &str) -> Result<bool>;

    // Transactions

    /// Newest first, truncated to `limit` when given.
    fn list_transactions(&self, limit: Option<usize>) -> Result<Vec<Transaction>>;
    fn list_transactions_by_card(&self, card_id: &str) -> Result<Vec<Transaction>>;
    /// Expense totals per category, in discovery order.
    fn list_transactions_by_category(&self) -> Result<Vec<CategoryTotal>>;
    /// Transactions dated within `[start, end]`, newest first.
    fn list_transactions_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Transaction>>;
    /// Assigns an id and stamps the current time as the date.
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    // Stocks

    fn list_stocks(&self) -> Result<Vec<Stock>>;
    fn get_stock(&self, symbol: &str) -> Result<Option<Stock>>;
    /// Insert-or-update by symbol. The id of an existing symbol is kept and
    /// `last_updated` is always restamped.
    async fn upsert_stock(&self, new_stock: NewStock) -> Result<Stock>;

    // Portfolio

    /// Oldest first.
    fn list_portfolio_history(&self) -> Result<Vec<PortfolioValue>>;
    async fn add_portfolio_value(&self, new_value: NewPortfolioValue) -> Result<PortfolioValue>;

    // Settings

    /// Raw lookup, no defaults.
    fn get_user_settings(&self, user_id: &str) -> Result<Option<UserSettings>>;
    /// Incoming fields win over the stored record, which wins over defaults.
    async fn update_user_settings(
        &self,
        user_id: &str,
        update: UserSettingsUpdate,
    ) -> Result<UserSettings>;
    /// The stored record, or a defaults record that is stored on first read.
    async fn resolve_user_settings(&self, user_id: &str) -> Result<UserSettings>;

    // Analytics

    fn total_balance(&self) -> Result<Decimal>;
    fn monthly_spending(&self) -> Result<Decimal>;
    fn monthly_income(&self) -> Result<Decimal>;
    fn investment_value(&self) -> Result<Decimal>;
    /// Twelve rows, `Jan` through `Dec`.
    async fn monthly_trends(&self) -> Result<Vec<MonthlyTrend>>;
    fn analytics_overview(&self) -> Result<AnalyticsOverview>;
}
