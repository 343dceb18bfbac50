use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;

use super::arena::Arena;
use super::ledger_traits::LedgerStoreTrait;
use crate::analytics::{analytics_calculator, AnalyticsOverview, CategoryTotal, MonthlyTrend};
use crate::cards::{Card, CardUpdate, NewCard};
use crate::errors::{Error, Result};
use crate::market::{SimulatedTrendSource, TrendSource};
use crate::portfolio::{sort_oldest_first, NewPortfolioValue, PortfolioValue};
use crate::settings::{UserSettings, UserSettingsUpdate};
use crate::stocks::{NewStock, Stock};
use crate::transactions::{sort_newest_first, NewTransaction, Transaction};
use crate::utils::time_utils::within_inclusive;
use crate::utils::{Clock, IdGenerator, SystemClock, UuidIdGenerator};

fn read_lock<'a, T>(lock: &'a RwLock<T>, collection: &str) -> Result<RwLockReadGuard<'a, T>> {
    lock.read()
        .map_err(|_| Error::Operation(format!("{} collection lock poisoned", collection)))
}

fn write_lock<'a, T>(lock: &'a RwLock<T>, collection: &str) -> Result<RwLockWriteGuard<'a, T>> {
    lock.write()
        .map_err(|_| Error::Operation(format!("{} collection lock poisoned", collection)))
}

/// Process-lifetime ledger held entirely in memory.
///
/// Each collection has its own lock; read-modify-write operations hold the
/// write lock for the whole sequence. Stocks are keyed by symbol and settings
/// by user id, everything else by generated id.
pub struct MemLedgerStore {
    cards: RwLock<Arena<Card>>,
    transactions: RwLock<Arena<Transaction>>,
    stocks: RwLock<Arena<Stock>>,
    portfolio_history: RwLock<Arena<PortfolioValue>>,
    user_settings: RwLock<Arena<UserSettings>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    trend_source: Arc<dyn TrendSource>,
}

impl Default for MemLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemLedgerStore {
    /// Empty store with random ids, the system clock and simulated trends.
    pub fn new() -> Self {
        Self::with_components(
            Arc::new(UuidIdGenerator),
            Arc::new(SystemClock),
            Arc::new(SimulatedTrendSource::new()),
        )
    }

    pub fn with_components(
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        trend_source: Arc<dyn TrendSource>,
    ) -> Self {
        Self {
            cards: RwLock::new(Arena::new()),
            transactions: RwLock::new(Arena::new()),
            stocks: RwLock::new(Arena::new()),
            portfolio_history: RwLock::new(Arena::new()),
            user_settings: RwLock::new(Arena::new()),
            ids,
            clock,
            trend_source,
        }
    }

    pub(crate) fn next_id(&self) -> String {
        self.ids.next_id()
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Stores a transaction as given, date included. Only sample data needs
    /// back-dated records; regular inserts go through `create_transaction`.
    pub(crate) fn insert_transaction_record(&self, transaction: Transaction) -> Result<()> {
        let mut transactions = write_lock(&self.transactions, "transactions")?;
        transactions.insert(transaction.id.clone(), transaction);
        Ok(())
    }

    /// Stores a snapshot as given, timestamp included.
    pub(crate) fn insert_portfolio_record(&self, value: PortfolioValue) -> Result<()> {
        let mut history = write_lock(&self.portfolio_history, "portfolio")?;
        history.insert(value.id.clone(), value);
        Ok(())
    }

    /// Number of records per collection: cards, transactions, stocks,
    /// portfolio snapshots, settings.
    pub fn collection_sizes(&self) -> Result<[usize; 5]> {
        Ok([
            read_lock(&self.cards, "cards")?.len(),
            read_lock(&self.transactions, "transactions")?.len(),
            read_lock(&self.stocks, "stocks")?.len(),
            read_lock(&self.portfolio_history, "portfolio")?.len(),
            read_lock(&self.user_settings, "settings")?.len(),
        ])
    }
}

#[async_trait]
impl LedgerStoreTrait for MemLedgerStore {
    fn list_cards(&self) -> Result<Vec<Card>> {
        Ok(read_lock(&self.cards, "cards")?.to_vec())
    }

    fn get_card(&self, id: &str) -> Result<Option<Card>> {
        Ok(read_lock(&self.cards, "cards")?.get(id).cloned())
    }

    async fn create_card(&self, new_card: NewCard) -> Result<Card> {
        let card = new_card.into_card(self.next_id());
        debug!("Creating card {} ({})", card.id, card.network);
        write_lock(&self.cards, "cards")?.insert(card.id.clone(), card.clone());
        Ok(card)
    }

    async fn update_card(&self, id: &str, update: CardUpdate) -> Result<Option<Card>> {
        let mut cards = write_lock(&self.cards, "cards")?;
        let Some(card) = cards.get_mut(id) else {
            debug!("Card {} not found for update", id);
            return Ok(None);
        };
        card.apply_update(update);
        Ok(Some(card.clone()))
    }

    async fn delete_card(&self, id: &str) -> Result<bool> {
        let removed = write_lock(&self.cards, "cards")?.remove(id).is_some();
        debug!("Delete card {}: removed={}", id, removed);
        Ok(removed)
    }

    fn list_transactions(&self, limit: Option<usize>) -> Result<Vec<Transaction>> {
        let mut transactions = read_lock(&self.transactions, "transactions")?.to_vec();
        sort_newest_first(&mut transactions);
        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    fn list_transactions_by_card(&self, card_id: &str) -> Result<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = read_lock(&self.transactions, "transactions")?
            .values()
            .filter(|t| t.card_id.as_deref() == Some(card_id))
            .cloned()
            .collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    fn list_transactions_by_category(&self) -> Result<Vec<CategoryTotal>> {
        let transactions = read_lock(&self.transactions, "transactions")?.to_vec();
        analytics_calculator::category_totals(&transactions)
    }

    fn list_transactions_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = read_lock(&self.transactions, "transactions")?
            .values()
            .filter(|t| within_inclusive(t.date, start, end))
            .cloned()
            .collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let transaction = new_transaction.into_transaction(self.next_id(), self.now());
        debug!(
            "Creating {} transaction {} in '{}'",
            transaction.kind, transaction.id, transaction.category
        );
        write_lock(&self.transactions, "transactions")?
            .insert(transaction.id.clone(), transaction.clone());
        Ok(transaction)
    }

    fn list_stocks(&self) -> Result<Vec<Stock>> {
        Ok(read_lock(&self.stocks, "stocks")?.to_vec())
    }

    fn get_stock(&self, symbol: &str) -> Result<Option<Stock>> {
        Ok(read_lock(&self.stocks, "stocks")?.get(symbol).cloned())
    }

    async fn upsert_stock(&self, new_stock: NewStock) -> Result<Stock> {
        let mut stocks = write_lock(&self.stocks, "stocks")?;
        let id = match stocks.get(&new_stock.symbol) {
            Some(existing) => existing.id.clone(),
            None => self.next_id(),
        };
        let stock = new_stock.into_stock(id, self.now());
        debug!("Upserting stock {} ({})", stock.symbol, stock.id);
        stocks.insert(stock.symbol.clone(), stock.clone());
        Ok(stock)
    }

    fn list_portfolio_history(&self) -> Result<Vec<PortfolioValue>> {
        let mut history = read_lock(&self.portfolio_history, "portfolio")?.to_vec();
        sort_oldest_first(&mut history);
        Ok(history)
    }

    async fn add_portfolio_value(&self, new_value: NewPortfolioValue) -> Result<PortfolioValue> {
        let value = new_value.into_portfolio_value(self.next_id(), self.now());
        write_lock(&self.portfolio_history, "portfolio")?.insert(value.id.clone(), value.clone());
        Ok(value)
    }

    fn get_user_settings(&self, user_id: &str) -> Result<Option<UserSettings>> {
        Ok(read_lock(&self.user_settings, "settings")?.get(user_id).cloned())
    }

    async fn update_user_settings(
        &self,
        user_id: &str,
        update: UserSettingsUpdate,
    ) -> Result<UserSettings> {
        let mut settings = write_lock(&self.user_settings, "settings")?;
        let mut record = match settings.get(user_id) {
            Some(existing) => existing.clone(),
            None => UserSettings::defaults(self.next_id(), user_id),
        };
        record.apply_update(update);
        debug!("Updating settings for {}", user_id);
        settings.insert(user_id.to_string(), record.clone());
        Ok(record)
    }

    async fn resolve_user_settings(&self, user_id: &str) -> Result<UserSettings> {
        let mut settings = write_lock(&self.user_settings, "settings")?;
        if let Some(existing) = settings.get(user_id) {
            return Ok(existing.clone());
        }
        let record = UserSettings::defaults(self.next_id(), user_id);
        debug!("Materializing default settings for {}", user_id);
        settings.insert(user_id.to_string(), record.clone());
        Ok(record)
    }

    fn total_balance(&self) -> Result<Decimal> {
        let cards = read_lock(&self.cards, "cards")?.to_vec();
        analytics_calculator::total_balance(&cards)
    }

    fn monthly_spending(&self) -> Result<Decimal> {
        let now = self.now();
        let transactions = read_lock(&self.transactions, "transactions")?.to_vec();
        analytics_calculator::monthly_spending(&transactions, now)
    }

    fn monthly_income(&self) -> Result<Decimal> {
        let now = self.now();
        let transactions = read_lock(&self.transactions, "transactions")?.to_vec();
        analytics_calculator::monthly_income(&transactions, now)
    }

    fn investment_value(&self) -> Result<Decimal> {
        let history = read_lock(&self.portfolio_history, "portfolio")?.to_vec();
        Ok(analytics_calculator::latest_value(&history))
    }

    async fn monthly_trends(&self) -> Result<Vec<MonthlyTrend>> {
        self.trend_source.monthly_trends().await
    }

    fn analytics_overview(&self) -> Result<AnalyticsOverview> {
        let now = self.now();
        let cards = read_lock(&self.cards, "cards")?;
        let transactions = read_lock(&self.transactions, "transactions")?;
        let history = read_lock(&self.portfolio_history, "portfolio")?;
        analytics_calculator::overview(
            &cards.to_vec(),
            &transactions.to_vec(),
            &history.to_vec(),
            now,
        )
    }
}
