//! Market data source traits.
//!
//! Nothing here talks to a real exchange. The traits mark where a live
//! provider would plug in; the shipped implementations are simulations.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::analytics::MonthlyTrend;
use crate::errors::Result;
use crate::stocks::Stock;

/// A fresh quote for one stock.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceMove {
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
}

/// Trait for stock price providers.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Unique identifier for this feed, used in logs.
    fn id(&self) -> &'static str;

    /// Next quote for `stock`, relative to its current price.
    async fn next_quote(&self, stock: &Stock) -> Result<PriceMove>;
}

/// Trait for month-by-month income/spending series.
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// Exactly twelve rows, `Jan` through `Dec`.
    async fn monthly_trends(&self) -> Result<Vec<MonthlyTrend>>;
}

/// Trait for the bulk stock refresh.
#[async_trait]
pub trait StockRefreshServiceTrait: Send + Sync {
    /// Requotes every stock and returns the full updated list. Either every
    /// stock is updated or none is.
    async fn refresh_all(&self) -> Result<Vec<Stock>>;
}
