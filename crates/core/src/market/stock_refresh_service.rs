use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::market_traits::{PriceFeed, StockRefreshServiceTrait};
use crate::errors::Result;
use crate::ledger::LedgerStoreTrait;
use crate::stocks::{NewStock, Stock};

/// Requotes every tracked stock from a price feed.
pub struct StockRefreshService {
    store: Arc<dyn LedgerStoreTrait>,
    feed: Arc<dyn PriceFeed>,
}

impl StockRefreshService {
    pub fn new(store: Arc<dyn LedgerStoreTrait>, feed: Arc<dyn PriceFeed>) -> Self {
        Self { store, feed }
    }
}

#[async_trait]
impl StockRefreshServiceTrait for StockRefreshService {
    async fn refresh_all(&self) -> Result<Vec<Stock>> {
        let stocks = self.store.list_stocks()?;
        debug!(
            "Refreshing {} stocks from {} feed",
            stocks.len(),
            self.feed.id()
        );

        // Quote everything before writing so a feed failure leaves the store untouched.
        let mut quoted = Vec::with_capacity(stocks.len());
        for stock in &stocks {
            match self.feed.next_quote(stock).await {
                Ok(quote) => quoted.push((stock, quote)),
                Err(e) => {
                    warn!(
                        "Feed {} failed to quote {}: {}. No stocks updated.",
                        self.feed.id(),
                        stock.symbol,
                        e
                    );
                    return Err(e);
                }
            }
        }

        let mut updated = Vec::with_capacity(quoted.len());
        for (stock, quote) in quoted {
            let replacement = NewStock {
                price: quote.price,
                change: quote.change,
                change_percent: quote.change_percent,
                ..NewStock::from(stock)
            };
            updated.push(self.store.upsert_stock(replacement).await?);
        }
        Ok(updated)
    }
}
