#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    use crate::errors::{Error, Result};
    use crate::ledger::{LedgerStoreTrait, MemLedgerStore};
    use crate::market::{
        apply_move, PriceFeed, PriceMove, SimulatedTrendSource, StockRefreshService,
        StockRefreshServiceTrait,
    };
    use crate::stocks::{NewStock, Stock};
    use crate::utils::{ManualClock, SequentialIdGenerator};

    struct FixedFeed;

    #[async_trait]
    impl PriceFeed for FixedFeed {
        fn id(&self) -> &'static str {
            "FIXED"
        }

        async fn next_quote(&self, stock: &Stock) -> Result<PriceMove> {
            apply_move(stock, dec!(1.00))
        }
    }

    /// Fails on one symbol, succeeds on the rest.
    struct FailingFeed {
        fail_on: &'static str,
    }

    #[async_trait]
    impl PriceFeed for FailingFeed {
        fn id(&self) -> &'static str {
            "FAILING"
        }

        async fn next_quote(&self, stock: &Stock) -> Result<PriceMove> {
            if stock.symbol == self.fail_on {
                return Err(Error::Unexpected("feed unavailable".to_string()));
            }
            apply_move(stock, dec!(1.00))
        }
    }

    fn new_stock(symbol: &str, price: rust_decimal::Decimal) -> NewStock {
        NewStock {
            symbol: symbol.to_string(),
            name: format!("{} Corp.", symbol),
            price,
            change: dec!(0),
            change_percent: dec!(0),
            market_cap: Some("1T".to_string()),
        }
    }

    async fn seeded_store() -> (Arc<MemLedgerStore>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap(),
        ));
        let store = Arc::new(MemLedgerStore::with_components(
            Arc::new(SequentialIdGenerator::new("id")),
            clock.clone(),
            Arc::new(SimulatedTrendSource::new()),
        ));
        store.upsert_stock(new_stock("AAPL", dec!(100.00))).await.unwrap();
        store.upsert_stock(new_stock("TSLA", dec!(200.00))).await.unwrap();
        (store, clock)
    }

    #[tokio::test]
    async fn test_refresh_updates_every_stock_in_place() {
        let (store, clock) = seeded_store().await;
        let before = store.list_stocks().unwrap();
        clock.advance(Duration::minutes(5));

        let service = StockRefreshService::new(store.clone(), Arc::new(FixedFeed));
        let updated = service.refresh_all().await.unwrap();

        assert_eq!(updated.len(), 2);
        let aapl = &updated[0];
        assert_eq!(aapl.symbol, "AAPL");
        assert_eq!(aapl.id, before[0].id);
        assert_eq!(aapl.price, dec!(101.00));
        assert_eq!(aapl.change, dec!(1.00));
        assert_eq!(aapl.change_percent, dec!(1.00));
        assert_eq!(aapl.market_cap.as_deref(), Some("1T"));
        assert!(aapl.last_updated > before[0].last_updated);

        assert_eq!(updated[1].change_percent, dec!(0.50));
        assert_eq!(store.list_stocks().unwrap(), updated);
    }

    #[tokio::test]
    async fn test_refresh_failure_writes_nothing() {
        let (store, clock) = seeded_store().await;
        let before = store.list_stocks().unwrap();
        clock.advance(Duration::minutes(5));

        let service =
            StockRefreshService::new(store.clone(), Arc::new(FailingFeed { fail_on: "TSLA" }));
        let result = service.refresh_all().await;

        assert!(matches!(result, Err(Error::Unexpected(_))));
        assert_eq!(store.list_stocks().unwrap(), before);
    }

    #[tokio::test]
    async fn test_refresh_overflowing_price_writes_nothing() {
        let (store, _) = seeded_store().await;
        store
            .upsert_stock(new_stock("BIG", rust_decimal::Decimal::MAX))
            .await
            .unwrap();
        let before = store.list_stocks().unwrap();

        let service = StockRefreshService::new(store.clone(), Arc::new(FixedFeed));
        let result = service.refresh_all().await;

        assert!(matches!(result, Err(Error::Operation(_))));
        assert_eq!(store.list_stocks().unwrap(), before);
    }

    #[tokio::test]
    async fn test_refresh_with_no_stocks_is_empty() {
        let store = Arc::new(MemLedgerStore::new());
        let service = StockRefreshService::new(store, Arc::new(FixedFeed));
        assert!(service.refresh_all().await.unwrap().is_empty());
    }
}
