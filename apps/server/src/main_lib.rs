use std::sync::Arc;

use crate::config::Config;
use finboard_core::{
    ledger::{sample_data, LedgerStoreTrait, MemLedgerStore},
    market::{SimulatedPriceFeed, StockRefreshService, StockRefreshServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub store: Arc<dyn LedgerStoreTrait>,
    pub stock_refresh_service: Arc<dyn StockRefreshServiceTrait>,
    /// User id the settings endpoints act on.
    pub default_user: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("FB_LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("text") {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    } else {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let mem_store = Arc::new(MemLedgerStore::new());
    if config.seed_sample_data {
        sample_data::seed(&mem_store).await?;
    }
    let [cards, transactions, stocks, snapshots, settings] = mem_store.collection_sizes()?;
    tracing::info!(
        cards,
        transactions,
        stocks,
        snapshots,
        settings,
        "Ledger store ready"
    );

    let store: Arc<dyn LedgerStoreTrait> = mem_store;
    let stock_refresh_service = Arc::new(StockRefreshService::new(
        store.clone(),
        Arc::new(SimulatedPriceFeed::new()),
    ));

    Ok(Arc::new(AppState {
        store,
        stock_refresh_service,
        default_user: config.default_user.clone(),
    }))
}
