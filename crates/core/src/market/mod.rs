//! Price and trend sources, plus the bulk stock refresh.

pub mod market_traits;
pub mod simulated;
pub mod stock_refresh_service;

mod stock_refresh_service_tests;

pub use market_traits::{PriceFeed, PriceMove, StockRefreshServiceTrait, TrendSource};
pub use simulated::{apply_move, SimulatedPriceFeed, SimulatedTrendSource};
pub use stock_refresh_service::StockRefreshService;
