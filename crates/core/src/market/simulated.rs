//! Randomized stand-ins for live market data.

use async_trait::async_trait;
use rand::Rng;
use rust_decimal::Decimal;

use super::market_traits::{PriceFeed, PriceMove, TrendSource};
use crate::analytics::MonthlyTrend;
use crate::constants::MONTH_LABELS;
use crate::errors::{Error, Result};
use crate::stocks::Stock;
use crate::utils::decimal_serde::{to_money, to_price};

/// Largest simulated move either way, in cents.
const MAX_MOVE_CENTS: i64 = 500;

/// Moves each price by a uniform delta in `[-5.00, 5.00)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedPriceFeed;

impl SimulatedPriceFeed {
    pub fn new() -> Self {
        Self
    }

    fn random_delta() -> Decimal {
        let cents = rand::thread_rng().gen_range(-MAX_MOVE_CENTS..MAX_MOVE_CENTS);
        Decimal::new(cents, 2)
    }
}

/// Applies `delta` to `stock`'s price: the new price and the delta at four
/// places, and the delta as a percentage of the old price at two.
///
/// Arithmetic is checked, so an out-of-range price fails the quote instead
/// of panicking.
pub fn apply_move(stock: &Stock, delta: Decimal) -> Result<PriceMove> {
    let overflow = || Error::Operation(format!("Price move for {} overflowed", stock.symbol));
    let price = stock.price.checked_add(delta).ok_or_else(overflow)?;
    let change_percent = if stock.price.is_zero() {
        Decimal::ZERO
    } else {
        delta
            .checked_div(stock.price)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(overflow)?
    };
    Ok(PriceMove {
        price: to_price(price),
        change: to_price(delta),
        change_percent: to_money(change_percent),
    })
}

#[async_trait]
impl PriceFeed for SimulatedPriceFeed {
    fn id(&self) -> &'static str {
        "SIMULATED"
    }

    async fn next_quote(&self, stock: &Stock) -> Result<PriceMove> {
        apply_move(stock, Self::random_delta())
    }
}

/// Twelve placeholder months with income in `[8000, 9000)` and spending in
/// `[2500, 3500)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedTrendSource;

impl SimulatedTrendSource {
    pub fn new() -> Self {
        Self
    }

    fn generate() -> Vec<MonthlyTrend> {
        let mut rng = rand::thread_rng();
        MONTH_LABELS
            .iter()
            .map(|month| MonthlyTrend {
                month: (*month).to_string(),
                income: Decimal::new(rng.gen_range(800_000..900_000), 2),
                spending: Decimal::new(rng.gen_range(250_000..350_000), 2),
            })
            .collect()
    }
}

#[async_trait]
impl TrendSource for SimulatedTrendSource {
    async fn monthly_trends(&self) -> Result<Vec<MonthlyTrend>> {
        Ok(Self::generate())
    }
}
