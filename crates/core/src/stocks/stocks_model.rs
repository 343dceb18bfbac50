//! Stock domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::{money_serde, price_serde, to_money, to_price};

/// A tracked equity. `symbol` is the natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(with = "price_serde")]
    pub price: Decimal,
    #[serde(with = "price_serde")]
    pub change: Decimal,
    #[serde(with = "money_serde")]
    pub change_percent: Decimal,
    /// Free text such as `2.7T` or `772B`
    pub market_cap: Option<String>,
    pub last_updated: DateTime<Utc>,
}

/// Input model for upserting a stock by symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStock {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub market_cap: Option<String>,
}

impl NewStock {
    pub fn into_stock(self, id: String, last_updated: DateTime<Utc>) -> Stock {
        Stock {
            id,
            symbol: self.symbol,
            name: self.name,
            price: to_price(self.price),
            change: to_price(self.change),
            change_percent: to_money(self.change_percent),
            market_cap: self.market_cap,
            last_updated,
        }
    }
}

impl From<&Stock> for NewStock {
    fn from(stock: &Stock) -> Self {
        Self {
            symbol: stock.symbol.clone(),
            name: stock.name.clone(),
            price: stock.price,
            change: stock.change,
            change_percent: stock.change_percent,
            market_cap: stock.market_cap.clone(),
        }
    }
}
