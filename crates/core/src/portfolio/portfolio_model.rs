//! Portfolio value history models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::{money_serde, to_money};

/// One point of the append-only investment value series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValue {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(with = "money_serde")]
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPortfolioValue {
    pub value: Decimal,
}

impl NewPortfolioValue {
    pub fn into_portfolio_value(self, id: String, timestamp: DateTime<Utc>) -> PortfolioValue {
        PortfolioValue {
            id,
            timestamp,
            value: to_money(self.value),
        }
    }
}

/// Sorts oldest first. Ties keep their insertion order.
pub fn sort_oldest_first(history: &mut [PortfolioValue]) {
    history.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
}
