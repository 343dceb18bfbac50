//! Analytics read models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::money_serde;

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    /// Sum of absolute expense amounts
    #[serde(with = "money_serde")]
    pub amount: Decimal,
    pub count: usize,
}

/// Income and spending for one named calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub month: String,
    #[serde(with = "money_serde")]
    pub income: Decimal,
    #[serde(with = "money_serde")]
    pub spending: Decimal,
}

/// Dashboard headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    #[serde(with = "money_serde")]
    pub total_balance: Decimal,
    #[serde(with = "money_serde")]
    pub monthly_spending: Decimal,
    #[serde(with = "money_serde")]
    pub monthly_income: Decimal,
    #[serde(with = "money_serde")]
    pub investment_value: Decimal,
}
