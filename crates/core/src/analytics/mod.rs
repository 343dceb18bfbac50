//! Analytics module - derived read models and the math behind them.

pub mod analytics_calculator;
mod analytics_model;

pub use analytics_model::{AnalyticsOverview, CategoryTotal, MonthlyTrend};
