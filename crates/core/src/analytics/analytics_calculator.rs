//! Aggregation math over plain record slices.
//!
//! Every function returns money rescaled to two places so callers can print
//! the result directly, and sums that overflow `Decimal` come back as
//! errors. None of them touch a store; the ledger passes in whatever it holds
//! under its read locks.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::analytics_model::{AnalyticsOverview, CategoryTotal};
use crate::cards::Card;
use crate::errors::{Error, Result};
use crate::portfolio::PortfolioValue;
use crate::transactions::Transaction;
use crate::utils::decimal_serde::to_money;
use crate::utils::time_utils::{start_of_month, within_inclusive};

/// Folds `amounts` with `checked_add`, so an overflowing total comes back as
/// `Error::Operation` rather than a panic.
fn checked_sum(what: &str, mut amounts: impl Iterator<Item = Decimal>) -> Result<Decimal> {
    amounts.try_fold(Decimal::ZERO, |total, amount| {
        total
            .checked_add(amount)
            .ok_or_else(|| Error::Operation(format!("{} overflowed", what)))
    })
}

/// Sum of all card balances.
pub fn total_balance(cards: &[Card]) -> Result<Decimal> {
    checked_sum("Total balance", cards.iter().map(|c| c.balance)).map(to_money)
}

/// Sum of absolute expense amounts dated within `[start, end]`.
pub fn spending_between(
    transactions: &[Transaction],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Decimal> {
    let amounts = transactions
        .iter()
        .filter(|t| t.is_expense() && within_inclusive(t.date, start, end))
        .map(|t| t.amount.abs());
    checked_sum("Spending", amounts).map(to_money)
}

/// Sum of income amounts dated within `[start, end]`, taken as-is.
pub fn income_between(
    transactions: &[Transaction],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Decimal> {
    let amounts = transactions
        .iter()
        .filter(|t| t.is_income() && within_inclusive(t.date, start, end))
        .map(|t| t.amount);
    checked_sum("Income", amounts).map(to_money)
}

/// Spending for the calendar month containing `now`, up to `now`.
pub fn monthly_spending(transactions: &[Transaction], now: DateTime<Utc>) -> Result<Decimal> {
    spending_between(transactions, start_of_month(now), now)
}

/// Income for the calendar month containing `now`, up to `now`.
pub fn monthly_income(transactions: &[Transaction], now: DateTime<Utc>) -> Result<Decimal> {
    income_between(transactions, start_of_month(now), now)
}

/// Expense totals grouped by category, in the order categories are first seen.
pub fn category_totals(transactions: &[Transaction]) -> Result<Vec<CategoryTotal>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let slot = *index
            .entry(transaction.category.as_str())
            .or_insert_with(|| {
                totals.push(CategoryTotal {
                    category: transaction.category.clone(),
                    amount: Decimal::ZERO,
                    count: 0,
                });
                totals.len() - 1
            });
        let entry = &mut totals[slot];
        entry.amount = entry
            .amount
            .checked_add(transaction.amount.abs())
            .ok_or_else(|| {
                Error::Operation(format!("Category total for '{}' overflowed", entry.category))
            })?;
        entry.count += 1;
    }

    for entry in &mut totals {
        entry.amount = to_money(entry.amount);
    }
    Ok(totals)
}

/// Value of the chronologically latest snapshot, zero when there is none.
///
/// `history` need not be sorted. Among equal timestamps the one inserted last
/// wins, matching the last element of the ascending history listing.
pub fn latest_value(history: &[PortfolioValue]) -> Decimal {
    let latest = history
        .iter()
        .enumerate()
        .max_by(|(ia, a), (ib, b)| a.timestamp.cmp(&b.timestamp).then(ia.cmp(ib)))
        .map(|(_, v)| v.value)
        .unwrap_or(Decimal::ZERO);
    to_money(latest)
}

/// All headline figures in one pass over the provided records.
pub fn overview(
    cards: &[Card],
    transactions: &[Transaction],
    history: &[PortfolioValue],
    now: DateTime<Utc>,
) -> Result<AnalyticsOverview> {
    Ok(AnalyticsOverview {
        total_balance: total_balance(cards)?,
        monthly_spending: monthly_spending(transactions, now)?,
        monthly_income: monthly_income(transactions, now)?,
        investment_value: latest_value(history),
    })
}
