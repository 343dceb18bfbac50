//! Demo data so a fresh process has something to show.
//!
//! Record shapes are fixed; portfolio values are randomized around 15,000.

use chrono::Duration;
use log::info;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::ledger_traits::LedgerStoreTrait;
use super::mem_store::MemLedgerStore;
use crate::cards::{CardClass, CardNetwork, NewCard};
use crate::constants::DEFAULT_USER_ID;
use crate::errors::Result;
use crate::portfolio::NewPortfolioValue;
use crate::settings::UserSettingsUpdate;
use crate::stocks::NewStock;
use crate::transactions::{NewTransaction, TransactionKind};

const HOLDER: &str = "ALEX JOHNSON";
const PORTFOLIO_POINTS: i64 = 14;
const PORTFOLIO_STEP_MINUTES: i64 = 30;
const PORTFOLIO_BASE_CENTS: i64 = 1_500_000;
const PORTFOLIO_SPREAD_CENTS: i64 = 25_000;

fn sample_card(
    network: CardNetwork,
    last_four: &str,
    expiry: &str,
    card_class: CardClass,
    balance: Decimal,
    credit_limit: Option<Decimal>,
) -> NewCard {
    NewCard {
        network,
        last_four: last_four.to_string(),
        cardholder_name: HOLDER.to_string(),
        expiry_date: expiry.to_string(),
        card_class,
        balance: Some(balance),
        credit_limit,
        gradient: format!("card-gradient-{}", network),
    }
}

fn sample_transaction(
    card_id: Option<&str>,
    amount: Decimal,
    description: &str,
    category: &str,
    kind: TransactionKind,
    icon: &str,
) -> NewTransaction {
    NewTransaction {
        card_id: card_id.map(str::to_string),
        amount,
        description: description.to_string(),
        category: category.to_string(),
        kind,
        icon: icon.to_string(),
    }
}

fn sample_stock(
    symbol: &str,
    name: &str,
    price: Decimal,
    change: Decimal,
    pct: Decimal,
    cap: &str,
) -> NewStock {
    NewStock {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        change_percent: pct,
        market_cap: Some(cap.to_string()),
    }
}

/// Fills `store` with three cards, five transactions, three stocks, fourteen
/// half-hourly portfolio snapshots and the default user's settings.
pub async fn seed(store: &MemLedgerStore) -> Result<()> {
    let visa = store
        .create_card(sample_card(
            CardNetwork::Visa,
            "8901",
            "08/27",
            CardClass::Debit,
            dec!(8450.67),
            None,
        ))
        .await?;
    let mastercard = store
        .create_card(sample_card(
            CardNetwork::Mastercard,
            "7612",
            "12/26",
            CardClass::Credit,
            dec!(2340.23),
            Some(dec!(5000.00)),
        ))
        .await?;
    store
        .create_card(sample_card(
            CardNetwork::Amex,
            "23001",
            "03/28",
            CardClass::Platinum,
            dec!(13789.52),
            Some(dec!(25000.00)),
        ))
        .await?;

    let now = store.now();
    let transactions = [
        (
            0,
            sample_transaction(
                Some(&visa.id),
                dec!(-4.95),
                "Starbucks Coffee",
                "Food & Dining",
                TransactionKind::Expense,
                "fas fa-utensils",
            ),
        ),
        (
            1,
            sample_transaction(
                None,
                dec!(4225.00),
                "Salary Deposit",
                "Income",
                TransactionKind::Income,
                "fas fa-building",
            ),
        ),
        (
            1,
            sample_transaction(
                Some(&mastercard.id),
                dec!(-127.49),
                "Amazon Purchase",
                "Shopping",
                TransactionKind::Expense,
                "fas fa-shopping-bag",
            ),
        ),
        (
            2,
            sample_transaction(
                Some(&visa.id),
                dec!(-18.75),
                "Uber Ride",
                "Transportation",
                TransactionKind::Expense,
                "fas fa-car",
            ),
        ),
        (
            3,
            sample_transaction(
                Some(&mastercard.id),
                dec!(-52.34),
                "Shell Gas Station",
                "Transportation",
                TransactionKind::Expense,
                "fas fa-gas-pump",
            ),
        ),
    ];
    for (days_ago, transaction) in transactions {
        let date = now - Duration::days(days_ago);
        store.insert_transaction_record(transaction.into_transaction(store.next_id(), date))?;
    }

    for stock in [
        sample_stock("AAPL", "Apple Inc.", dec!(175.43), dec!(4.02), dec!(2.34), "2.7T"),
        sample_stock("TSLA", "Tesla Inc.", dec!(242.67), dec!(-3.85), dec!(-1.56), "772B"),
        sample_stock("MSFT", "Microsoft Corp.", dec!(378.85), dec!(3.27), dec!(0.87), "2.8T"),
    ] {
        store.upsert_stock(stock).await?;
    }

    let values: Vec<Decimal> = {
        let mut rng = rand::thread_rng();
        (0..PORTFOLIO_POINTS)
            .map(|_| {
                let offset = rng.gen_range(-PORTFOLIO_SPREAD_CENTS..PORTFOLIO_SPREAD_CENTS);
                Decimal::new(PORTFOLIO_BASE_CENTS + offset, 2)
            })
            .collect()
    };
    for (i, value) in values.into_iter().enumerate() {
        let steps_back = PORTFOLIO_POINTS - 1 - i as i64;
        let timestamp = now - Duration::minutes(steps_back * PORTFOLIO_STEP_MINUTES);
        store.insert_portfolio_record(
            NewPortfolioValue { value }.into_portfolio_value(store.next_id(), timestamp),
        )?;
    }

    store
        .update_user_settings(DEFAULT_USER_ID, UserSettingsUpdate::default())
        .await?;

    let [cards, transactions, stocks, snapshots, settings] = store.collection_sizes()?;
    info!(
        "Seeded sample data: {} cards, {} transactions, {} stocks, {} snapshots, {} settings",
        cards, transactions, stocks, snapshots, settings
    );
    Ok(())
}
