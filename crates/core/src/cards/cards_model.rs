//! Card domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::{money_serde, money_serde_option, to_money};

/// Payment network printed on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    Visa,
    Mastercard,
    Amex,
}

impl CardNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "visa",
            CardNetwork::Mastercard => "mastercard",
            CardNetwork::Amex => "amex",
        }
    }
}

impl FromStr for CardNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(CardNetwork::Visa),
            "mastercard" => Ok(CardNetwork::Mastercard),
            "amex" => Ok(CardNetwork::Amex),
            other => Err(format!("Unknown card network '{}'", other)),
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product class of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardClass {
    Debit,
    Credit,
    Platinum,
}

impl CardClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardClass::Debit => "debit",
            CardClass::Credit => "credit",
            CardClass::Platinum => "platinum",
        }
    }
}

impl FromStr for CardClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debit" => Ok(CardClass::Debit),
            "credit" => Ok(CardClass::Credit),
            "platinum" => Ok(CardClass::Platinum),
            other => Err(format!("Unknown card type '{}'", other)),
        }
    }
}

impl fmt::Display for CardClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing a payment card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    #[serde(rename = "type")]
    pub network: CardNetwork,
    pub last_four: String,
    pub cardholder_name: String,
    /// `MM/YY`
    pub expiry_date: String,
    #[serde(rename = "cardType")]
    pub card_class: CardClass,
    #[serde(with = "money_serde")]
    pub balance: Decimal,
    /// `None` means the card is not a credit product.
    #[serde(with = "money_serde_option")]
    pub credit_limit: Option<Decimal>,
    /// CSS gradient class used by the dashboard
    pub gradient: String,
}

/// Input model for creating a new card.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCard {
    pub network: CardNetwork,
    pub last_four: String,
    pub cardholder_name: String,
    pub expiry_date: String,
    pub card_class: CardClass,
    /// Defaults to zero when omitted.
    pub balance: Option<Decimal>,
    pub credit_limit: Option<Decimal>,
    pub gradient: String,
}

impl NewCard {
    /// Builds the stored record, applying the balance default. Money is kept
    /// at two places.
    pub fn into_card(self, id: String) -> Card {
        Card {
            id,
            network: self.network,
            last_four: self.last_four,
            cardholder_name: self.cardholder_name,
            expiry_date: self.expiry_date,
            card_class: self.card_class,
            balance: to_money(self.balance.unwrap_or(Decimal::ZERO)),
            credit_limit: self.credit_limit.map(to_money),
            gradient: self.gradient,
        }
    }
}

/// Partial update for a card. Only the provided fields change.
///
/// `credit_limit` is doubly optional: `Some(None)` clears the limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardUpdate {
    pub network: Option<CardNetwork>,
    pub last_four: Option<String>,
    pub cardholder_name: Option<String>,
    pub expiry_date: Option<String>,
    pub card_class: Option<CardClass>,
    pub balance: Option<Decimal>,
    pub credit_limit: Option<Option<Decimal>>,
    pub gradient: Option<String>,
}

impl Card {
    /// Shallow merge of `update` into this card.
    pub fn apply_update(&mut self, update: CardUpdate) {
        if let Some(network) = update.network {
            self.network = network;
        }
        if let Some(last_four) = update.last_four {
            self.last_four = last_four;
        }
        if let Some(name) = update.cardholder_name {
            self.cardholder_name = name;
        }
        if let Some(expiry) = update.expiry_date {
            self.expiry_date = expiry;
        }
        if let Some(card_class) = update.card_class {
            self.card_class = card_class;
        }
        if let Some(balance) = update.balance {
            self.balance = to_money(balance);
        }
        if let Some(limit) = update.credit_limit {
            self.credit_limit = limit.map(to_money);
        }
        if let Some(gradient) = update.gradient {
            self.gradient = gradient;
        }
    }
}
