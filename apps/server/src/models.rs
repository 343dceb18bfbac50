//! Request bodies and their validation into core inputs.
//!
//! Every field is optional at the serde level so that a missing or mistyped
//! field becomes a field error in a 400 response, not an extractor rejection.
//! Money fields accept a decimal string or a JSON number.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use finboard_core::{
    cards::{CardClass, CardNetwork, CardUpdate, NewCard},
    errors::{FieldError, ValidationError},
    portfolio::NewPortfolioValue,
    settings::UserSettingsUpdate,
    stocks::NewStock,
    transactions::{NewTransaction, TransactionKind},
    constants::MAX_AMOUNT_INTEGER_DIGITS,
    utils::decimal_serde::{fits_amount_range, parse_decimal},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

const THEMES: [&str; 3] = ["light", "dark", "system"];

/// Collects field-level problems for one request body.
#[derive(Debug, Default)]
struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_error(self, entity: &str) -> ValidationError {
        ValidationError::Fields {
            entity: entity.to_string(),
            errors: self.0,
        }
    }

    /// Trimmed text, rejecting a missing or blank value.
    fn required_text(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        match value.map(str::trim) {
            Some(text) if !text.is_empty() => Some(text.to_string()),
            _ => {
                self.push(field, "Required");
                None
            }
        }
    }

    /// Like `required_text`, but a missing value is fine.
    fn optional_text(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        value.and_then(|v| self.required_text(field, Some(v)))
    }

    fn parse_enum<T: FromStr>(
        &mut self,
        field: &str,
        value: Option<&str>,
        allowed: &str,
    ) -> Option<T> {
        let raw = value?;
        match raw.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.push(field, format!("Must be one of: {}", allowed));
                None
            }
        }
    }

    fn required_enum<T: FromStr>(
        &mut self,
        field: &str,
        value: Option<&str>,
        allowed: &str,
    ) -> Option<T> {
        if value.is_none() {
            self.push(field, "Required");
            return None;
        }
        self.parse_enum(field, value, allowed)
    }

    /// Decimal from a string or number. `Null` counts as absent. Values
    /// with more than `MAX_AMOUNT_INTEGER_DIGITS` integer digits are rejected.
    fn decimal(&mut self, field: &str, value: Option<&Value>) -> Option<Decimal> {
        let text = match value? {
            Value::Null => return None,
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => {
                self.push(field, "Must be a decimal number");
                return None;
            }
        };
        match parse_decimal(&text) {
            Ok(d) if fits_amount_range(d) => Some(d),
            Ok(_) => {
                self.push(
                    field,
                    format!(
                        "Must have at most {} digits before the decimal point",
                        MAX_AMOUNT_INTEGER_DIGITS
                    ),
                );
                None
            }
            Err(_) => {
                self.push(field, format!("Invalid decimal '{}'", text));
                None
            }
        }
    }

    fn required_decimal(&mut self, field: &str, value: Option<&Value>) -> Option<Decimal> {
        if value.map_or(true, Value::is_null) {
            self.push(field, "Required");
            return None;
        }
        self.decimal(field, value)
    }

    fn last_four(&mut self, value: Option<&str>) -> Option<String> {
        let digits = self.required_text("lastFour", value)?;
        if (4..=5).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
            Some(digits)
        } else {
            self.push("lastFour", "Must be 4 or 5 digits");
            None
        }
    }

    fn expiry_date(&mut self, value: Option<&str>) -> Option<String> {
        let expiry = self.required_text("expiryDate", value)?;
        if is_valid_expiry(&expiry) {
            Some(expiry)
        } else {
            self.push("expiryDate", "Must be MM/YY");
            None
        }
    }
}

fn is_valid_expiry(value: &str) -> bool {
    let Some((month, year)) = value.split_once('/') else {
        return false;
    };
    let digits = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_digit());
    if !digits(month) || !digits(year) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12))
}

// ===================== Cards =====================

#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewCardRequest {
    /// visa, mastercard or amex
    #[serde(rename = "type")]
    pub network: Option<String>,
    pub last_four: Option<String>,
    pub cardholder_name: Option<String>,
    /// MM/YY
    pub expiry_date: Option<String>,
    /// debit, credit or platinum
    pub card_type: Option<String>,
    #[schema(value_type = Option<String>, example = "100.00")]
    pub balance: Option<Value>,
    #[schema(value_type = Option<String>, example = "5000.00")]
    pub credit_limit: Option<Value>,
    pub gradient: Option<String>,
}

impl NewCardRequest {
    pub fn validate(self) -> Result<NewCard, ValidationError> {
        let mut errors = FieldErrors::default();
        let network = errors.required_enum::<CardNetwork>(
            "type",
            self.network.as_deref(),
            "visa, mastercard, amex",
        );
        let last_four = errors.last_four(self.last_four.as_deref());
        let cardholder_name =
            errors.required_text("cardholderName", self.cardholder_name.as_deref());
        let expiry_date = errors.expiry_date(self.expiry_date.as_deref());
        let card_class = errors.required_enum::<CardClass>(
            "cardType",
            self.card_type.as_deref(),
            "debit, credit, platinum",
        );
        let balance = errors.decimal("balance", self.balance.as_ref());
        let credit_limit = errors.decimal("creditLimit", self.credit_limit.as_ref());
        let gradient = errors.required_text("gradient", self.gradient.as_deref());

        match (network, last_four, cardholder_name, expiry_date, card_class, gradient) {
            (
                Some(network),
                Some(last_four),
                Some(cardholder_name),
                Some(expiry_date),
                Some(card_class),
                Some(gradient),
            ) if errors.is_empty() => Ok(NewCard {
                network,
                last_four,
                cardholder_name,
                expiry_date,
                card_class,
                balance,
                credit_limit,
                gradient,
            }),
            _ => Err(errors.into_error("card")),
        }
    }
}

#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdateRequest {
    #[serde(rename = "type")]
    pub network: Option<String>,
    pub last_four: Option<String>,
    pub cardholder_name: Option<String>,
    pub expiry_date: Option<String>,
    pub card_type: Option<String>,
    #[schema(value_type = Option<String>)]
    pub balance: Option<Value>,
    /// `null` clears the limit; omit the field to keep it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub credit_limit: Option<Option<Value>>,
    pub gradient: Option<String>,
}

impl CardUpdateRequest {
    pub fn validate(self) -> Result<CardUpdate, ValidationError> {
        let mut errors = FieldErrors::default();
        let network = errors.parse_enum::<CardNetwork>(
            "type",
            self.network.as_deref(),
            "visa, mastercard, amex",
        );
        let last_four = match self.last_four.as_deref() {
            Some(raw) => errors.last_four(Some(raw)),
            None => None,
        };
        let cardholder_name =
            errors.optional_text("cardholderName", self.cardholder_name.as_deref());
        let expiry_date = match self.expiry_date.as_deref() {
            Some(raw) => errors.expiry_date(Some(raw)),
            None => None,
        };
        let card_class = errors.parse_enum::<CardClass>(
            "cardType",
            self.card_type.as_deref(),
            "debit, credit, platinum",
        );
        let balance = match &self.balance {
            Some(raw) => errors.required_decimal("balance", Some(raw)),
            None => None,
        };
        let credit_limit = match &self.credit_limit {
            None => None,
            Some(None) => Some(None),
            Some(Some(raw)) => errors.decimal("creditLimit", Some(raw)).map(Some),
        };
        let gradient = errors.optional_text("gradient", self.gradient.as_deref());

        if !errors.is_empty() {
            return Err(errors.into_error("card"));
        }
        Ok(CardUpdate {
            network,
            last_four,
            cardholder_name,
            expiry_date,
            card_class,
            balance,
            credit_limit,
            gradient,
        })
    }
}

// ===================== Transactions =====================

/// A client-sent `date` is ignored; the server stamps the time.
#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionRequest {
    pub card_id: Option<String>,
    #[schema(value_type = String, example = "-4.95")]
    pub amount: Option<Value>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// income or expense
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub icon: Option<String>,
}

impl NewTransactionRequest {
    pub fn validate(self) -> Result<NewTransaction, ValidationError> {
        let mut errors = FieldErrors::default();
        let card_id = self
            .card_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        let amount = errors.required_decimal("amount", self.amount.as_ref());
        let description = errors.required_text("description", self.description.as_deref());
        let category = errors.required_text("category", self.category.as_deref());
        let kind = errors.required_enum::<TransactionKind>(
            "type",
            self.kind.as_deref(),
            "income, expense",
        );
        let icon = errors.required_text("icon", self.icon.as_deref());

        match (amount, description, category, kind, icon) {
            (Some(amount), Some(description), Some(category), Some(kind), Some(icon))
                if errors.is_empty() =>
            {
                Ok(NewTransaction {
                    card_id,
                    amount,
                    description,
                    category,
                    kind,
                    icon,
                })
            }
            _ => Err(errors.into_error("transaction")),
        }
    }
}

/// Rejection for a transaction that names a card the store does not have.
pub fn unknown_card_error(card_id: &str) -> ValidationError {
    ValidationError::Fields {
        entity: "transaction".to_string(),
        errors: vec![FieldError::new(
            "cardId",
            format!("Card '{}' does not exist", card_id),
        )],
    }
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct TransactionListQuery {
    /// Maximum number of rows; `0` or absent means all.
    pub limit: Option<String>,
}

impl TransactionListQuery {
    pub fn limit(&self) -> Result<Option<usize>, ValidationError> {
        match self.limit.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => match raw.parse::<usize>() {
                Ok(0) => Ok(None),
                Ok(n) => Ok(Some(n)),
                Err(_) => Err(ValidationError::InvalidInput(format!(
                    "limit must be a non-negative integer, got '{}'",
                    raw
                ))),
            },
        }
    }
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// RFC 3339 timestamp
    pub start: Option<String>,
    /// RFC 3339 timestamp
    pub end: Option<String>,
}

impl DateRangeQuery {
    pub fn bounds(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), ValidationError> {
        let mut errors = FieldErrors::default();
        let start = errors.required_text("start", self.start.as_deref());
        let end = errors.required_text("end", self.end.as_deref());
        let (Some(start), Some(end)) = (start, end) else {
            return Err(errors.into_error("date range"));
        };
        let start = DateTime::parse_from_rfc3339(&start)?.with_timezone(&Utc);
        let end = DateTime::parse_from_rfc3339(&end)?.with_timezone(&Utc);
        if start > end {
            errors.push("start", "Must not be after end");
            return Err(errors.into_error("date range"));
        }
        Ok((start, end))
    }
}

// ===================== Stocks =====================

#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewStockRequest {
    pub symbol: Option<String>,
    pub name: Option<String>,
    #[schema(value_type = String, example = "175.43")]
    pub price: Option<Value>,
    #[schema(value_type = String, example = "4.02")]
    pub change: Option<Value>,
    #[schema(value_type = String, example = "2.34")]
    pub change_percent: Option<Value>,
    pub market_cap: Option<String>,
}

impl NewStockRequest {
    pub fn validate(self) -> Result<NewStock, ValidationError> {
        let mut errors = FieldErrors::default();
        let symbol = errors
            .required_text("symbol", self.symbol.as_deref())
            .map(|s| s.to_ascii_uppercase());
        let name = errors.required_text("name", self.name.as_deref());
        let price = errors.required_decimal("price", self.price.as_ref());
        let change = errors.required_decimal("change", self.change.as_ref());
        let change_percent = errors.required_decimal("changePercent", self.change_percent.as_ref());
        let market_cap = self
            .market_cap
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        match (symbol, name, price, change, change_percent) {
            (Some(symbol), Some(name), Some(price), Some(change), Some(change_percent))
                if errors.is_empty() =>
            {
                Ok(NewStock {
                    symbol,
                    name,
                    price,
                    change,
                    change_percent,
                    market_cap,
                })
            }
            _ => Err(errors.into_error("stock")),
        }
    }
}

// ===================== Portfolio =====================

#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
pub struct NewPortfolioValueRequest {
    #[schema(value_type = String, example = "15234.10")]
    pub value: Option<Value>,
}

impl NewPortfolioValueRequest {
    pub fn validate(self) -> Result<NewPortfolioValue, ValidationError> {
        let mut errors = FieldErrors::default();
        match errors.required_decimal("value", self.value.as_ref()) {
            Some(value) if errors.is_empty() => Ok(NewPortfolioValue { value }),
            _ => Err(errors.into_error("portfolio value")),
        }
    }
}

// ===================== Settings =====================

#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
pub struct SettingsUpdateRequest {
    /// light, dark or system
    pub theme: Option<String>,
    /// Three-letter currency code
    pub currency: Option<String>,
    /// Replaces the stored preferences object wholesale.
    #[schema(value_type = Option<Object>)]
    pub preferences: Option<Map<String, Value>>,
}

impl SettingsUpdateRequest {
    pub fn validate(self) -> Result<UserSettingsUpdate, ValidationError> {
        let mut errors = FieldErrors::default();
        let theme = self.theme.map(|t| t.trim().to_ascii_lowercase());
        if let Some(theme) = &theme {
            if !THEMES.contains(&theme.as_str()) {
                errors.push("theme", format!("Must be one of: {}", THEMES.join(", ")));
            }
        }
        let currency = self.currency.map(|c| c.trim().to_ascii_uppercase());
        if let Some(currency) = &currency {
            if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
                errors.push("currency", "Must be a 3-letter currency code");
            }
        }
        if !errors.is_empty() {
            return Err(errors.into_error("settings"));
        }
        Ok(UserSettingsUpdate {
            theme,
            currency,
            preferences: self.preferences,
        })
    }
}
