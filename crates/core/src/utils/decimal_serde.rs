use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

use crate::constants::{
    MAX_AMOUNT_INTEGER_DIGITS, MONEY_DECIMAL_PRECISION, PRICE_DECIMAL_PRECISION,
};

/// Rounds half away from zero and pads to exactly `scale` places, so
/// `150` becomes `150.00` when printed.
pub fn to_fixed(value: Decimal, scale: u32) -> Decimal {
    let mut fixed = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    fixed.rescale(scale);
    if fixed.is_zero() {
        fixed.set_sign_positive(true);
    }
    fixed
}

/// Two-place money value.
pub fn to_money(value: Decimal) -> Decimal {
    to_fixed(value, MONEY_DECIMAL_PRECISION)
}

/// Four-place price value.
pub fn to_price(value: Decimal) -> Decimal {
    to_fixed(value, PRICE_DECIMAL_PRECISION)
}

/// True when `value` has at most `MAX_AMOUNT_INTEGER_DIGITS` integer digits.
pub fn fits_amount_range(value: Decimal) -> bool {
    value.abs() < Decimal::from(10_i64.pow(MAX_AMOUNT_INTEGER_DIGITS))
}

/// Parses a decimal string, accepting plain and scientific notation.
pub fn parse_decimal(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed).or_else(|err| Decimal::from_scientific(trimmed).map_err(|_| err))
}

// Amounts arrive as strings in the wire contract; JSON numbers are tolerated.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Text(String),
    Number(serde_json::Number),
}

impl RawDecimal {
    fn into_decimal<E: Error>(self) -> Result<Decimal, E> {
        let text = match self {
            RawDecimal::Text(s) => s,
            RawDecimal::Number(n) => n.to_string(),
        };
        parse_decimal(&text).map_err(|_| E::custom(format!("Invalid Decimal: {}", text)))
    }
}

fn serialize_fixed<S>(value: &Decimal, scale: u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_fixed(*value, scale).to_string())
}

// Custom serializer/deserializer for two-place money values
pub mod money_serde {
    use super::*;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_fixed(value, MONEY_DECIMAL_PRECISION, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawDecimal::deserialize(deserializer)?.into_decimal()
    }
}

// Custom serializer/deserializer for Option<Decimal> money values
pub mod money_serde_option {
    use super::*;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serialize_fixed(d, MONEY_DECIMAL_PRECISION, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawDecimal>::deserialize(deserializer)? {
            Some(raw) => raw.into_decimal().map(Some),
            None => Ok(None),
        }
    }
}

// Custom serializer/deserializer for four-place stock prices
pub mod price_serde {
    use super::*;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_fixed(value, PRICE_DECIMAL_PRECISION, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawDecimal::deserialize(deserializer)?.into_decimal()
    }
}
