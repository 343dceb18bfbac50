//! Core error types for the Finboard ledger.
//!
//! Lookups that miss are not errors: the store reports them as `None` or
//! `false`. The variants here cover malformed input detected at the boundary
//! and unexpected failures while an operation runs.

use chrono::ParseError as ChronoParseError;
use serde::Serialize;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An operation could not complete, e.g. a collection lock was poisoned
    /// or the price feed failed part-way through a refresh.
    #[error("Operation failed: {0}")]
    Operation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid {entity} data")]
    Fields {
        entity: String,
        errors: Vec<FieldError>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl ValidationError {
    /// Field-level messages, empty for the non-field variants.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ValidationError::Fields { errors, .. } => errors,
            _ => &[],
        }
    }
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_are_exposed_for_field_variant() {
        let err = ValidationError::Fields {
            entity: "card".to_string(),
            errors: vec![FieldError::new("lastFour", "Must be 4 or 5 digits")],
        };
        assert_eq!(err.to_string(), "Invalid card data");
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0].field, "lastFour");
    }

    #[test]
    fn decimal_parse_errors_become_validation_errors() {
        let parse_err = "abc".parse::<rust_decimal::Decimal>().unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DecimalParse(_))
        ));
        assert!(ValidationError::InvalidInput("x".into())
            .field_errors()
            .is_empty());
    }
}
