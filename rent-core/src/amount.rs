//! Parsing of free-form amount text.
//!
//! Amount fields are typed by the user and stored as raw text. Whether a
//! field counts as "entered" is decided by [`parse_amount`]; arithmetic
//! always goes through [`lenient_amount`], which never fails.
//!
//! Amounts larger in magnitude than [`MAX_AMOUNT`] are rejected like any
//! other malformed text, so invoice arithmetic stays far from the
//! `Decimal` range.

use rust_decimal::Decimal;
use thiserror::Error;

/// Largest magnitude, in whole currency units, accepted for a typed amount.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Error returned when amount text cannot be read as a [`Decimal`].
#[derive(Debug, Error, PartialEq)]
pub enum ParseAmountError {
    #[error("no amount entered")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{input}' exceeds the maximum of {MAX_AMOUNT}")]
    OutOfRange { input: String },
}

/// Trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Strictly parses amount text.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Empty or
/// whitespace-only input is [`ParseAmountError::Empty`]; `"0"` is a valid
/// amount. Values beyond [`MAX_AMOUNT`] either way are
/// [`ParseAmountError::OutOfRange`].
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    let value: Decimal = normalized
        .parse()
        .map_err(|source| ParseAmountError::Invalid {
            input: s.to_string(),
            source,
        })?;
    if value.abs() > Decimal::from(MAX_AMOUNT) {
        return Err(ParseAmountError::OutOfRange {
            input: s.to_string(),
        });
    }
    Ok(value)
}

/// Parses amount text, coercing missing or malformed input to zero.
///
/// Malformed (non-empty) input is logged at warn level.
pub fn lenient_amount(s: &str) -> Decimal {
    match parse_amount(s) {
        Ok(value) => value,
        Err(ParseAmountError::Empty) => Decimal::ZERO,
        Err(e) => {
            tracing::warn!(input = %s, "treating amount as zero: {}", e);
            Decimal::ZERO
        }
    }
}
