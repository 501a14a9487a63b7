//! Pricing
//!
//! Parsing and display of product prices.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use thiserror::Error;

/// Errors raised while parsing a price string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The price is not in the `AMOUNT CURRENCY` format.
    #[error("invalid price format: {0}")]
    InvalidPrice(String),

    /// The currency code is not one the storefront sells in.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Parse a price string (e.g. `"59.90 USD"`) into money.
///
/// # Errors
///
/// - [`PriceError::InvalidPrice`]: the string is not `AMOUNT CURRENCY`, or the
///   amount is not a non-negative decimal with at most as many places as the
///   currency has minor digits.
/// - [`PriceError::UnknownCurrency`]: the currency code is not GBP, USD or EUR.
pub fn parse_price(s: &str) -> Result<Money<'static, Currency>, PriceError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(PriceError::InvalidPrice(format!(
            "expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(PriceError::UnknownCurrency(other.to_string())),
    };

    // Amounts are taken as written: no rounding, no negative prices.
    let minor_units = amount
        .parse::<Decimal>()
        .ok()
        .filter(|value| !value.is_sign_negative() && value.scale() <= currency.exponent)
        .zip(10_i64.checked_pow(currency.exponent))
        .and_then(|(value, scale)| value.checked_mul(Decimal::from(scale)))
        .and_then(|value| value.to_i64())
        .ok_or_else(|| PriceError::InvalidPrice(s.to_string()))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Format a price for display: currency symbol and two decimal places.
pub fn format_price(price: &Money<'_, Currency>) -> String {
    let currency = price.currency();
    let amount = price.amount().round_dp(currency.exponent);
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let amount = amount.abs();
    let places = usize::try_from(currency.exponent).unwrap_or(2);

    if currency.symbol_first {
        format!("{sign}{}{amount:.places$}", currency.symbol)
    } else {
        format!("{sign}{amount:.places$} {}", currency.symbol)
    }
}
