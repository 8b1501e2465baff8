//! Validation of interactive input
//!
//! Amounts, currency codes and the termination token entered at the
//! session prompts. Date validation lives with the CLI parser in `cli`.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::currency::get_currency_by_code;

/// Token that ends the session from any prompt (case-insensitive)
pub const TERMINATION_TOKEN: &str = "END";

/// Largest amount representable with two decimal places
pub const MAX_AMOUNT: &str = "792281625142643375935439503.35";

/// Errors for rejected prompt input
///
/// The display strings are what the user sees before being re-prompted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Amount is not of the form `D.DD`
    #[error("Please enter a valid amount")]
    InvalidAmount(String),

    /// Amount is well-formed but exceeds `MAX_AMOUNT`
    #[error("Please enter an amount no larger than {}", MAX_AMOUNT)]
    AmountTooLarge(String),

    /// Code is not in the currency registry
    #[error("Please enter a valid currency code")]
    InvalidCurrencyCode(String),
}

/// Returns true if the input is the termination token
pub fn is_termination(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(TERMINATION_TOKEN)
}

/// Parses an amount with exactly two fractional digits (e.g. "10.00").
///
/// Both the integer part and the fractional part must be non-empty runs of
/// ASCII digits separated by a single '.'.
pub fn parse_amount(input: &str) -> Result<Decimal, InputError> {
    let trimmed = input.trim();
    let invalid = || InputError::InvalidAmount(trimmed.to_string());

    let (whole, fraction) = trimmed.split_once('.').ok_or_else(invalid)?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if !all_digits(whole) || !all_digits(fraction) || fraction.len() != 2 {
        return Err(invalid());
    }

    // Anything left over only fails by overflowing the decimal mantissa
    match Decimal::from_str(trimmed) {
        Ok(amount) if amount.scale() == 2 => Ok(amount),
        _ => Err(InputError::AmountTooLarge(trimmed.to_string())),
    }
}

/// Normalizes a currency code to uppercase and checks it against the registry
pub fn parse_currency_code(input: &str) -> Result<String, InputError> {
    let code = input.trim().to_uppercase();
    match get_currency_by_code(&code) {
        Some(currency) => Ok(currency.code.to_string()),
        None => Err(InputError::InvalidCurrencyCode(input.trim().to_string())),
    }
}
