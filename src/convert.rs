//! Amount conversion
//!
//! Multiplies an amount by an exchange rate in decimal arithmetic and
//! rounds to cents, half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use thiserror::Error;

/// Number of fractional digits kept in converted amounts
const CENTS_SCALE: u32 = 2;

/// Errors that can occur when converting an amount
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The rate cannot be represented as a decimal (NaN, infinite or too large)
    #[error("Unusable exchange rate: {0}")]
    InvalidRate(String),

    /// The product does not fit in a decimal
    #[error("Converted amount is out of range")]
    Overflow,
}

/// Converts a float rate into a decimal using its shortest round-trip form
///
/// `1.2345_f64` becomes exactly `1.2345`, not the nearest binary value.
pub fn rate_to_decimal(rate: f64) -> Result<Decimal, ConvertError> {
    if !rate.is_finite() {
        return Err(ConvertError::InvalidRate(rate.to_string()));
    }
    Decimal::from_str(&rate.to_string()).map_err(|_| ConvertError::InvalidRate(rate.to_string()))
}

/// Returns `round(rate * amount, 2)`
pub fn convert(amount: Decimal, rate: f64) -> Result<Decimal, ConvertError> {
    let rate = rate_to_decimal(rate)?;
    let product = amount.checked_mul(rate).ok_or(ConvertError::Overflow)?;
    Ok(product.round_dp_with_strategy(CENTS_SCALE, RoundingStrategy::MidpointAwayFromZero))
}
