//! Remote exchange-rate sources
//!
//! Defines the `RateSource` seam used by the resolver and the fastFOREX
//! client that implements it.

pub mod fastforex;

pub use fastforex::{FastForexClient, DEFAULT_BASE_URL};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A full table of historical rates for one base currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRates {
    /// Units of each currency per one unit of the base currency
    pub results: BTreeMap<String, f64>,
}

impl HistoricalRates {
    /// Returns the rate for `target_currency`
    pub fn rate(&self, target_currency: &str) -> Result<f64, RatesError> {
        self.results
            .get(target_currency)
            .copied()
            .ok_or_else(|| RatesError::MissingCurrency(target_currency.to_string()))
    }
}

/// Errors that can occur when fetching exchange rates
#[derive(Debug, Error)]
pub enum RatesError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The response has no rate for the requested currency
    #[error("No exchange rate returned for {0}")]
    MissingCurrency(String),
}

/// Anything that can provide the historical rate table for a base currency
#[allow(async_fn_in_trait)]
pub trait RateSource {
    /// Fetches all rates from `base_currency` on `date`
    async fn fetch_rates(
        &self,
        date: NaiveDate,
        base_currency: &str,
    ) -> Result<HistoricalRates, RatesError>;
}
