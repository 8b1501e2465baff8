//! Two-tier exchange rate resolution
//!
//! Looks up a rate in the on-disk cache, and on a miss fetches the full rate
//! table from the remote source and stores it in the cache.
//!
//! Whether the cache is consulted depends on the session's `CacheGate`. With
//! `CacheGate::AfterFirstFetch` the cache is ignored until the session has
//! made one remote fetch, so the first lookup of every session goes to the
//! API even if the cache already holds a matching record.

use chrono::NaiveDate;
use thiserror::Error;

use crate::cache::{CacheError, CachedRateRecord, RateCache};
use crate::rates::{RateSource, RatesError};

/// When the resolver may answer from the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheGate {
    /// Only after this session has fetched from the remote source once
    #[default]
    AfterFirstFetch,
    /// From the first lookup
    Always,
}

/// Where a resolved rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateOrigin {
    Cache,
    Remote,
}

/// A rate together with its origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRate {
    pub rate: f64,
    pub origin: RateOrigin,
}

/// Errors that can occur when resolving a rate
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Remote fetch failed
    #[error(transparent)]
    Rates(#[from] RatesError),

    /// Storing fetched rates failed
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Resolves rates from the cache or a remote source
#[derive(Debug)]
pub struct RateResolver<S> {
    source: S,
    cache: RateCache,
    gate: CacheGate,
    /// Whether a remote fetch has happened in this session
    fetched: bool,
}

impl<S: RateSource> RateResolver<S> {
    /// Creates a resolver for a new session
    pub fn new(source: S, cache: RateCache, gate: CacheGate) -> Self {
        Self {
            source,
            cache,
            gate,
            fetched: false,
        }
    }

    /// Returns the cache used by this resolver
    pub fn cache(&self) -> &RateCache {
        &self.cache
    }

    fn cache_enabled(&self) -> bool {
        match self.gate {
            CacheGate::Always => true,
            CacheGate::AfterFirstFetch => self.fetched,
        }
    }

    /// Resolves the rate from `base_currency` to `target_currency` on `date`
    ///
    /// # Returns
    /// * `Ok(ResolvedRate)` from the cache if allowed and present, otherwise
    ///   from the remote source
    /// * `Err(ResolveError)` if the remote fetch fails, the response lacks the
    ///   target currency, or the cache cannot be written
    pub async fn resolve(
        &mut self,
        date: NaiveDate,
        base_currency: &str,
        target_currency: &str,
    ) -> Result<ResolvedRate, ResolveError> {
        if self.cache_enabled() {
            if let Some(rate) = self.cache.lookup(date, base_currency, target_currency) {
                log::debug!(
                    "Cache hit for {}->{} on {}",
                    base_currency,
                    target_currency,
                    date
                );
                return Ok(ResolvedRate {
                    rate,
                    origin: RateOrigin::Cache,
                });
            }
            log::debug!(
                "Cache miss for {}->{} on {}",
                base_currency,
                target_currency,
                date
            );
        }

        let rates = self.source.fetch_rates(date, base_currency).await?;
        self.fetched = true;

        let rate = rates.rate(target_currency);
        self.cache.insert(CachedRateRecord {
            date,
            base_currency: base_currency.to_string(),
            results: rates.results,
        })?;

        Ok(ResolvedRate {
            rate: rate?,
            origin: RateOrigin::Remote,
        })
    }
}
