//! Rate cache backed by a JSON file
//!
//! Provides a `RateCache` that keeps every fetched rate table in one JSON
//! array, read fully and rewritten fully on each insert.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the rate cache, relative to the working directory
pub const DEFAULT_CACHE_FILE: &str = "cached_exchange_rates.json";

/// A snapshot of all rates for one (date, base currency) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedRateRecord {
    /// Historical date the rates apply to
    pub date: NaiveDate,
    /// Currency the rates are quoted from
    pub base_currency: String,
    /// Units of each target currency per one unit of the base currency
    pub results: BTreeMap<String, f64>,
}

impl CachedRateRecord {
    /// Returns true if this record is for the given date and base currency
    pub fn matches(&self, date: NaiveDate, base_currency: &str) -> bool {
        self.date == date && self.base_currency == base_currency
    }
}

/// Errors that can occur when writing the rate cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// Writing the cache file failed
    #[error("Failed to write rate cache {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the cache records failed
    #[error("Failed to serialize rate cache: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reads and writes cached rate records
///
/// Reads are lenient: a missing, unreadable or non-array file yields an
/// empty record list, and malformed entries are skipped one by one. Inserts
/// keep malformed entries in the file untouched. Writes are strict and
/// report failures.
#[derive(Debug, Clone)]
pub struct RateCache {
    /// Location of the JSON cache file
    path: PathBuf,
}

impl Default for RateCache {
    fn default() -> Self {
        Self::with_path(PathBuf::from(DEFAULT_CACHE_FILE))
    }
}

impl RateCache {
    /// Creates a RateCache backed by the given file
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path of the cache file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the raw JSON entries of the cache file
    ///
    /// Returns an empty list if the file doesn't exist, cannot be read, or
    /// is not a JSON array. Individual entries are not validated here.
    fn load_entries(&self) -> Vec<Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable rate cache {}: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!(
                    "Ignoring malformed rate cache {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Loads all well-formed cached records
    ///
    /// Entries that are not valid records are skipped with a warning.
    pub fn load(&self) -> Vec<CachedRateRecord> {
        self.load_entries()
            .into_iter()
            .enumerate()
            .filter_map(|(idx, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!(
                        "Skipping malformed entry #{} in rate cache {}: {}",
                        idx,
                        self.path.display(),
                        e
                    );
                    None
                }
            })
            .collect()
    }

    /// Finds the cached rate from `base_currency` to `target_currency` on `date`
    ///
    /// Scans records in file order; the first record matching date and base
    /// currency that contains the target currency wins.
    pub fn lookup(
        &self,
        date: NaiveDate,
        base_currency: &str,
        target_currency: &str,
    ) -> Option<f64> {
        self.load()
            .iter()
            .filter(|record| record.matches(date, base_currency))
            .find_map(|record| record.results.get(target_currency).copied())
    }

    /// Appends a record unless an identical one is already cached
    ///
    /// The whole file is rewritten either way.
    ///
    /// # Returns
    /// * `Ok(true)` if the record was added
    /// * `Ok(false)` if an identical record already existed
    /// * `Err(CacheError)` if the file could not be written
    pub fn insert(&self, record: CachedRateRecord) -> Result<bool, CacheError> {
        let mut entries = self.load_entries();

        // Malformed entries are kept as they are so a rewrite never drops them
        let inserted = !entries.iter().any(|entry| {
            CachedRateRecord::deserialize(entry).map_or(false, |existing| existing == record)
        });
        if inserted {
            log::info!(
                "Caching {} rates for {} on {}",
                record.results.len(),
                record.base_currency,
                record.date
            );
            entries.push(serde_json::to_value(&record)?);
        }

        self.write(&entries)?;
        Ok(inserted)
    }

    /// Rewrites the cache file with the given entries
    fn write(&self, entries: &[Value]) -> Result<(), CacheError> {
        let json = serde_json::to_string_pretty(entries)?;
        let io_err = |source| CacheError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, json).map_err(io_err)
    }
}
