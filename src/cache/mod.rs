//! Cache module for storing fetched exchange rates to disk
//!
//! Every successful remote fetch stores the full rate table for its
//! (date, base currency) pair in a single JSON array file. Records are
//! never updated or evicted. An unreadable or malformed cache file is
//! treated as empty so a damaged cache never blocks a conversion.

mod manager;

pub use manager::{CacheError, CachedRateRecord, RateCache, DEFAULT_CACHE_FILE};
