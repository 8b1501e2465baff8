//! Command-line interface parsing for fxconvert
//!
//! This module handles parsing of CLI arguments using clap, including
//! validation of the historical date that fixes the rate date for the
//! whole session.

use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

use crate::cache::RateCache;
use crate::output::OutputLog;
use crate::resolver::CacheGate;

/// Message shown when the date argument is rejected
pub const INVALID_DATE_MESSAGE: &str = "Invalid date. Please use YYYY-MM-DD format.";

/// fxconvert - Convert amounts between currencies at historical rates
///
/// Prompts for an amount, a base currency and a target currency, and prints
/// the converted amount. Enter END at any prompt to quit.
#[derive(Parser, Debug)]
#[command(name = "fxconvert")]
#[command(about = "Convert amounts between currencies at historical exchange rates")]
#[command(version)]
pub struct Cli {
    /// Date of the exchange rates (YYYY-MM-DD, not in the future)
    #[arg(value_parser = parse_date_arg)]
    pub date: NaiveDate,

    /// Path to config.json (defaults to next to the executable, then the
    /// user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Rate cache file
    #[arg(long, value_name = "PATH", default_value = crate::cache::DEFAULT_CACHE_FILE)]
    pub cache_file: PathBuf,

    /// Conversion log file (defaults to output.json next to the executable)
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Answer from the rate cache from the first lookup, instead of only
    /// after the first remote fetch of the session
    #[arg(long)]
    pub trust_cache: bool,
}

impl Cli {
    /// When the resolver may use the cache
    pub fn cache_gate(&self) -> CacheGate {
        if self.trust_cache {
            CacheGate::Always
        } else {
            CacheGate::AfterFirstFetch
        }
    }

    /// Rate cache selected by the arguments
    pub fn rate_cache(&self) -> RateCache {
        RateCache::with_path(self.cache_file.clone())
    }

    /// Output log selected by the arguments
    pub fn output_log(&self) -> OutputLog {
        match &self.output_file {
            Some(path) => OutputLog::with_path(path.clone()),
            None => OutputLog::beside_executable(),
        }
    }
}

/// Validates a date string against a given "today".
///
/// # Returns
/// * `Some(NaiveDate)` if `s` is a `YYYY-MM-DD` date no later than `today`
/// * `None` otherwise
pub fn validate_date(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .filter(|date| *date <= today)
}

/// clap value parser for the date argument, checked against the local date
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    validate_date(s, Local::now().date_naive()).ok_or_else(|| INVALID_DATE_MESSAGE.to_string())
}
