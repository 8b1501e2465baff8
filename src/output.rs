//! Output log of performed conversions
//!
//! Every successful conversion is appended to a JSON array file. The file
//! is read in full, extended and rewritten in full. Unlike the rate cache,
//! a malformed log is an error: it is never silently replaced.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the output log, placed next to the executable by default
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

/// One performed conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Historical date of the rate used
    pub date: NaiveDate,
    /// Amount in the base currency
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Currency the amount is expressed in
    pub base_currency: String,
    /// Converted amount, rounded to two decimals
    #[serde(with = "rust_decimal::serde::float")]
    pub target_amount: Decimal,
    /// Currency converted to
    pub target_currency: String,
}

/// Errors that can occur when appending to the output log
#[derive(Debug, Error)]
pub enum OutputError {
    /// Reading or writing the log file failed
    #[error("Failed to access output log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The existing log is not a JSON array of conversion records
    #[error("Malformed output log {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the records failed
    #[error("Failed to serialize output log: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only log of conversions stored as a JSON array
#[derive(Debug, Clone)]
pub struct OutputLog {
    path: PathBuf,
}

impl OutputLog {
    /// Creates an OutputLog backed by the given file
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates an OutputLog next to the running executable
    ///
    /// Falls back to the working directory if the executable path is unknown.
    pub fn beside_executable() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        Self::with_path(dir.join(DEFAULT_OUTPUT_FILE))
    }

    /// Returns the path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record in the log
    ///
    /// A missing file is an empty log; an unreadable or malformed file is an error.
    pub fn load(&self) -> Result<Vec<ConversionRecord>, OutputError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(OutputError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| OutputError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Appends a record and rewrites the whole file
    pub fn append(&self, record: ConversionRecord) -> Result<(), OutputError> {
        let mut records = self.load()?;
        records.push(record);

        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json).map_err(|source| OutputError::Io {
            path: self.path.clone(),
            source,
        })?;

        log::info!(
            "Logged conversion #{} to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
