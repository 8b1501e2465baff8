//! Configuration file loading
//!
//! The API key lives in a `config.json` file. An explicit `--config` path
//! wins; otherwise the file next to the executable is used, then the one in
//! the per-user config directory (`~/.config/fxconvert/` on Linux).

use directories::ProjectDirs;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::rates::DEFAULT_BASE_URL;

/// File name of the configuration file
pub const CONFIG_FILE: &str = "config.json";

/// Errors that can occur when loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file exists at any searched location
    #[error("Config file not found: {}", display_paths(.0))]
    NotFound(Vec<PathBuf>),

    /// The config file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON or lacks `api_key`
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Settings read from `config.json`
#[derive(Clone, Deserialize)]
pub struct Config {
    /// fastFOREX API key
    pub api_key: String,
    /// API root, defaults to the public fastFOREX endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Loads the config from an explicit path, or from the first default
    /// location that exists
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => locate(&default_locations())?,
        };
        Self::from_file(&path)
    }

    /// Loads the config from a specific file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(vec![path.to_path_buf()])
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Default places to look for `config.json`, in priority order
pub fn default_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        locations.push(dir.join(CONFIG_FILE));
    }

    if let Some(project_dirs) = ProjectDirs::from("", "", "fxconvert") {
        locations.push(project_dirs.config_dir().join(CONFIG_FILE));
    }

    locations
}

/// Returns the first candidate that is an existing file
fn locate(candidates: &[PathBuf]) -> Result<PathBuf, ConfigError> {
    candidates
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .ok_or_else(|| ConfigError::NotFound(candidates.to_vec()))
}
