//! TOML settings for the `csr-graph` binary.
//!
//! Lookup order for the file: `--config`, then `CSR_GRAPH_CONFIG` (both
//! handled by clap), then `<config_dir>/csr-graph/config.toml`. A missing
//! default file means defaults; a missing explicit file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_MAX_MEMORY_MB: u64 = 4096;
pub const MIN_MAX_MEMORY_MB: u64 = 64;
pub const MAX_MAX_MEMORY_MB: u64 = 131_072; // 128 GB
/// Unbounded BFS.
pub const DEFAULT_DEPTH: i64 = -1;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Edge list used when a command is given no FILE.
    pub dataset: Option<PathBuf>,
    pub log_level: String,
    /// Load fails if the estimated graph memory exceeds this.
    pub max_memory_mb: u64,
    pub default_depth: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            max_memory_mb: DEFAULT_MAX_MEMORY_MB,
            default_depth: DEFAULT_DEPTH,
        }
    }
}

impl Settings {
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => read_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => read_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            origin: "<inline>".to_string(),
            source,
        })?;
        raw.into_settings()
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("csr-graph").join("config.toml"))
}

fn read_file(path: &Path) -> Result<Settings, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: RawConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        origin: path.display().to_string(),
        source,
    })?;
    raw.into_settings()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    dataset: Option<PathBuf>,
    log_level: Option<String>,
    max_memory_mb: Option<u64>,
    default_depth: Option<i64>,
}

impl RawConfig {
    fn into_settings(self) -> Result<Settings, ConfigError> {
        let defaults = Settings::default();
        let max_memory_mb = self.max_memory_mb.unwrap_or(defaults.max_memory_mb);
        if !(MIN_MAX_MEMORY_MB..=MAX_MAX_MEMORY_MB).contains(&max_memory_mb) {
            return Err(ConfigError::OutOfRange {
                key: "max_memory_mb",
                value: max_memory_mb as i64,
                min: MIN_MAX_MEMORY_MB as i64,
                max: MAX_MAX_MEMORY_MB as i64,
            });
        }
        Ok(Settings {
            dataset: self.dataset,
            log_level: self
                .log_level
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.log_level),
            max_memory_mb,
            default_depth: self.default_depth.unwrap_or(defaults.default_depth),
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {origin}: {source}")]
    Parse {
        origin: String,
        source: toml::de::Error,
    },
    #[error("config key {key}={value} outside {min}..={max}")]
    OutOfRange {
        key: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}
