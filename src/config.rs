//! Configuration file support.
//!
//! An optional TOML file supplies defaults for the table id, the tracking
//! parameters stripped from bootstrap URLs, and the style written onto
//! hidden rows. Command line flags override every value here.

use crate::constants::*;
use crate::{FilterError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub table: TableConfig,
    pub query: QueryConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub id: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_TABLE_ID.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QueryConfig {
    pub tracking_params: Vec<String>,
    pub max_phrase_length: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            tracking_params: DEFAULT_TRACKING_PARAMS
                .iter()
                .map(|param| param.to_string())
                .collect(),
            max_phrase_length: PHRASE_MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub hidden_style: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            hidden_style: DEFAULT_HIDDEN_STYLE.to_owned(),
        }
    }
}

impl Config {
    /// `$COMPAT_FILTER_CONFIG`, else `<config_dir>/compat-filter/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config at `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            crate::logging::debug_log(&format!(
                "No config at {}, using defaults",
                path.display()
            ));
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| {
            FilterError::config_error(&path.display().to_string(), &e.to_string())
        })?;
        let config = Self::from_toml(&raw).map_err(|e| match e {
            FilterError::ConfigError { reason, .. } => {
                FilterError::config_error(&path.display().to_string(), &reason)
            }
            other => other,
        })?;

        crate::logging::info_log(&format!("Loaded config from {}", path.display()));
        Ok(config)
    }

    /// Load from an explicit path if given, else from the default location
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(FilterError::config_error(
                        &path.display().to_string(),
                        "config file does not exist",
                    ));
                }
                Self::load(path)
            }
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)
            .map_err(|e| FilterError::config_error("<inline>", &e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.table.id.trim().is_empty() {
            return Err(FilterError::config_error(
                "<inline>",
                "table.id cannot be empty",
            ));
        }
        if self.query.max_phrase_length == 0 {
            return Err(FilterError::config_error(
                "<inline>",
                "query.max_phrase_length must be positive",
            ));
        }
        Ok(())
    }
}
