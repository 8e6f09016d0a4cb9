// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration
//!
//! Looked up from `--config`, then `$ROTA_CONFIG`, then `./rota.toml`.
//! Missing optional files fall back to defaults.

use crate::output::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "ROTA_CONFIG";

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "rota.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Log filter directive, overridden by `RUST_LOG`
    pub log_level: String,
    /// Default output format
    pub format: OutputFormat,
    /// Default number of dates printed by `rota list`
    pub list_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: OutputFormat::Text,
            list_limit: 50,
        }
    }
}

impl Config {
    /// Load configuration, preferring an explicit path over the environment
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match resolve_path(explicit, env_path)? {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Pick the config file to read; explicitly named files must exist
fn resolve_path(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = explicit.map(Path::to_path_buf).or(env_path) {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path));
        }
        return Ok(Some(path));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    Ok(local.is_file().then_some(local))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
