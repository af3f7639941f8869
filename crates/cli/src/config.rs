// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runner configuration file and setting resolution.
//!
//! Precedence is flag, then environment (handled by clap), then the TOML
//! file, then defaults.

use crate::cli::{Cli, OutputFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("default_timeout_ms must be greater than zero")]
    ZeroTimeout,
}

/// Contents of a runner TOML file
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Budget replacing every unit's own timeout
    #[serde(default)]
    pub default_timeout_ms: Option<u64>,

    /// Drive timers with the system clock
    #[serde(default)]
    pub real_time: bool,

    /// JSONL file to append captured runs to
    #[serde(default)]
    pub capture_log: Option<PathBuf>,

    #[serde(default)]
    pub format: Option<OutputFormat>,

    #[serde(default)]
    pub verbose: bool,
}

impl RunnerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: RunnerConfig = toml::from_str(content)?;
        if config.default_timeout_ms == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(config)
    }
}

/// Effective settings for one invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub filters: Vec<String>,
    pub list: bool,
    pub timeout_override: Option<u64>,
    pub real_time: bool,
    pub format: OutputFormat,
    pub capture_log: Option<PathBuf>,
    pub verbose: bool,
}

impl Settings {
    /// Merge parsed arguments over a config file
    pub fn resolve(cli: Cli, config: RunnerConfig) -> Self {
        Self {
            filters: cli.filters,
            list: cli.list,
            timeout_override: cli
                .timeout_ms
                .filter(|&ms| ms > 0)
                .or(config.default_timeout_ms),
            real_time: cli.real_time || config.real_time,
            format: cli.format.or(config.format).unwrap_or_default(),
            capture_log: cli.capture_log.or(config.capture_log),
            verbose: cli.verbose || config.verbose,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
