// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_LOG_FILTER;
use crate::errors::ConfigError;
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure for the string analysis service.
///
/// Every section is optional; an empty file yields a usable default
/// configuration with an empty store.
///
/// # Fields
/// * `logging` - Log filter and output options
/// * `store` - Record store limits and startup seed values
/// * `output` - Response rendering options
///
/// # Example
/// ```yaml
/// logging:
///   filter: "string_analysis=debug"
///   ansi: false
/// store:
///   max_value_length: 1024
///   seed:
///     - "racecar"
///     - "hello world"
/// output:
///   pretty: true
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Report that this config was loaded from `path`.
    ///
    /// Loading happens before the subscriber exists (the config carries the
    /// log filter), so callers emit this once logging is installed.
    pub fn log_loaded<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        let path_display = path.display().to_string();
        ConfigLoaded {
            path: &path_display,
            format: ConfigFormat::from_path(path).map(|f| f.as_str()).unwrap_or("unknown"),
            seed_count: self.store.seed.len(),
        }
        .log();
    }
}

/// Logging options.
///
/// `RUST_LOG`, when set, takes precedence over `filter`.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Get the filter directive, using the built-in default if not configured.
    pub fn get_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

/// Record store options.
///
/// # Fields
/// * `max_value_length` - Reject inserts longer than this many characters (optional)
/// * `seed` - Values inserted, in order, when the store is built
#[derive(Debug, Default, Deserialize)]
pub struct StoreConfig {
    pub max_value_length: Option<usize>,
    #[serde(default)]
    pub seed: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

/// Supported configuration file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        }
    }
}

/// Parse configuration text in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        // An empty YAML document deserializes as unit, not as an empty map
        ConfigFormat::Yaml if content.trim().is_empty() => Config::default(),
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, format)
}

/// Load and validate a config from a YAML or TOML file
///
/// All validation problems are collected and reported together.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let cfg = load_config(path)?;

    crate::config::validate_config(&cfg).map_err(ConfigError::Validation)?;
    Ok(cfg)
}
