// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while validating a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The same value appears more than once in `store.seed`
    #[error("Duplicate seed value: '{value}'")]
    DuplicateSeed { value: String },

    /// A seed value is longer than `store.max_value_length`
    #[error("Seed value '{value}' has {length} characters, exceeding max_value_length of {max}")]
    SeedTooLong {
        value: String,
        length: usize,
        max: usize,
    },

    /// `store.max_value_length` was set to zero, which would reject every non-empty value
    #[error("max_value_length must be greater than zero")]
    ZeroMaxValueLength,
}

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported config format for '{path}': expected .yaml, .yml or .toml")]
    UnsupportedFormat { path: PathBuf },

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
