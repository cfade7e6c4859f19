// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Checks run in a fixed order and every problem is collected, so a single
//! load reports all of them:
//!
//! 1. **Limit sanity**: `max_value_length`, when set, must be non-zero
//! 2. **Seed uniqueness**: the store rejects duplicates, so seeds must be unique
//! 3. **Seed length**: each seed must fit within `max_value_length`

use std::collections::HashSet;

use crate::config::Config;
use crate::errors::ValidationError;

/// Validate a loaded configuration.
///
/// Returns every validation error found, in check order.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let max = config.store.max_value_length;

    if max == Some(0) {
        errors.push(ValidationError::ZeroMaxValueLength);
    }

    let mut seen = HashSet::new();
    for value in &config.store.seed {
        if !seen.insert(value.as_str()) {
            errors.push(ValidationError::DuplicateSeed {
                value: value.clone(),
            });
        }
    }

    if let Some(max) = max.filter(|m| *m > 0) {
        for value in &config.store.seed {
            let length = value.chars().count();
            if length > max {
                errors.push(ValidationError::SeedTooLong {
                    value: value.clone(),
                    length,
                    max,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    fn config_with(seed: &[&str], max_value_length: Option<usize>) -> Config {
        Config {
            store: StoreConfig {
                max_value_length,
                seed: seed.iter().map(|s| s.to_string()).collect(),
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&config_with(&["a", "b"], Some(5))).is_ok());
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_duplicate_seed_reported_once_per_repeat() {
        let errors = validate_config(&config_with(&["x", "y", "x", "x"], None)).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::DuplicateSeed { value: "x".into() },
                ValidationError::DuplicateSeed { value: "x".into() },
            ]
        );
    }

    #[test]
    fn test_seed_too_long() {
        let errors = validate_config(&config_with(&["ok", "too long"], Some(3))).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::SeedTooLong {
                value: "too long".into(),
                length: 8,
                max: 3,
            }]
        );
    }

    #[test]
    fn test_zero_max_value_length() {
        let errors = validate_config(&config_with(&["a"], Some(0))).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroMaxValueLength]);
    }

    #[test]
    fn test_errors_are_collected() {
        let errors = validate_config(&config_with(&["abcd", "abcd"], Some(2))).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
