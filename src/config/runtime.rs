// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::Config;
use crate::errors::Result;
use crate::observability::messages::config::StoreSeeded;
use crate::observability::messages::StructuredLog;
use crate::service::StringService;
use crate::store::StringStore;

/// Runtime builder - turns a configuration into a ready-to-use service.
///
/// Creates the record store with its configured limits, inserts the seed
/// values in order, and wraps the store in a [`StringService`].
///
/// # Examples
///
/// ```
/// use string_analysis::config::{Config, RuntimeBuilder};
///
/// let mut config = Config::default();
/// config.store.seed = vec!["racecar".to_string(), "hello".to_string()];
///
/// let service = RuntimeBuilder::from_config(&config).unwrap();
/// assert_eq!(service.store().len(), 2);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the store and service described by `cfg`.
    ///
    /// Fails if a seed value is rejected by the store (duplicate or too
    /// long); `load_and_validate_config` catches both earlier.
    pub fn from_config(cfg: &Config) -> Result<StringService> {
        let store = match cfg.store.max_value_length {
            Some(max) => StringStore::with_max_value_length(max),
            None => StringStore::new(),
        };

        for value in &cfg.store.seed {
            store.insert(value)?;
        }
        StoreSeeded {
            inserted: cfg.store.seed.len(),
        }
        .log();

        Ok(StringService::new(Arc::new(store)))
    }
}
