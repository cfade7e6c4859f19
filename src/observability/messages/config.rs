// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration file loaded and validated.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub format: &'a str,
    pub seed_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} configuration from '{}': {} seed values",
            self.format, self.path, self.seed_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            format = self.format,
            seed_count = self.seed_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("config", span_name = name, path = self.path)
    }
}

/// Seed values from configuration were inserted into a fresh store.
///
/// # Log Level
/// `info!` - Important operational event
pub struct StoreSeeded {
    pub inserted: usize,
}

impl Display for StoreSeeded {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Store seeded with {} values", self.inserted)
    }
}

impl StructuredLog for StoreSeeded {
    fn log(&self) {
        tracing::info!(inserted = self.inserted, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("seed", span_name = name, inserted = self.inserted)
    }
}
