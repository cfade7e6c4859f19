// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod analysis;
mod config;

pub use analysis::{ErrorKind, Result, StringAnalysisError};
pub use config::{ConfigError, ValidationError};
