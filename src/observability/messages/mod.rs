// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit the same event with typed fields attached.
//!
//! # Organization
//!
//! * `store` - record insert, lookup and removal events
//! * `query` - structured filter and natural-language query events
//! * `config` - configuration loading events
//! * `shell` - command session events
//!
//! # Usage Pattern
//!
//! ```rust
//! use string_analysis::observability::messages::store::RecordInserted;
//! use string_analysis::observability::messages::StructuredLog;
//!
//! let msg = RecordInserted {
//!     id: "2cf24dba",
//!     length: 5,
//!     store_size: 1,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod config;
pub mod query;
pub mod shell;
pub mod store;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the event at the message's level.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
