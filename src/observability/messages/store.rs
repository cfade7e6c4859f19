// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for record store events.
//!
//! Record values can be arbitrarily long, so these messages identify records
//! by content hash and length rather than by value.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A new record was analyzed and stored.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use string_analysis::observability::messages::store::RecordInserted;
///
/// let msg = RecordInserted {
///     id: "2cf24dba",
///     length: 5,
///     store_size: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RecordInserted<'a> {
    pub id: &'a str,
    pub length: usize,
    pub store_size: usize,
}

impl Display for RecordInserted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Record '{}' inserted: length={}, store_size={}",
            self.id, self.length, self.store_size
        )
    }
}

impl StructuredLog for RecordInserted<'_> {
    fn log(&self) {
        tracing::info!(
            id = self.id,
            length = self.length,
            store_size = self.store_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "record_inserted",
            span_name = name,
            id = self.id,
            length = self.length,
        )
    }
}

/// An insert was rejected because the value is already stored.
///
/// # Log Level
/// `warn!` - Client error worth noticing
pub struct DuplicateRecordRejected<'a> {
    pub id: &'a str,
}

impl Display for DuplicateRecordRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Insert rejected: record '{}' already exists", self.id)
    }
}

impl StructuredLog for DuplicateRecordRejected<'_> {
    fn log(&self) {
        tracing::warn!(id = self.id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("duplicate_record", span_name = name, id = self.id)
    }
}

/// An insert was rejected because the value exceeds the configured limit.
///
/// # Log Level
/// `warn!` - Client error worth noticing
pub struct OversizedValueRejected {
    pub length: usize,
    pub max_length: usize,
}

impl Display for OversizedValueRejected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Insert rejected: value has {} characters, limit is {}",
            self.length, self.max_length
        )
    }
}

impl StructuredLog for OversizedValueRejected {
    fn log(&self) {
        tracing::warn!(
            length = self.length,
            max_length = self.max_length,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "oversized_value",
            span_name = name,
            length = self.length,
            max_length = self.max_length,
        )
    }
}

/// A record was deleted.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RecordRemoved<'a> {
    pub id: &'a str,
    pub store_size: usize,
}

impl Display for RecordRemoved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Record '{}' removed: store_size={}",
            self.id, self.store_size
        )
    }
}

impl StructuredLog for RecordRemoved<'_> {
    fn log(&self) {
        tracing::info!(id = self.id, store_size = self.store_size, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("record_removed", span_name = name, id = self.id)
    }
}

/// A get or remove targeted a value that is not stored.
///
/// # Log Level
/// `debug!` - Expected client-side miss
pub struct RecordNotFound<'a> {
    pub operation: &'a str,
    pub id: &'a str,
}

impl Display for RecordNotFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Record '{}' not found during {}",
            self.id, self.operation
        )
    }
}

impl StructuredLog for RecordNotFound<'_> {
    fn log(&self) {
        tracing::debug!(operation = self.operation, id = self.id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "record_not_found",
            span_name = name,
            operation = self.operation,
            id = self.id,
        )
    }
}
