// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the two query surfaces: structured filters and
//! natural-language queries.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A structured filter is about to scan a snapshot. Its span wraps the scan.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct FilterStarted<'a> {
    pub criteria: &'a str,
    pub scanned: usize,
}

impl Display for FilterStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Filtering {} records with [{}]",
            self.scanned, self.criteria
        )
    }
}

impl StructuredLog for FilterStarted<'_> {
    fn log(&self) {
        tracing::debug!(criteria = self.criteria, scanned = self.scanned, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "filter",
            span_name = name,
            criteria = self.criteria,
            scanned = self.scanned,
        )
    }
}

/// A structured filter ran over a store snapshot.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use string_analysis::observability::messages::query::FilterExecuted;
/// use std::time::Duration;
///
/// let msg = FilterExecuted {
///     criteria: "is_palindrome=true",
///     scanned: 10,
///     matched: 2,
///     duration: Duration::from_micros(40),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct FilterExecuted<'a> {
    pub criteria: &'a str,
    pub scanned: usize,
    pub matched: usize,
    pub duration: Duration,
}

impl Display for FilterExecuted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Filter [{}] matched {}/{} records in {:?}",
            self.criteria, self.matched, self.scanned, self.duration
        )
    }
}

impl StructuredLog for FilterExecuted<'_> {
    fn log(&self) {
        tracing::info!(
            criteria = self.criteria,
            scanned = self.scanned,
            matched = self.matched,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "filter",
            span_name = name,
            criteria = self.criteria,
            scanned = self.scanned,
        )
    }
}

/// A natural-language query arrived. Its span wraps parsing and filtering.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct QueryReceived<'a> {
    pub query: &'a str,
}

impl Display for QueryReceived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Interpreting query '{}'", self.query)
    }
}

impl StructuredLog for QueryReceived<'_> {
    fn log(&self) {
        tracing::debug!(query = self.query, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("interpret", span_name = name, query = self.query)
    }
}

/// A natural-language query was interpreted and executed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct QueryInterpreted<'a> {
    pub query: &'a str,
    pub derived_filters: &'a str,
    pub matched: usize,
}

impl Display for QueryInterpreted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Query '{}' interpreted as [{}]: {} matches",
            self.query, self.derived_filters, self.matched
        )
    }
}

impl StructuredLog for QueryInterpreted<'_> {
    fn log(&self) {
        tracing::info!(
            query = self.query,
            derived_filters = self.derived_filters,
            matched = self.matched,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("interpret", span_name = name, query = self.query)
    }
}

/// A single phrase rule fired during interpretation.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct PhraseRecognized<'a> {
    pub rule: &'a str,
    pub matched_text: &'a str,
}

impl Display for PhraseRecognized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Phrase rule '{}' matched '{}'", self.rule, self.matched_text)
    }
}

impl StructuredLog for PhraseRecognized<'_> {
    fn log(&self) {
        tracing::debug!(rule = self.rule, matched_text = self.matched_text, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("phrase", span_name = name, rule = self.rule)
    }
}

/// A natural-language query was rejected.
///
/// # Log Level
/// `warn!` - Client error worth noticing
pub struct QueryRejected<'a> {
    pub query: &'a str,
    pub reason: &'a str,
}

impl Display for QueryRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Query '{}' rejected: {}", self.query, self.reason)
    }
}

impl StructuredLog for QueryRejected<'_> {
    fn log(&self) {
        tracing::warn!(query = self.query, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("query_rejected", span_name = name, query = self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_executed_display() {
        let msg = FilterExecuted {
            criteria: "min_length=3",
            scanned: 4,
            matched: 1,
            duration: Duration::from_millis(1),
        };
        assert_eq!(msg.to_string(), "Filter [min_length=3] matched 1/4 records in 1ms");
    }

    #[test]
    fn test_query_rejected_display() {
        let msg = QueryRejected {
            query: "banana bread",
            reason: "no recognizable phrases",
        };
        assert_eq!(
            msg.to_string(),
            "Query 'banana bread' rejected: no recognizable phrases"
        );
    }
}
