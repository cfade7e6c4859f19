// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::StringRecord;
use crate::filter::FilterCriteria;
use crate::observability::messages::query::{FilterExecuted, FilterStarted};
use crate::observability::messages::StructuredLog;
use crate::traits::RecordSource;

/// Result of running a filter: the matches, their count, and the criteria that
/// were actually applied.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome {
    pub data: Vec<Arc<StringRecord>>,
    pub count: usize,
    pub filters_applied: FilterCriteria,
}

impl FilterOutcome {
    pub fn values(&self) -> Vec<&str> {
        self.data.iter().map(|r| r.value.as_str()).collect()
    }
}

/// Applies [`FilterCriteria`] to a snapshot of records.
///
/// Conflicting bounds (`min_length > max_length`) are not an error here; they
/// simply match nothing.
pub struct FilterEngine;

impl FilterEngine {
    /// Filter the current contents of `source`.
    pub fn filter<S: RecordSource + ?Sized>(source: &S, criteria: FilterCriteria) -> FilterOutcome {
        Self::filter_records(source.snapshot(), criteria)
    }

    /// Filter an already-taken snapshot, preserving its order.
    pub fn filter_records(
        records: Vec<Arc<StringRecord>>,
        criteria: FilterCriteria,
    ) -> FilterOutcome {
        let description = criteria.to_string();
        let scanned = records.len();
        let start_msg = FilterStarted {
            criteria: &description,
            scanned,
        };

        let span = start_msg.span("filter_records");
        let _guard = span.enter();
        start_msg.log();

        let start = Instant::now();

        let data: Vec<_> = records
            .into_iter()
            .filter(|record| criteria.matches(record))
            .collect();

        FilterExecuted {
            criteria: &description,
            scanned,
            matched: data.len(),
            duration: start.elapsed(),
        }
        .log();

        FilterOutcome {
            count: data.len(),
            data,
            filters_applied: criteria,
        }
    }
}
