// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::analysis::StringRecord;

/// Anything that can hand out a point-in-time view of stored records.
///
/// The filter engine and the natural-language interpreter only ever read
/// through this trait, so they can run against the live store or against a
/// fixed set of records in tests.
pub trait RecordSource: Send + Sync {
    /// All records, in insertion order.
    fn snapshot(&self) -> Vec<Arc<StringRecord>>;
}

impl RecordSource for Vec<Arc<StringRecord>> {
    fn snapshot(&self) -> Vec<Arc<StringRecord>> {
        self.clone()
    }
}

impl<T: RecordSource + ?Sized> RecordSource for Arc<T> {
    fn snapshot(&self) -> Vec<Arc<StringRecord>> {
        (**self).snapshot()
    }
}
