// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::{content_hash, StringRecord};
use crate::errors::{Result, StringAnalysisError};
use crate::observability::messages::store::{
    DuplicateRecordRejected, OversizedValueRejected, RecordInserted, RecordNotFound,
    RecordRemoved,
};
use crate::observability::messages::StructuredLog;
use crate::traits::RecordSource;

#[derive(Default)]
struct StoreState {
    records: HashMap<String, Arc<StringRecord>>,
    // Insertion order of keys in `records`
    order: Vec<String>,
}

/// In-memory record store keyed by the exact input string.
///
/// Writers (`insert`, `remove`) take the write lock; readers take the
/// read lock and receive cloned `Arc`s, so filtering a snapshot never holds the
/// lock.
pub struct StringStore {
    state: RwLock<StoreState>,
    max_value_length: Option<usize>,
}

impl StringStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            max_value_length: None,
        }
    }

    /// A store that rejects values longer than `max` characters.
    pub fn with_max_value_length(max: usize) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            max_value_length: Some(max),
        }
    }

    pub fn max_value_length(&self) -> Option<usize> {
        self.max_value_length
    }

    /// Analyze `value` and store the record.
    ///
    /// Fails with `Conflict` if the value is already stored and with
    /// `InvalidInput` if it exceeds the configured length limit.
    pub fn insert(&self, value: &str) -> Result<Arc<StringRecord>> {
        if let Some(max_length) = self.max_value_length {
            let length = value.chars().count();
            if length > max_length {
                OversizedValueRejected { length, max_length }.log();
                return Err(StringAnalysisError::InvalidInput(format!(
                    "Value has {} characters, maximum allowed is {}",
                    length, max_length
                )));
            }
        }

        let mut state = self.state.write();
        if let Some(existing) = state.records.get(value) {
            DuplicateRecordRejected { id: &existing.id }.log();
            return Err(StringAnalysisError::Conflict(
                "String already exists in the system".to_string(),
            ));
        }

        let record = Arc::new(StringRecord::new(value, Utc::now()));
        state.records.insert(value.to_string(), Arc::clone(&record));
        state.order.push(value.to_string());

        RecordInserted {
            id: &record.id,
            length: record.length(),
            store_size: state.records.len(),
        }
        .log();

        Ok(record)
    }

    pub fn get(&self, value: &str) -> Result<Arc<StringRecord>> {
        let state = self.state.read();
        match state.records.get(value) {
            Some(record) => Ok(Arc::clone(record)),
            None => {
                let id = content_hash(value);
                RecordNotFound {
                    operation: "get",
                    id: &id,
                }
                .log();
                Err(not_found())
            }
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<Arc<StringRecord>> {
        let state = self.state.read();
        state
            .order
            .iter()
            .filter_map(|key| state.records.get(key).cloned())
            .collect()
    }

    pub fn remove(&self, value: &str) -> Result<()> {
        let mut state = self.state.write();
        match state.records.remove(value) {
            Some(record) => {
                state.order.retain(|key| key != value);
                RecordRemoved {
                    id: &record.id,
                    store_size: state.records.len(),
                }
                .log();
                Ok(())
            }
            None => {
                let id = content_hash(value);
                RecordNotFound {
                    operation: "remove",
                    id: &id,
                }
                .log();
                Err(not_found())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringStore")
            .field("record_count", &self.len())
            .field("max_value_length", &self.max_value_length)
            .finish()
    }
}

impl RecordSource for StringStore {
    fn snapshot(&self) -> Vec<Arc<StringRecord>> {
        self.list()
    }
}

fn not_found() -> StringAnalysisError {
    StringAnalysisError::NotFound("String does not exist in the system".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use std::thread;

    #[test]
    fn test_insert_then_get_returns_same_record() {
        let store = StringStore::new();
        let inserted = store.insert("racecar").unwrap();
        let fetched = store.get("racecar").unwrap();

        assert_eq!(inserted, fetched);
        assert!(fetched.is_palindrome());
        assert_eq!(fetched.length(), 7);
    }

    #[test]
    fn test_duplicate_insert_is_conflict() {
        let store = StringStore::new();
        store.insert("hello").unwrap();

        let err = store.insert("hello").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_values_differing_only_in_case_are_distinct() {
        let store = StringStore::new();
        store.insert("Hello").unwrap();
        store.insert("hello").unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = StringStore::new();
        let err = store.get("ghost").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_remove() {
        let store = StringStore::new();
        store.insert("a").unwrap();
        store.remove("a").unwrap();

        assert!(store.get("a").is_err());
        assert!(store.is_empty());
        assert_eq!(store.remove("a").unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_reinsert_after_remove() {
        let store = StringStore::new();
        let first = store.insert("abc").unwrap();
        store.remove("abc").unwrap();
        let second = store.insert("abc").unwrap();

        assert_eq!(first.id, second.id);
        assert!(second.created_at >= first.created_at);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = StringStore::new();
        for value in ["zeta", "alpha", "mid", "beta"] {
            store.insert(value).unwrap();
        }
        store.remove("mid").unwrap();

        let values: Vec<_> = store.list().iter().map(|r| r.value.clone()).collect();
        assert_eq!(values, vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn test_max_value_length() {
        let store = StringStore::with_max_value_length(3);
        store.insert("abc").unwrap();

        let err = store.insert("abcd").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(store.get("abcd").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_snapshot_is_independent_of_later_writes() {
        let store = StringStore::new();
        store.insert("one").unwrap();
        let snapshot = store.snapshot();
        store.insert("two").unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn test_concurrent_inserts_of_same_value_yield_one_record() {
        let store = Arc::new(StringStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.insert("contended").is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }
}
