use proptest::prelude::*;
use std::collections::HashSet;
use string_analysis::errors::ErrorKind;
use string_analysis::filter::{FilterCriteria, FilterEngine};
use string_analysis::store::StringStore;

fn distinct(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(v.clone())).collect()
}

proptest! {
    #[test]
    fn insert_then_get_returns_same_record(s in ".{0,100}") {
        let store = StringStore::new();
        let inserted = store.insert(&s).unwrap();
        let fetched = store.get(&s).unwrap();
        prop_assert_eq!(&inserted.id, &fetched.id);
        prop_assert_eq!(&inserted.properties, &fetched.properties);
        prop_assert_eq!(inserted.created_at, fetched.created_at);
    }

    #[test]
    fn second_insert_conflicts(s in ".{0,100}") {
        let store = StringStore::new();
        store.insert(&s).unwrap();
        let err = store.insert(&s).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Conflict);
        prop_assert_eq!(store.len(), 1);
    }

    #[test]
    fn removed_values_are_not_found(s in ".{0,100}") {
        let store = StringStore::new();
        store.insert(&s).unwrap();
        store.remove(&s).unwrap();
        prop_assert_eq!(store.get(&s).unwrap_err().kind(), ErrorKind::NotFound);
        prop_assert_eq!(store.remove(&s).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn list_preserves_insertion_order(values in prop::collection::vec("[a-z ]{0,10}", 0..20)) {
        let values = distinct(values);
        let store = StringStore::new();
        for value in &values {
            store.insert(value).unwrap();
        }
        let listed: Vec<String> = store.list().iter().map(|r| r.value.clone()).collect();
        prop_assert_eq!(listed, values);
    }

    #[test]
    fn empty_criteria_matches_everything(values in prop::collection::vec("[a-z]{0,10}", 0..20)) {
        let store = StringStore::new();
        for value in distinct(values) {
            store.insert(&value).unwrap();
        }
        let outcome = FilterEngine::filter(&store, FilterCriteria::new());
        prop_assert_eq!(outcome.count, store.len());
    }

    #[test]
    fn inverted_bounds_match_nothing(
        values in prop::collection::vec("[a-z]{0,10}", 0..20),
        min in 1i64..20,
        gap in 1i64..5,
    ) {
        let store = StringStore::new();
        for value in distinct(values) {
            store.insert(&value).unwrap();
        }
        let criteria = FilterCriteria::new()
            .min_length(min)
            .max_length(min.saturating_sub(gap));
        let outcome = FilterEngine::filter(&store, criteria);
        prop_assert_eq!(outcome.count, 0);
        prop_assert!(outcome.data.is_empty());
    }

    #[test]
    fn filter_results_satisfy_criteria(
        values in prop::collection::vec("[a-c ]{0,8}", 0..20),
        min in 0i64..6,
    ) {
        let store = StringStore::new();
        for value in distinct(values) {
            store.insert(&value).unwrap();
        }
        let criteria = FilterCriteria::new().min_length(min).is_palindrome(true);
        let outcome = FilterEngine::filter(&store, criteria);
        for record in &outcome.data {
            prop_assert!((record.length() as i64) >= min);
            prop_assert!(record.is_palindrome());
        }
    }
}
