// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Derived properties of a single string.
///
/// Characters are Unicode scalar values (`char`), not grapheme clusters and
/// not UTF-16 code units. A character outside the Basic Multilingual Plane
/// such as U+1F600 counts once toward `length`, appears as a single
/// frequency key, and stays whole when the value is reversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringProperties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    #[serde(rename = "sha256_hash")]
    pub content_hash: String,
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// Compute every derived property of `value`. Pure and infallible.
pub fn analyze(value: &str) -> StringProperties {
    let character_frequency_map = character_frequency(value);

    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: character_frequency_map.len(),
        word_count: word_count(value),
        content_hash: content_hash(value),
        character_frequency_map,
    }
}

/// Number of whitespace-delimited tokens; runs of whitespace collapse.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Exact, case-sensitive comparison against the character-wise reverse.
pub fn is_palindrome(value: &str) -> bool {
    value.chars().eq(value.chars().rev())
}

pub fn character_frequency(value: &str) -> BTreeMap<char, usize> {
    let mut frequencies = BTreeMap::new();
    for c in value.chars() {
        *frequencies.entry(c).or_insert(0) += 1;
    }
    frequencies
}

/// Lowercase hex SHA-256 of the UTF-8 bytes of `value`.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// One stored string together with its analysis.
///
/// Serializes as `{ id, value, properties, created_at }`; `id` is the content
/// hash so it is stable for a given value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringRecord {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    pub fn new(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            id: properties.content_hash.clone(),
            value,
            properties,
            created_at,
        }
    }

    pub fn length(&self) -> usize {
        self.properties.length
    }

    pub fn word_count(&self) -> usize {
        self.properties.word_count
    }

    pub fn is_palindrome(&self) -> bool {
        self.properties.is_palindrome
    }

    pub fn content_hash(&self) -> &str {
        &self.properties.content_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        let props = analyze("");
        assert_eq!(props.length, 0);
        assert_eq!(props.word_count, 0);
        assert!(props.is_palindrome);
        assert_eq!(props.unique_characters, 0);
        assert!(props.character_frequency_map.is_empty());
        assert_eq!(
            props.content_hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_single_character_is_palindrome() {
        let props = analyze("a");
        assert!(props.is_palindrome);
        assert_eq!(props.length, 1);
        assert_eq!(props.word_count, 1);
        assert_eq!(props.unique_characters, 1);
    }

    #[test]
    fn test_palindromes() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("abba"));
        assert!(!is_palindrome("hello"));
        // Case-sensitive
        assert!(!is_palindrome("Racecar"));
    }

    #[test]
    fn test_whitespace_only_has_no_words() {
        let props = analyze("  \t \n ");
        assert_eq!(props.word_count, 0);
        assert_eq!(props.length, 6);
    }

    #[test]
    fn test_word_count_collapses_runs() {
        assert_eq!(word_count("  hello    big\tworld  "), 3);
        assert_eq!(word_count("single"), 1);
    }

    #[test]
    fn test_frequency_map_with_repeats() {
        let props = analyze("hello world");
        assert_eq!(props.character_frequency_map.get(&'l'), Some(&3));
        assert_eq!(props.character_frequency_map.get(&'o'), Some(&2));
        assert_eq!(props.character_frequency_map.get(&' '), Some(&1));
        assert_eq!(props.unique_characters, 8);
        assert_eq!(props.character_frequency_map.values().sum::<usize>(), props.length);
    }

    #[test]
    fn test_unique_characters_matches_map() {
        let props = analyze("mississippi");
        assert_eq!(props.unique_characters, 4);
        assert_eq!(props.unique_characters, props.character_frequency_map.len());
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(content_hash("hello"), content_hash("hello"));
        assert_ne!(content_hash("hello"), content_hash("hello "));
        assert_eq!(
            content_hash("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_multibyte_length_counts_chars() {
        let props = analyze("héé");
        assert_eq!(props.length, 3);
        assert_eq!(props.character_frequency_map.get(&'é'), Some(&2));
    }

    #[test]
    fn test_astral_characters_count_once() {
        let props = analyze("\u{1F600}a\u{1F600}");
        assert_eq!(props.length, 3);
        assert_eq!(props.character_frequency_map.get(&'\u{1F600}'), Some(&2));
        assert_eq!(props.unique_characters, 2);
        assert!(props.is_palindrome);
        // UTF-16 would see two code units per emoji
        assert_eq!("\u{1F600}".encode_utf16().count(), 2);
        assert_eq!(analyze("\u{1F600}").length, 1);
    }

    #[test]
    fn test_record_serialization_shape() {
        let record = StringRecord::new("aab", Utc::now());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], json["properties"]["sha256_hash"]);
        assert_eq!(json["value"], "aab");
        assert_eq!(json["properties"]["length"], 3);
        assert_eq!(json["properties"]["character_frequency_map"]["a"], 2);
        assert_eq!(json["properties"]["character_frequency_map"]["b"], 1);
        assert!(json["created_at"].is_string());
    }
}
