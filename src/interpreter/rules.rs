// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The fixed phrase vocabulary.
//!
//! Each rule is independent: a regex run against the lower-cased query plus an
//! extractor that turns the captures into at most one filter contribution.
//! Rules run in the order returned by [`default_rules`] and later contributions
//! to the same field overwrite earlier ones, so the order is observable.

use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::Arc;

use crate::analysis::StringRecord;
use crate::errors::{Result, StringAnalysisError};
use crate::interpreter::ParsedFilterSet;

/// Vowels scanned by the "first vowel" phrase, in priority order.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// A single filter value derived from one recognized phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FilterContribution {
    WordCount(usize),
    IsPalindrome(bool),
    MinLength(i64),
    MaxLength(i64),
    ContainsCharacter(String),
}

impl FilterContribution {
    pub fn apply_to(self, filters: &mut ParsedFilterSet) {
        match self {
            FilterContribution::WordCount(n) => filters.word_count = Some(n),
            FilterContribution::IsPalindrome(b) => filters.is_palindrome = Some(b),
            FilterContribution::MinLength(n) => filters.min_length = Some(n),
            FilterContribution::MaxLength(n) => filters.max_length = Some(n),
            FilterContribution::ContainsCharacter(c) => filters.contains_character = Some(c),
        }
    }
}

/// Extractor signature: captures of the rule's regex plus the current store
/// snapshot. `Ok(None)` means the phrase was recognized but contributes no
/// constraint.
pub type Extract = fn(&Captures, &[Arc<StringRecord>]) -> Result<Option<FilterContribution>>;

pub struct PhraseRule {
    pub name: &'static str,
    pub regex: Regex,
    pub extract: Extract,
}

impl PhraseRule {
    fn new(name: &'static str, pattern: &str, extract: Extract) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("phrase patterns are static and valid"),
            extract,
        }
    }
}

impl std::fmt::Debug for PhraseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhraseRule")
            .field("name", &self.name)
            .field("pattern", &self.regex.as_str())
            .finish()
    }
}

pub fn default_rules() -> Vec<PhraseRule> {
    vec![
        PhraseRule::new("single_word", r"\bsingle\s+word", |_, _| {
            Ok(Some(FilterContribution::WordCount(1)))
        }),
        PhraseRule::new("palindrome", r"palindrom(?:e|ic)", |_, _| {
            Ok(Some(FilterContribution::IsPalindrome(true)))
        }),
        PhraseRule::new("longer_than", r"\blonger\s+than\b\s*(\S*)", |caps, _| {
            let n = parse_number("longer than", caps)?;
            let min = n.checked_add(1).ok_or_else(|| {
                StringAnalysisError::InvalidQuery(format!("Length {} is too large", n))
            })?;
            Ok(Some(FilterContribution::MinLength(min)))
        }),
        PhraseRule::new("shorter_than", r"\bshorter\s+than\b\s*(\S*)", |caps, _| {
            let n = parse_number("shorter than", caps)?;
            let max = n.checked_sub(1).ok_or_else(|| {
                StringAnalysisError::InvalidQuery(format!("Length {} is too small", n))
            })?;
            Ok(Some(FilterContribution::MaxLength(max)))
        }),
        PhraseRule::new(
            "contains_character",
            r"\bcontain(?:s|ing)\s+(?:the\s+)?(?:letter\s+)?([a-z])\b",
            |caps, _| {
                Ok(caps
                    .get(1)
                    .map(|m| FilterContribution::ContainsCharacter(m.as_str().to_string())))
            },
        ),
        PhraseRule::new("first_vowel", r"\bfirst\s+vowel\b", |_, records| {
            Ok(first_vowel_present(records)
                .map(|v| FilterContribution::ContainsCharacter(v.to_string())))
        }),
    ]
}

/// The first vowel in [`VOWELS`] order that occurs in any stored value.
pub fn first_vowel_present(records: &[Arc<StringRecord>]) -> Option<char> {
    VOWELS
        .iter()
        .copied()
        .find(|vowel| records.iter().any(|r| r.value.contains(*vowel)))
}

/// Signed, so "shorter than 0" yields a bound of -1 rather than an error.
fn parse_number(phrase: &str, caps: &Captures) -> Result<i64> {
    let token = caps
        .get(1)
        .map(|m| m.as_str().trim_end_matches(|c: char| c.is_ascii_punctuation()))
        .unwrap_or("");

    if token.is_empty() {
        return Err(StringAnalysisError::InvalidQuery(format!(
            "Expected a number after '{}'",
            phrase
        )));
    }

    token.parse::<i64>().map_err(|_| {
        StringAnalysisError::InvalidQuery(format!(
            "Could not parse '{}' as a number after '{}'",
            token, phrase
        ))
    })
}
