// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use crate::analysis::StringRecord;
use crate::errors::{Result, StringAnalysisError};

pub const PARAM_IS_PALINDROME: &str = "is_palindrome";
pub const PARAM_MIN_LENGTH: &str = "min_length";
pub const PARAM_MAX_LENGTH: &str = "max_length";
pub const PARAM_WORD_COUNT: &str = "word_count";
pub const PARAM_CONTAINS_CHARACTER: &str = "contains_character";

/// A conjunction of optional predicates over stored records.
///
/// Absent fields impose no constraint. Length bounds are inclusive and
/// signed: bounds derived from text can fall below zero ("shorter than 0"
/// yields `max_length = -1`), which no record satisfies.
/// `contains_character` is checked as substring containment, so multi-character
/// values are accepted and matched as substrings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_palindrome(mut self, value: bool) -> Self {
        self.is_palindrome = Some(value);
        self
    }

    pub fn min_length(mut self, value: i64) -> Self {
        self.min_length = Some(value);
        self
    }

    pub fn max_length(mut self, value: i64) -> Self {
        self.max_length = Some(value);
        self
    }

    pub fn word_count(mut self, value: usize) -> Self {
        self.word_count = Some(value);
        self
    }

    pub fn contains_character(mut self, value: impl Into<String>) -> Self {
        self.contains_character = Some(value.into());
        self
    }

    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Evaluate every set predicate against `record`.
    pub fn matches(&self, record: &StringRecord) -> bool {
        let props = &record.properties;
        let length = i64::try_from(props.length).unwrap_or(i64::MAX);

        if let Some(expected) = self.is_palindrome {
            if props.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(needle) = &self.contains_character {
            if !record.value.contains(needle.as_str()) {
                return false;
            }
        }
        true
    }

    /// Parse raw string parameters as received from a query string.
    ///
    /// `is_palindrome` must be `"true"` or `"false"`; length and word-count
    /// parameters must be non-negative decimal integers. Malformed values,
    /// unknown names and repeated names are all `InvalidQuery`.
    pub fn from_params<'a, I>(params: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = Self::default();
        let mut seen = HashSet::new();

        for (name, raw) in params {
            if !seen.insert(name) {
                return Err(StringAnalysisError::InvalidQuery(format!(
                    "Parameter '{}' specified more than once",
                    name
                )));
            }

            match name {
                PARAM_IS_PALINDROME => criteria.is_palindrome = Some(parse_bool(name, raw)?),
                PARAM_MIN_LENGTH => criteria.min_length = Some(parse_bound(name, raw)?),
                PARAM_MAX_LENGTH => criteria.max_length = Some(parse_bound(name, raw)?),
                PARAM_WORD_COUNT => criteria.word_count = Some(parse_count(name, raw)?),
                PARAM_CONTAINS_CHARACTER => criteria.contains_character = Some(raw.to_string()),
                _ => {
                    return Err(StringAnalysisError::InvalidQuery(format!(
                        "Unsupported filter parameter '{}'",
                        name
                    )))
                }
            }
        }

        Ok(criteria)
    }

    /// Parse an `a=b&c=d` query string. Values are taken verbatim; a pair
    /// without `=` is malformed.
    pub fn from_query_string(query: &str) -> Result<Self> {
        let query = query.trim().trim_start_matches('?');
        if query.is_empty() {
            return Ok(Self::default());
        }

        let mut pairs = Vec::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (name, value) = pair.split_once('=').ok_or_else(|| {
                StringAnalysisError::InvalidQuery(format!(
                    "Malformed filter parameter '{}': expected name=value",
                    pair
                ))
            })?;
            pairs.push((name, value));
        }

        Self::from_params(pairs)
    }
}

impl Display for FilterCriteria {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(v) = self.is_palindrome {
            parts.push(format!("{}={}", PARAM_IS_PALINDROME, v));
        }
        if let Some(v) = self.min_length {
            parts.push(format!("{}={}", PARAM_MIN_LENGTH, v));
        }
        if let Some(v) = self.max_length {
            parts.push(format!("{}={}", PARAM_MAX_LENGTH, v));
        }
        if let Some(v) = self.word_count {
            parts.push(format!("{}={}", PARAM_WORD_COUNT, v));
        }
        if let Some(v) = &self.contains_character {
            parts.push(format!("{}={:?}", PARAM_CONTAINS_CHARACTER, v));
        }

        if parts.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(StringAnalysisError::InvalidQuery(format!(
            "Parameter '{}' must be 'true' or 'false', got '{}'",
            name, raw
        ))),
    }
}

fn parse_count(name: &str, raw: &str) -> Result<usize> {
    raw.parse::<usize>().map_err(|_| {
        StringAnalysisError::InvalidQuery(format!(
            "Parameter '{}' must be a non-negative integer, got '{}'",
            name, raw
        ))
    })
}

/// Length bounds from parameters are non-negative even though the field is
/// signed.
fn parse_bound(name: &str, raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(StringAnalysisError::InvalidQuery(format!(
            "Parameter '{}' must be a non-negative integer, got '{}'",
            name, raw
        ))),
    }
}
