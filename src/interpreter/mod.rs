// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Natural-language query interpretation.
//!
//! A deterministic pattern matcher over a small fixed vocabulary. Recognized
//! phrases and what they set:
//!
//! | phrase | filter |
//! |---|---|
//! | `single word` | `word_count = 1` |
//! | `palindrome` / `palindromic` | `is_palindrome = true` |
//! | `longer than N` | `min_length = N + 1` |
//! | `shorter than N` | `max_length = N - 1` |
//! | `contains/containing [the] [letter] c` | `contains_character = c` |
//! | `first vowel` | `contains_character` = first of a, e, i, o, u found in any stored value |
//!
//! A query that recognizes nothing, or whose derived length bounds contradict
//! each other, is rejected rather than answered with an empty or unfiltered
//! result.

mod natural_language;
pub mod rules;

use crate::filter::FilterCriteria;

/// Filters derived from one natural-language query. Same shape as the
/// structured filter so it can be handed straight to the engine.
pub type ParsedFilterSet = FilterCriteria;

pub use natural_language::{
    InterpretedQuery, NaturalLanguageInterpreter, NaturalLanguageResponse, ParsedQuery,
    RecognizedPhrase,
};
pub use rules::{FilterContribution, PhraseRule};
