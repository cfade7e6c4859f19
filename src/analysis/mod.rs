// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-string analysis.
//!
//! [`analyze`] computes the fixed set of derived properties for one string:
//! length, word count, palindrome flag, unique-character count, character
//! frequency map and SHA-256 content hash. [`StringRecord`] bundles those with
//! the original value and its creation timestamp.

mod analyzer;

pub use analyzer::{
    analyze, character_frequency, content_hash, is_palindrome, word_count,
    StringProperties, StringRecord,
};
