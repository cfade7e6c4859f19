// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured filtering over stored records.

mod criteria;
mod engine;

pub use criteria::{
    FilterCriteria, PARAM_CONTAINS_CHARACTER, PARAM_IS_PALINDROME, PARAM_MAX_LENGTH,
    PARAM_MIN_LENGTH, PARAM_WORD_COUNT,
};
pub use engine::{FilterEngine, FilterOutcome};
