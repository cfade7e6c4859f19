// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by the analysis core: store operations, structured filters and
//! natural-language interpretation.

use serde::Serialize;
use thiserror::Error;

/// Coarse classification of a [`StringAnalysisError`].
///
/// The boundary layer maps each kind to a status code; callers that only care
/// about the category can match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    Conflict,
    NotFound,
    InvalidQuery,
}

impl ErrorKind {
    /// HTTP-style status code for this kind of failure.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::InvalidInput | ErrorKind::InvalidQuery => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidQuery => "invalid_query",
        }
    }
}

/// Every failure the core can surface. None of them are transient, so none are
/// worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StringAnalysisError {
    /// Malformed insert payload (missing `value`, non-string `value`, too long).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The value is already present in the store.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Lookup or delete of a value that is not stored.
    #[error("not found: {0}")]
    NotFound(String),

    /// Unparseable filter value, conflicting derived bounds, or a
    /// natural-language query that matched nothing in the vocabulary.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl StringAnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StringAnalysisError::InvalidInput(_) => ErrorKind::InvalidInput,
            StringAnalysisError::Conflict(_) => ErrorKind::Conflict,
            StringAnalysisError::NotFound(_) => ErrorKind::NotFound,
            StringAnalysisError::InvalidQuery(_) => ErrorKind::InvalidQuery,
        }
    }

    /// The message without the kind prefix that `Display` adds.
    pub fn message(&self) -> &str {
        match self {
            StringAnalysisError::InvalidInput(msg)
            | StringAnalysisError::Conflict(msg)
            | StringAnalysisError::NotFound(msg)
            | StringAnalysisError::InvalidQuery(msg) => msg,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

pub type Result<T> = std::result::Result<T, StringAnalysisError>;
