// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Boundary facade over the store and the two query surfaces.
//!
//! [`StringService`] accepts requests in the loosely-typed form a transport
//! delivers them (JSON bodies, raw query-string parameters, free text),
//! validates them into core types, and reports failures as
//! [`StringAnalysisError`]s whose kind determines the status code.

mod requests;
mod responses;

use serde_json::Value;
use std::sync::Arc;

use crate::analysis::StringRecord;
use crate::errors::Result;
use crate::filter::{FilterCriteria, FilterEngine, FilterOutcome};
use crate::interpreter::{NaturalLanguageInterpreter, NaturalLanguageResponse};
use crate::store::StringStore;

pub use requests::CreateStringRequest;
pub use responses::{
    ErrorBody, Response, STATUS_CREATED, STATUS_INTERNAL_ERROR, STATUS_NO_CONTENT, STATUS_OK,
};

pub struct StringService {
    store: Arc<StringStore>,
    interpreter: NaturalLanguageInterpreter,
}

impl StringService {
    pub fn new(store: Arc<StringStore>) -> Self {
        Self {
            store,
            interpreter: NaturalLanguageInterpreter::new(),
        }
    }

    pub fn store(&self) -> &Arc<StringStore> {
        &self.store
    }

    /// Insert from a decoded JSON body (`{ "value": "..." }`).
    pub fn create(&self, body: &Value) -> Result<Arc<StringRecord>> {
        let request = CreateStringRequest::from_json(body)?;
        self.store.insert(&request.value)
    }

    /// Insert from a raw JSON body; malformed JSON is `InvalidInput`.
    pub fn create_from_body(&self, body: &str) -> Result<Arc<StringRecord>> {
        let request = CreateStringRequest::from_body(body)?;
        self.store.insert(&request.value)
    }

    pub fn get(&self, value: &str) -> Result<Arc<StringRecord>> {
        self.store.get(value)
    }

    pub fn delete(&self, value: &str) -> Result<()> {
        self.store.remove(value)
    }

    /// Structured filter from an `a=b&c=d` parameter string.
    pub fn list(&self, query_string: &str) -> Result<FilterOutcome> {
        let criteria = FilterCriteria::from_query_string(query_string)?;
        Ok(FilterEngine::filter(self.store.as_ref(), criteria))
    }

    pub fn query(&self, text: &str) -> Result<NaturalLanguageResponse> {
        self.interpreter.interpret(self.store.as_ref(), text)
    }
}

impl std::fmt::Debug for StringService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringService")
            .field("store", &self.store)
            .field("rule_count", &self.interpreter.rules().len())
            .finish()
    }
}
