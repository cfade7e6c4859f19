// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::sync::Arc;

use crate::analysis::StringRecord;
use crate::errors::{Result, StringAnalysisError};
use crate::filter::FilterEngine;
use crate::interpreter::rules::{default_rules, FilterContribution, PhraseRule};
use crate::interpreter::ParsedFilterSet;
use crate::observability::messages::query::{
    PhraseRecognized, QueryInterpreted, QueryReceived, QueryRejected,
};
use crate::observability::messages::StructuredLog;
use crate::traits::RecordSource;

/// The query text as received and the filters derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: ParsedFilterSet,
}

/// Matching records together with how the query was interpreted.
#[derive(Debug, Clone, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<Arc<StringRecord>>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

impl NaturalLanguageResponse {
    pub fn values(&self) -> Vec<&str> {
        self.data.iter().map(|r| r.value.as_str()).collect()
    }
}

/// One recognized phrase and what it contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecognizedPhrase {
    pub rule: &'static str,
    pub matched_text: String,
    pub contribution: Option<FilterContribution>,
}

/// Everything the rules produced for one query, before filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    pub original: String,
    pub filters: ParsedFilterSet,
    pub recognized: Vec<RecognizedPhrase>,
}

/// Maps free-text queries onto [`ParsedFilterSet`]s using a fixed, ordered
/// phrase vocabulary, then runs them through the [`FilterEngine`].
///
/// Stateless between calls: each query is evaluated against a fresh snapshot.
pub struct NaturalLanguageInterpreter {
    rules: Vec<PhraseRule>,
}

impl NaturalLanguageInterpreter {
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    pub fn rules(&self) -> &[PhraseRule] {
        &self.rules
    }

    /// Derive filters from `query` without executing them.
    ///
    /// `snapshot` is consulted by rules whose output depends on stored data
    /// (the first-vowel phrase).
    pub fn parse(&self, query: &str, snapshot: &[Arc<StringRecord>]) -> Result<ParsedQuery> {
        match self.parse_inner(query, snapshot) {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                QueryRejected {
                    query,
                    reason: err.message(),
                }
                .log();
                Err(err)
            }
        }
    }

    fn parse_inner(&self, query: &str, snapshot: &[Arc<StringRecord>]) -> Result<ParsedQuery> {
        if query.trim().is_empty() {
            return Err(StringAnalysisError::InvalidQuery(
                "Query must not be empty".to_string(),
            ));
        }

        let normalized = query.to_lowercase();
        let mut filters = ParsedFilterSet::default();
        let mut recognized = Vec::new();

        for rule in &self.rules {
            let Some(caps) = rule.regex.captures(&normalized) else {
                continue;
            };
            let matched_text = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            PhraseRecognized {
                rule: rule.name,
                matched_text,
            }
            .log();

            let contribution = (rule.extract)(&caps, snapshot)?;
            if let Some(contribution) = &contribution {
                contribution.clone().apply_to(&mut filters);
            }
            recognized.push(RecognizedPhrase {
                rule: rule.name,
                matched_text: matched_text.to_string(),
                contribution,
            });
        }

        if recognized.is_empty() {
            return Err(StringAnalysisError::InvalidQuery(
                "Unable to parse natural language query".to_string(),
            ));
        }

        if let (Some(min), Some(max)) = (filters.min_length, filters.max_length) {
            if min > max {
                return Err(StringAnalysisError::InvalidQuery(format!(
                    "Query parsed but resulted in conflicting filters: min_length={} > max_length={}",
                    min, max
                )));
            }
        }

        Ok(ParsedQuery {
            original: query.to_string(),
            filters,
            recognized,
        })
    }

    /// Interpret `query` and return the matching records from `source`.
    ///
    /// Takes a single snapshot so that the first-vowel scan and the filtering
    /// see the same records.
    pub fn interpret<S: RecordSource + ?Sized>(
        &self,
        source: &S,
        query: &str,
    ) -> Result<NaturalLanguageResponse> {
        let received = QueryReceived { query };
        let span = received.span("interpret");
        let _guard = span.enter();
        received.log();

        let snapshot = source.snapshot();
        let parsed = self.parse(query, &snapshot)?;
        let outcome = FilterEngine::filter_records(snapshot, parsed.filters);

        let derived = outcome.filters_applied.to_string();
        QueryInterpreted {
            query,
            derived_filters: &derived,
            matched: outcome.count,
        }
        .log();

        Ok(NaturalLanguageResponse {
            data: outcome.data,
            count: outcome.count,
            interpreted_query: InterpretedQuery {
                original: parsed.original,
                parsed_filters: outcome.filters_applied,
            },
        })
    }
}

impl Default for NaturalLanguageInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
