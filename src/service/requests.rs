// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::errors::{Result, StringAnalysisError};

/// Body of an insert request: a JSON object with a string `value` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStringRequest {
    pub value: String,
}

impl CreateStringRequest {
    /// Validate an already-decoded JSON body.
    pub fn from_json(body: &Value) -> Result<Self> {
        let object = body.as_object().ok_or_else(|| {
            StringAnalysisError::InvalidInput("Request body must be a JSON object".to_string())
        })?;

        match object.get("value") {
            None | Some(Value::Null) => Err(StringAnalysisError::InvalidInput(
                "Missing 'value' field".to_string(),
            )),
            Some(Value::String(value)) => Ok(Self {
                value: value.clone(),
            }),
            Some(other) => Err(StringAnalysisError::InvalidInput(format!(
                "'value' must be a string, got {}",
                json_type_name(other)
            ))),
        }
    }

    /// Decode and validate a raw JSON body.
    pub fn from_body(body: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(body).map_err(|e| {
            StringAnalysisError::InvalidInput(format!("Request body is not valid JSON: {}", e))
        })?;
        Self::from_json(&json)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
