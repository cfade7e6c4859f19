// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::{ErrorKind, StringAnalysisError};

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Error payload: `{ status, kind, message }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&StringAnalysisError> for ErrorBody {
    fn from(err: &StringAnalysisError) -> Self {
        Self {
            status: err.status_code(),
            kind: err.kind(),
            message: err.message().to_string(),
        }
    }
}

/// A status code and JSON body, ready for whatever transport carries it.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    pub fn ok<T: Serialize>(payload: &T) -> Self {
        Self::with_status(STATUS_OK, payload)
    }

    pub fn created<T: Serialize>(payload: &T) -> Self {
        Self::with_status(STATUS_CREATED, payload)
    }

    pub fn no_content() -> Self {
        Self {
            status: STATUS_NO_CONTENT,
            body: Value::Null,
        }
    }

    pub fn error(err: &StringAnalysisError) -> Self {
        let body = ErrorBody::from(err);
        Self {
            status: body.status,
            body: json!({
                "status": body.status,
                "kind": body.kind,
                "message": body.message,
            }),
        }
    }

    /// Map a core result onto a response, using `success_status` on `Ok`.
    pub fn from_result<T: Serialize>(
        result: Result<T, StringAnalysisError>,
        success_status: u16,
    ) -> Self {
        match result {
            Ok(payload) => Self::with_status(success_status, &payload),
            Err(err) => Self::error(&err),
        }
    }

    fn with_status<T: Serialize>(status: u16, payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self { status, body },
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response payload");
                Self {
                    status: STATUS_INTERNAL_ERROR,
                    body: json!({
                        "status": STATUS_INTERNAL_ERROR,
                        "kind": "internal",
                        "message": format!("Failed to serialize response: {}", e),
                    }),
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body() {
        let response = Response::error(&StringAnalysisError::NotFound("gone".into()));
        assert_eq!(response.status, 404);
        assert!(!response.is_success());
        assert_eq!(
            response.body,
            json!({ "status": 404, "kind": "not_found", "message": "gone" })
        );
    }

    #[test]
    fn test_from_result() {
        let ok: Result<_, StringAnalysisError> = Ok(json!({ "a": 1 }));
        let response = Response::from_result(ok, STATUS_CREATED);
        assert_eq!(response.status, 201);
        assert_eq!(response.body["a"], 1);

        let err: Result<Value, _> = Err(StringAnalysisError::Conflict("dup".into()));
        assert_eq!(Response::from_result(err, STATUS_CREATED).status, 409);
    }

    #[test]
    fn test_no_content() {
        let response = Response::no_content();
        assert_eq!(response.status, 204);
        assert!(response.body.is_null());
    }
}
