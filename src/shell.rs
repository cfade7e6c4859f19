// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Line-oriented command protocol for driving a [`StringService`].
//!
//! One command per line, one JSON document per response:
//!
//! ```text
//! insert {"value": "racecar"}
//! get racecar
//! delete racecar
//! list is_palindrome=true&min_length=3
//! query single word palindromes
//! ```
//!
//! Blank lines and `#` comments are skipped.

use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::errors::{Result, StringAnalysisError};
use crate::observability::messages::shell::{CommandRejected, SessionFinished};
use crate::observability::messages::StructuredLog;
use crate::service::{Response, StringService, STATUS_CREATED, STATUS_OK};

/// A parsed shell command. Arguments borrow from the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Insert(&'a str),
    Get(&'a str),
    Delete(&'a str),
    List(&'a str),
    Query(&'a str),
}

impl<'a> Command<'a> {
    /// Parse one line. `Ok(None)` for blank lines and comments.
    ///
    /// The argument is everything after the first space, verbatim, so values
    /// may contain spaces.
    pub fn parse(line: &'a str) -> Result<Option<Self>> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            return Ok(None);
        }

        let (name, arg) = line.split_once(' ').unwrap_or((line, ""));
        let command = match name {
            "insert" => Command::Insert(arg),
            "get" => Command::Get(arg),
            "delete" => Command::Delete(arg),
            "list" => Command::List(arg),
            "query" => Command::Query(arg),
            other => {
                return Err(StringAnalysisError::InvalidInput(format!(
                    "Unknown command '{}': expected insert, get, delete, list or query",
                    other
                )))
            }
        };
        Ok(Some(command))
    }

    pub fn execute(&self, service: &StringService) -> Response {
        match self {
            Command::Insert(body) => {
                Response::from_result(service.create_from_body(body), STATUS_CREATED)
            }
            Command::Get(value) => Response::from_result(service.get(value), STATUS_OK),
            Command::Delete(value) => match service.delete(value) {
                Ok(()) => Response::no_content(),
                Err(err) => Response::error(&err),
            },
            Command::List(params) => Response::from_result(service.list(params), STATUS_OK),
            Command::Query(text) => Response::from_result(service.query(text), STATUS_OK),
        }
    }
}

/// Parse and execute a single line. `None` for lines that carry no command.
pub fn handle_line(service: &StringService, line: &str) -> Option<Response> {
    match Command::parse(line) {
        Ok(Some(command)) => Some(command.execute(service)),
        Ok(None) => None,
        Err(err) => {
            CommandRejected {
                line,
                reason: err.message(),
            }
            .log();
            Some(Response::error(&err))
        }
    }
}

/// Render a response as a single JSON document `{ status, body }`.
pub fn render(response: &Response, pretty: bool) -> String {
    let document = json!({ "status": response.status, "body": response.body });
    let rendered = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    // Serializing a `Value` cannot fail
    rendered.unwrap_or_default()
}

/// Run a session until `reader` hits EOF, returning the number of commands
/// handled.
pub async fn run_session<R, W>(
    service: &StringService,
    reader: R,
    mut writer: W,
    pretty: bool,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled = 0;
    let mut failed = 0;

    while let Some(line) = lines.next_line().await? {
        if let Some(response) = handle_line(service, &line) {
            handled += 1;
            if !response.is_success() {
                failed += 1;
            }
            let mut output = render(&response, pretty);
            output.push('\n');
            writer.write_all(output.as_bytes()).await?;
        }
    }

    writer.flush().await?;
    SessionFinished {
        commands: handled,
        failed,
    }
    .log();
    Ok(handled)
}
