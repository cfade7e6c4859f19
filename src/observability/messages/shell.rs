// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the line-oriented command session.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A command line could not be parsed.
///
/// # Log Level
/// `debug!` - Client input problem, reported back in the response
pub struct CommandRejected<'a> {
    pub line: &'a str,
    pub reason: &'a str,
}

impl Display for CommandRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rejected command '{}': {}", self.line, self.reason)
    }
}

impl StructuredLog for CommandRejected<'_> {
    fn log(&self) {
        tracing::debug!(line = self.line, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("command", span_name = name, line = self.line)
    }
}

/// Input reached EOF and the session ended.
///
/// # Log Level
/// `info!` - Important operational event
pub struct SessionFinished {
    pub commands: usize,
    pub failed: usize,
}

impl Display for SessionFinished {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Session finished after {} commands ({} failed)",
            self.commands, self.failed
        )
    }
}

impl StructuredLog for SessionFinished {
    fn log(&self) {
        tracing::info!(commands = self.commands, failed = self.failed, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("session", span_name = name)
    }
}
