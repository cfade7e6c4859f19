// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic logging goes through the message types in [`messages`].
//! Message types follow a struct-based pattern with a `Display` implementation
//! so that log text lives in one place instead of being scattered as format
//! strings through the store and query code.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::store` - record insert, lookup and removal
//! * `messages::query` - structured filters and natural-language queries
//! * `messages::config` - configuration loading and store seeding
//! * `messages::shell` - command session events
//!
//! # Usage
//!
//! ```rust
//! use string_analysis::observability::messages::query::QueryRejected;
//!
//! let msg = QueryRejected {
//!     query: "banana bread",
//!     reason: "no recognizable phrases",
//! };
//!
//! tracing::warn!("{}", msg);
//! ```

pub mod messages;

#[cfg(test)]
pub(crate) mod capture {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if let Ok(mut inner) = self.0.lock() {
                inner.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a debug-level fmt subscriber and return what it printed.
    pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        let output = buffer
            .0
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default();
        (result, output)
    }
}
