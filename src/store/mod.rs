// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Record store.
//!
//! [`StringStore`] owns every analyzed record, keyed by the exact input value.
//! It is an explicit object: construct one per process (or per test) and pass
//! it by reference to the query surfaces. There is no update in place;
//! re-analysis is a remove followed by an insert.

mod memory;

pub use memory::StringStore;
