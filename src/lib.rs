// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod analysis;     // per-string property derivation
pub mod config;       // config loading + runtime builder
pub mod errors;       // error handling
pub mod filter;       // structured filter criteria
pub mod interpreter;  // natural-language query rules
pub mod observability;
pub mod service;      // request/response facade
pub mod shell;        // line protocol for the binary
pub mod store;        // in-memory record store
pub mod traits;       // shared abstractions
