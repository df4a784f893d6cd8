// Copyright (c) 2025 Like Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Like Trie Library
//!
//! A string-keyed associative container with SQL `LIKE`-style wildcard
//! lookup: `%` in a registered key matches any run of characters, exact
//! entries always beat wildcard entries, and wildcard resolution prefers
//! the longest shared literal prefix.
//!
//! # Architecture
//!
//! The library is designed with the following principles in mind:
//! - Strict component boundaries
//! - Absence modeled as `Option`, defaults as configuration
//! - Deferred, compute-once pattern compilation
//! - Comprehensive error handling at the ambient edges

// Re-export public modules
pub mod build_info;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use build_info::VERSION;
pub use data_structures::{Entry, LikeTrie, LikeTrieConfig};
pub use error::{LikeTrieError, LikeTrieResult};

/// Initialize the logging system.
///
/// Installs a global `tracing` subscriber filtered by the standard
/// environment variables. Optional: the containers themselves never log,
/// so embedders with their own subscriber can skip this entirely.
pub fn init_logging() -> LikeTrieResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .with_thread_names(true)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        LikeTrieError::LoggingInit(format!("Failed to set global tracing subscriber: {e}"))
    })
}
