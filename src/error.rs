// Copyright (c) 2025 Like Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for the Like Trie library.
//!
//! The container itself reports absence through `Option` rather than
//! errors; the types here cover the fallible ambient operations around it.

use thiserror::Error;

/// Result type alias used throughout the library.
pub type LikeTrieResult<T> = Result<T, LikeTrieError>;

/// Core error enum for the Like Trie library.
#[derive(Error, Debug)]
pub enum LikeTrieError {
    /// Error when installing the global tracing subscriber.
    #[error("Logging initialization error: {0}")]
    LoggingInit(String),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error when parsing a run mode name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown run mode: {0}")]
pub struct ParseRunModeError(pub String);
