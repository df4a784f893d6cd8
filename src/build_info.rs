// Copyright (c) 2025 Like Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Build metadata exposed as read-only globals.
//!
//! Version and artifact identity come from the Cargo manifest at compile
//! time. The run mode is detected once on first access: debug builds
//! report [`RunMode::Development`]; release builds consult the
//! `LIKE_TRIE_RUN_MODE` environment variable and fall back to
//! [`RunMode::Packaged`] when it is unset or unrecognized.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::ParseRunModeError;

/// Crate version from the Cargo manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name from the Cargo manifest.
pub const ARTIFACT_ID: &str = env!("CARGO_PKG_NAME");

/// Environment variable consulted for the run mode in release builds.
pub const RUN_MODE_ENV: &str = "LIKE_TRIE_RUN_MODE";

/// How the artifact is being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RunMode {
    /// Running as a packaged release artifact.
    Packaged,

    /// Running as a natively distributed binary.
    Native,

    /// Running from a development build.
    Development,
}

impl FromStr for RunMode {
    type Err = ParseRunModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "packaged" => Ok(Self::Packaged),
            "native" => Ok(Self::Native),
            "development" => Ok(Self::Development),
            _ => Err(ParseRunModeError(value.to_string())),
        }
    }
}

impl Display for RunMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Packaged => write!(f, "packaged"),
            Self::Native => write!(f, "native"),
            Self::Development => write!(f, "development"),
        }
    }
}

/// Run mode of the current process, detected on first access.
pub static RUN_MODE: Lazy<RunMode> = Lazy::new(detect_run_mode);

fn detect_run_mode() -> RunMode {
    if cfg!(debug_assertions) {
        return RunMode::Development;
    }

    match std::env::var(RUN_MODE_ENV) {
        Ok(value) => value.parse().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Unrecognized run mode, assuming packaged");
            RunMode::Packaged
        }),
        Err(_) => RunMode::Packaged,
    }
}
