// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions.

use std::path::PathBuf;

/// Environment variable names.
pub mod vars {
    pub const DAWAEE_CONFIG: &str = "DAWAEE_CONFIG";
    pub const RUST_LOG: &str = "RUST_LOG";
    pub const NO_COLOR: &str = "NO_COLOR";
    pub const COLOR: &str = "COLOR";
}

/// Returns the value of `DAWAEE_CONFIG` if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::DAWAEE_CONFIG)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns `true` if `RUST_LOG` is set, so it takes precedence over config.
pub fn rust_log_set() -> bool {
    std::env::var_os(vars::RUST_LOG).is_some()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
