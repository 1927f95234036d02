// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter used when neither `RUST_LOG` nor the config gives a usable one.
pub const FALLBACK_FILTER: &str = "warn";

/// Build the filter: `RUST_LOG` wins, then `default_level`, then `warn`.
pub fn filter(default_level: &str) -> EnvFilter {
    let from_env = env::rust_log_set()
        .then(EnvFilter::try_from_default_env)
        .and_then(|result| result.ok());
    from_env
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_FILTER))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
