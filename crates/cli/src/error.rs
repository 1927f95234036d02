// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::{QueueError, TransportError};

/// All possible errors that can occur in the dwrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Core(#[from] dw_core::Error),

    #[error("{0}")]
    Queue(#[from] QueueError),

    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("invalid payload: {0}\n  hint: --payload must be a JSON document, e.g. '{{\"id\": 1}}'")]
    InvalidPayload(String),

    #[error("cannot read pharmacies from {path}: {reason}")]
    PharmacyData { path: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for dwrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
