// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for dw-core operations.

use thiserror::Error;

/// All possible errors that can occur in dw-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid coordinate ({latitude}, {longitude})\n  hint: latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid search radius: {0} km\n  hint: radius must be between {min} and {max} km", min = crate::pharmacy::MIN_RADIUS_KM, max = crate::pharmacy::MAX_RADIUS_KM)]
    InvalidRadius(u32),

    #[error("search query too long: {0} characters\n  hint: queries are limited to {max} characters", max = crate::pharmacy::MAX_QUERY_LEN)]
    QueryTooLong(usize),

    #[error("invalid item kind: '{0}'\n  hint: valid kinds are: upload, mutation, action")]
    InvalidItemKind(String),

    #[error("invalid method: '{0}'\n  hint: valid methods are: GET, POST, PUT, PATCH, DELETE")]
    InvalidMethod(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for dw-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
