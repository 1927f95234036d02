// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deferred network actions held by the offline queue.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// What kind of action was deferred. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Upload,
    Mutation,
    Action,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Upload => "upload",
            ItemKind::Mutation => "mutation",
            ItemKind::Action => "action",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "upload" => Ok(ItemKind::Upload),
            "mutation" => Ok(ItemKind::Mutation),
            "action" => Ok(ItemKind::Action),
            _ => Err(Error::InvalidItemKind(s.to_string())),
        }
    }
}

/// HTTP verb replayed for a deferred action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            _ => Err(Error::InvalidMethod(s.to_string())),
        }
    }
}

/// Delivery state of a queued item.
///
/// ```text
/// Pending ──► InFlight ──► Delivered          (removed)
///    ▲            │
///    └────────────┤  attempts < ceiling
///                 └──────► Failed             (removed, reported)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Pending,
    InFlight,
    Delivered,
    Failed,
}

impl ItemState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ItemState::Delivered | ItemState::Failed)
    }
}

/// One pending network-bound action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    pub id: String,
    pub kind: ItemKind,
    pub target: String,
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    pub enqueued_at: DateTime<Utc>,
    #[serde(default)]
    pub attempts: u32,
}

impl QueueItem {
    /// Creates a fresh item with a new id and zero attempts.
    pub fn new(
        kind: ItemKind,
        target: impl Into<String>,
        method: Method,
        payload: Option<serde_json::Value>,
    ) -> Self {
        let target = target.into();
        let enqueued_at = Utc::now();
        QueueItem {
            id: generate_item_id(&target, &enqueued_at),
            kind,
            target,
            method,
            payload,
            enqueued_at,
            attempts: 0,
        }
    }

    /// Records a failed delivery attempt and returns the new count.
    pub fn record_failure(&mut self) -> u32 {
        self.attempts = self.attempts.saturating_add(1);
        self.attempts
    }

    /// Returns true once the item has used up `max_attempts` deliveries.
    pub fn is_exhausted(&self, max_attempts: u32) -> bool {
        self.attempts >= max_attempts
    }
}

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate a queue item ID.
/// Format: {unix_ms}-{hash} where hash is the first 8 hex chars of
/// SHA256(target + timestamp + pid + sequence)
pub fn generate_item_id(target: &str, at: &DateTime<Utc>) -> String {
    let sequence = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let input = format!(
        "{}{}{}{}",
        target,
        at.to_rfc3339(),
        std::process::id(),
        sequence
    );
    let hash = Sha256::digest(input.as_bytes());
    format!("{}-{}", at.timestamp_millis(), hex::encode(&hash[..4]))
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
