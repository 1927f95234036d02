// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

use dw_core::{ItemKind, Method, QueueItem};

/// Create a queued mutation against `target` with a small JSON payload.
pub fn make_test_item(target: &str) -> QueueItem {
    QueueItem::new(
        ItemKind::Mutation,
        target,
        Method::Post,
        Some(serde_json::json!({ "target": target })),
    )
}
