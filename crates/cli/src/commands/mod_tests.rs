// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing.
//!
//! This module provides a `TestContext` holding a config whose queue file
//! lives in a temp directory, plus a mock transport, so commands can be
//! exercised without a backend.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::commands::testing::TestContext;
//!
//! #[test]
//! fn test_some_command() {
//!     let ctx = TestContext::new();
//!     let queue = ctx.queue();
//!     // Test command logic using queue and ctx.config
//! }
//! ```

use crate::config::Config;
use crate::sync::transport_tests::MockTransport;
use crate::sync::{JsonlStore, OfflineQueue};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test context with a temp-dir backed config and a mock transport.
pub struct TestContext {
    pub config: Config,
    pub mock: MockTransport,
    pub config_path: PathBuf,
    _temp_dir: TempDir, // Keep alive for duration of test
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = Config {
            queue_path: Some(temp_dir.path().join("offline-queue.jsonl")),
            ..Config::default()
        };
        TestContext {
            config,
            mock: MockTransport::new(),
            config_path: temp_dir.path().join("config.toml"),
            _temp_dir: temp_dir,
        }
    }

    /// Open the queue file from the config over the mock transport.
    ///
    /// Each call opens a fresh instance, like a new CLI invocation.
    pub fn queue(&self) -> OfflineQueue<MockTransport> {
        OfflineQueue::open(
            self.mock.clone(),
            JsonlStore::new(self.config.queue_path()),
            self.config.queue_config(),
        )
    }
}
