// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Nothing listens on the discard port, so deliveries fail fast.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

pub fn dawaee() -> Command {
    let mut cmd = cargo_bin_cmd!("dawaee");
    cmd.env("NO_COLOR", "1").env_remove("COLOR").env_remove("RUST_LOG");
    cmd
}

/// A temp directory holding a config whose queue file lives next to it.
pub struct Env {
    pub temp: TempDir,
}

impl Env {
    /// Config pointing at an unreachable backend.
    pub fn offline() -> Self {
        Self::with_config(&format!(
            "base_url = \"{}\"\nrequest_timeout_secs = 2\n",
            UNREACHABLE_URL
        ))
    }

    /// Config with `extra` appended to the offline defaults.
    pub fn with_config(contents: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let queue = temp.path().join("queue.jsonl");
        let body = format!(
            "queue_path = \"{}\"\n{}",
            queue.display().to_string().replace('\\', "\\\\"),
            contents
        );
        std::fs::write(temp.path().join("config.toml"), body).unwrap();
        Env { temp }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.toml")
    }

    pub fn queue_path(&self) -> PathBuf {
        self.temp.path().join("queue.jsonl")
    }

    /// A `dawaee` command reading this environment's config.
    pub fn cmd(&self) -> Command {
        let mut cmd = dawaee();
        cmd.env("DAWAEE_CONFIG", self.config_path());
        cmd
    }

    /// Write `contents` to a file in the temp directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Queue an action and return its id.
    pub fn enqueue(&self, target: &str) -> String {
        let output = self
            .cmd()
            .args(["queue", "add", "action", "POST", target])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8_lossy(&output.stdout)
            .trim()
            .trim_start_matches("Queued ")
            .to_string()
    }
}
