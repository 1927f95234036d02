// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::DAWAEE_CONFIG, "DAWAEE_CONFIG");
    assert_eq!(vars::RUST_LOG, "RUST_LOG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

// Single test so the set/unset steps cannot interleave.
#[test]
fn test_config_path() {
    std::env::remove_var(vars::DAWAEE_CONFIG);
    assert_eq!(config_path(), None);

    std::env::set_var(vars::DAWAEE_CONFIG, "");
    assert_eq!(config_path(), None);

    std::env::set_var(vars::DAWAEE_CONFIG, "/tmp/dawaee-test/config.toml");
    assert_eq!(
        config_path(),
        Some(PathBuf::from("/tmp/dawaee-test/config.toml"))
    );
    std::env::remove_var(vars::DAWAEE_CONFIG);
}

#[test]
fn test_color_overrides() {
    std::env::set_var(vars::NO_COLOR, "1");
    assert!(no_color());
    std::env::set_var(vars::NO_COLOR, "true");
    assert!(!no_color());
    std::env::remove_var(vars::NO_COLOR);
    assert!(!no_color());

    // COLOR=1 is left alone: other tests render text and must stay uncolored.
    std::env::remove_var(vars::COLOR);
    assert!(!force_color());
}
