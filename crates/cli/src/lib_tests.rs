// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Tests for the public `run()` function.
//!
//! Commands that print are covered by the integration tests that run the
//! binary; these check routing and the errors surfaced before any output.

use crate::commands::testing::TestContext;
use crate::{load_config, run, Command, ConfigCommand, Error, OutputFormat, QueueCommand, Units};

#[test]
fn test_load_config_missing_file_is_default() {
    let ctx = TestContext::new();

    let (config, path) = load_config(Some(&ctx.config_path)).unwrap();

    assert_eq!(config, crate::Config::default());
    assert_eq!(path, ctx.config_path);
}

#[test]
fn test_load_config_reads_file() {
    let ctx = TestContext::new();
    std::fs::write(&ctx.config_path, "max_attempts = 5\n").unwrap();

    let (config, _) = load_config(Some(&ctx.config_path)).unwrap();

    assert_eq!(config.max_attempts, 5);
}

#[test]
fn test_run_distance_rejects_invalid_coordinate() {
    let ctx = TestContext::new();
    let cmd = Command::Distance {
        lat1: 91.0,
        lon1: 0.0,
        lat2: 0.0,
        lon2: 0.0,
        raw: false,
        units: Units::En,
        output: OutputFormat::Text,
    };

    let err = run(cmd, &ctx.config, &ctx.config_path).unwrap_err();

    assert!(matches!(err, Error::Core(_)));
}

#[test]
fn test_run_nearby_rejects_radius_out_of_range() {
    let ctx = TestContext::new();
    let file = ctx.config_path.with_file_name("pharmacies.json");
    std::fs::write(&file, "[]").unwrap();
    let cmd = Command::Nearby {
        lat: 24.7,
        lon: 46.7,
        radius: Some(501),
        query: None,
        file: Some(file),
        units: Units::En,
        output: OutputFormat::Text,
    };

    let err = run(cmd, &ctx.config, &ctx.config_path).unwrap_err();

    assert!(matches!(err, Error::Core(_)));
}

#[test]
fn test_run_queue_add_rejects_bad_payload() {
    let ctx = TestContext::new();
    let cmd = Command::Queue(QueueCommand::Add {
        kind: "upload".to_string(),
        method: "POST".to_string(),
        target: "/api/prescriptions".to_string(),
        payload: Some("{not json".to_string()),
        submit: false,
        output: OutputFormat::Text,
    });

    let err = run(cmd, &ctx.config, &ctx.config_path).unwrap_err();

    assert!(matches!(err, Error::InvalidPayload(_)));
    assert!(!ctx.config.queue_path().exists());
}

#[test]
fn test_run_config_path() {
    let ctx = TestContext::new();

    run(
        Command::Config(ConfigCommand::Path),
        &ctx.config,
        &ctx.config_path,
    )
    .unwrap();
}
