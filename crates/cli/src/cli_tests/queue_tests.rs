// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

fn parse_queue(args: &[&str]) -> QueueCommand {
    let mut full = vec!["dawaee", "queue"];
    full.extend_from_slice(args);
    match Cli::try_parse_from(full).unwrap().command {
        Command::Queue(cmd) => cmd,
        _ => unreachable!("expected queue command"),
    }
}

#[test]
fn test_queue_add_positionals() {
    match parse_queue(&["add", "upload", "POST", "/api/prescriptions", "-p", "{\"a\":1}"]) {
        QueueCommand::Add {
            kind,
            method,
            target,
            payload,
            submit,
            output,
        } => {
            assert_eq!(kind, "upload");
            assert_eq!(method, "POST");
            assert_eq!(target, "/api/prescriptions");
            assert_eq!(payload.as_deref(), Some("{\"a\":1}"));
            assert!(!submit);
            assert_eq!(output, OutputFormat::Text);
        }
        _ => unreachable!("expected add"),
    }
}

#[test]
fn test_queue_add_submit() {
    assert!(matches!(
        parse_queue(&["add", "action", "POST", "/api/notify", "--submit"]),
        QueueCommand::Add { submit: true, .. }
    ));
}

#[parameterized(
    list = { &["list"] },
    list_json = { &["list", "-o", "json"] },
    size = { &["size"] },
    clear = { &["clear"] },
    flush = { &["flush"] },
    flush_json = { &["flush", "--output", "json"] },
)]
fn test_queue_subcommands_parse(args: &[&str]) {
    let mut full = vec!["dawaee", "queue"];
    full.extend_from_slice(args);
    assert!(Cli::try_parse_from(full).is_ok());
}

#[test]
fn test_queue_add_missing_target() {
    assert!(Cli::try_parse_from(["dawaee", "queue", "add", "upload", "POST"]).is_err());
}

#[test]
fn test_watch_interval() {
    let cli = Cli::try_parse_from(["dawaee", "watch", "--interval", "3"]).unwrap();
    assert!(matches!(cli.command, Command::Watch { interval: Some(3) }));
}

#[test]
fn test_config_subcommands() {
    let cli = Cli::try_parse_from(["dawaee", "config", "show", "-o", "json"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Config(ConfigCommand::Show {
            output: OutputFormat::Json
        })
    ));
    let cli = Cli::try_parse_from(["dawaee", "config", "path"]).unwrap();
    assert!(matches!(cli.command, Command::Config(ConfigCommand::Path)));
}
