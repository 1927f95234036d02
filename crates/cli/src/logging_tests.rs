// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::env::vars;

fn shows(filter: EnvFilter, expected: &str) -> bool {
    filter.to_string().eq_ignore_ascii_case(expected)
}

// Single test so the set/unset steps cannot interleave.
#[test]
fn test_filter_precedence() {
    let saved = std::env::var_os(vars::RUST_LOG);

    std::env::remove_var(vars::RUST_LOG);
    assert!(shows(filter("debug"), "debug"));
    assert!(shows(filter("no=such=level"), FALLBACK_FILTER));

    std::env::set_var(vars::RUST_LOG, "trace");
    assert!(shows(filter("debug"), "trace"));

    match saved {
        Some(value) => std::env::set_var(vars::RUST_LOG, value),
        None => std::env::remove_var(vars::RUST_LOG),
    }
}

#[test]
fn test_init_twice_is_harmless() {
    init("warn");
    init("debug");
}
