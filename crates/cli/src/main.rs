// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use dwrs::Cli;

fn main() {
    let cli = Cli::parse();
    let result = dwrs::load_config(cli.config.as_deref()).and_then(|(config, path)| {
        dwrs::logging::init(&config.log_level);
        dwrs::run(cli.command, &config, &path)
    });
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
