// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::{ConfigCommand, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand, config: &Config, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { output } => {
            print!("{}", render(config, output)?);
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

/// Render the effective configuration, with defaults filled in.
pub(crate) fn render(config: &Config, output: OutputFormat) -> Result<String> {
    let effective = Config {
        queue_path: Some(config.queue_path()),
        ..config.clone()
    };
    match output {
        OutputFormat::Text => toml::to_string_pretty(&effective)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e))),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&effective)?)),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
