// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dwrs - client library behind the `dawaee` CLI.
//!
//! Ranks pharmacies by approximate road distance and keeps network actions
//! in a durable offline queue until the backend is reachable again.
//!
//! # Main Components
//!
//! - [`sync::OfflineQueue`] - FIFO queue of pending actions with retry and replay
//! - [`sync::NetworkMonitor`] - connectivity signal that drives automatic flushes
//! - [`Config`] - client configuration (backend URL, queue file, retry ceiling)
//! - [`Error`] - Error types for all operations
//!
//! Distance math and ranking live in the `dw-core` crate.
//!
//! ```rust,ignore
//! use dwrs::{load_config, run, Command};
//!
//! let (config, path) = load_config(None)?;
//! run(Command::Queue(dwrs::QueueCommand::Size), &config, &path)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;
pub mod logging;

pub mod config;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command, ConfigCommand, OutputFormat, QueueCommand, Units};
pub use config::Config;
pub use error::{Error, Result};

use std::path::{Path, PathBuf};

use dw_core::NearbySearch;

/// Load the configuration from `path`, or from the default location.
///
/// Returns the config together with the path it was read from.
pub fn load_config(path: Option<&Path>) -> Result<(Config, PathBuf)> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config::config_path);
    let config = Config::load(&path)?;
    Ok((config, path))
}

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command, config: &Config, config_path: &Path) -> Result<()> {
    match command {
        Command::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
            raw,
            units,
            output,
        } => commands::distance::run(config, (lat1, lon1), (lat2, lon2), raw, units, output),
        Command::Nearby {
            lat,
            lon,
            radius,
            query,
            file,
            units,
            output,
        } => {
            let search = NearbySearch {
                latitude: lat,
                longitude: lon,
                max_distance_km: radius.unwrap_or(config.default_radius_km),
                query,
            };
            commands::nearby::run(config, search, file.as_deref(), units, output)
        }
        Command::Queue(cmd) => commands::queue::run(cmd, config),
        Command::Watch { interval } => commands::watch::run(config, interval),
        Command::Config(cmd) => commands::config::run(cmd, config, config_path),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
