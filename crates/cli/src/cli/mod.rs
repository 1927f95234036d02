// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use dw_core::UnitLabels;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Unit labels for rendered distances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Units {
    /// م / كم
    #[default]
    Ar,
    /// m / km
    En,
}

impl Units {
    pub fn labels(self) -> UnitLabels {
        match self {
            Units::Ar => UnitLabels::arabic(),
            Units::En => UnitLabels::english(),
        }
    }
}

#[derive(Parser)]
#[command(name = "dawaee")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Find nearby pharmacies and keep actions flowing while offline")]
#[command(
    long_about = "Find nearby pharmacies and keep actions flowing while offline.\n\n\
    Ranks pharmacies by approximate road distance and queues uploads and other \
    network actions until the backend is reachable again."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Pharmacies
    // ─────────────────────────────────────────────────────────────────────────
    /// Approximate road distance between two points
    #[command(
        allow_negative_numbers = true,
        after_help = colors::examples("\
Examples:
  dawaee distance 24.7136 46.6753 21.4858 39.1925   Riyadh to Jeddah
  dawaee distance 0 0 0 1 --raw --units en         Great-circle distance in km"))]
    Distance {
        /// Latitude of the first point
        lat1: f64,
        /// Longitude of the first point
        lon1: f64,
        /// Latitude of the second point
        lat2: f64,
        /// Longitude of the second point
        lon2: f64,

        /// Report the great-circle distance without the road factor
        #[arg(long)]
        raw: bool,

        /// Unit labels
        #[arg(long, value_enum, default_value_t)]
        units: Units,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Verified pharmacies near a location, nearest first
    #[command(
        allow_negative_numbers = true,
        after_help = colors::examples("\
Examples:
  dawaee nearby --lat 24.71 --lon 46.67 -f <file>        Within the default radius
  dawaee nearby --lat 24.71 --lon 46.67 -r 5 -q nahdi    Name or address match
  cat <file> | dawaee nearby --lat 24.71 --lon 46.67    Read rows from stdin"))]
    Nearby {
        /// User latitude
        #[arg(long)]
        lat: f64,

        /// User longitude
        #[arg(long)]
        lon: f64,

        /// Search radius in km (1-500, default from config)
        #[arg(long, short)]
        radius: Option<u32>,

        /// Case-insensitive name or address filter
        #[arg(long, short)]
        query: Option<String>,

        /// JSON file with an array of pharmacy rows (default: stdin)
        #[arg(long, short, value_name = "path")]
        file: Option<PathBuf>,

        /// Unit labels
        #[arg(long, value_enum, default_value_t)]
        units: Units,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Offline queue
    // ─────────────────────────────────────────────────────────────────────────
    /// Inspect and replay the offline queue
    #[command(subcommand)]
    Queue(QueueCommand),

    /// Probe the backend and flush the queue whenever it comes back
    #[command(after_help = colors::examples("\
Examples:
  dawaee watch                 Probe at the configured interval
  dawaee watch --interval 2    Probe every 2 seconds"))]
    Watch {
        /// Seconds between connectivity probes (default from config)
        #[arg(long, value_name = "secs")]
        interval: Option<u64>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Offline queue commands.
#[derive(Subcommand)]
pub enum QueueCommand {
    /// Queue an action for later delivery
    #[command(after_help = colors::examples("\
Examples:
  dawaee queue add upload POST /api/prescriptions -p <json>   Queue an upload
  dawaee queue add action POST /api/notify --submit           Send now if reachable"))]
    Add {
        /// Action kind (upload, mutation, action)
        kind: String,

        /// HTTP method (GET, POST, PUT, PATCH, DELETE)
        method: String,

        /// Path relative to the backend, or an absolute URL
        target: String,

        /// JSON request body
        #[arg(long, short)]
        payload: Option<String>,

        /// Try to deliver now; queue only if the backend is unreachable
        #[arg(long)]
        submit: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// List queued actions, oldest first
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Print the number of queued actions
    Size,

    /// Drop every queued action
    Clear,

    /// Replay queued actions now
    Flush {
        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },
}

/// Configuration commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Print the config file location
    Path,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
