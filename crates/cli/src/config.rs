// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! Configuration is stored in `<config_dir>/dawaee/config.toml`, or wherever
//! `DAWAEE_CONFIG` points. A missing file means defaults. Fields:
//! - `base_url`: backend that queued actions are replayed against
//! - `queue_path`: JSONL file holding the offline queue
//! - `max_attempts`: deliveries per queued action before it is dropped
//! - `road_factor`: multiplier from great-circle to road distance

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dw_core::pharmacy::{DEFAULT_RADIUS_KM, MAX_RADIUS_KM, MIN_RADIUS_KM};
use dw_core::DistanceModel;

use crate::env;
use crate::error::{Error, Result};
use crate::sync::{QueueConfig, DEFAULT_MAX_ATTEMPTS};

const APP_DIR_NAME: &str = "dawaee";
const CONFIG_FILE_NAME: &str = "config.toml";
const QUEUE_FILE_NAME: &str = "offline-queue.jsonl";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL; relative queue targets are resolved against it.
    pub base_url: String,
    /// Offline queue file. Defaults to the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_path: Option<PathBuf>,
    /// Delivery attempts per queued action (default: 3).
    pub max_attempts: u32,
    /// Per-request timeout in seconds (default: 30).
    pub request_timeout_secs: u64,
    /// Great-circle to road distance multiplier (default: 1.2).
    pub road_factor: f64,
    /// Radius used by `nearby` when none is given (default: 50).
    pub default_radius_km: u32,
    /// Connectivity probe interval for `watch` in seconds (default: 10).
    pub probe_interval_secs: u64,
    /// Log filter used when `RUST_LOG` is unset (default: "warn").
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: "http://localhost:3000".to_string(),
            queue_path: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            request_timeout_secs: 30,
            road_factor: dw_core::geo::ROAD_FACTOR,
            default_radius_km: DEFAULT_RADIUS_KM,
            probe_interval_secs: 10,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Checks values that would make the client misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url cannot be empty".to_string()));
        }
        if self.max_attempts == 0 {
            return Err(Error::Config(
                "max_attempts must be at least 1\n  hint: the default is 3".to_string(),
            ));
        }
        if !(self.road_factor.is_finite() && self.road_factor > 0.0) {
            return Err(Error::Config(format!(
                "road_factor must be a positive number, got {}",
                self.road_factor
            )));
        }
        if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&self.default_radius_km) {
            return Err(Error::Config(format!(
                "default_radius_km must be between {} and {}, got {}",
                MIN_RADIUS_KM, MAX_RADIUS_KM, self.default_radius_km
            )));
        }
        Ok(())
    }

    /// Queue file location, configured or default.
    pub fn queue_path(&self) -> PathBuf {
        self.queue_path.clone().unwrap_or_else(default_queue_path)
    }

    pub fn queue_config(&self) -> QueueConfig {
        QueueConfig {
            max_attempts: self.max_attempts,
        }
    }

    pub fn distance_model(&self) -> DistanceModel {
        DistanceModel::with_road_factor(self.road_factor)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn probe_interval(&self) -> Duration {
        Duration::from_secs(self.probe_interval_secs.max(1))
    }
}

/// Config file location: `DAWAEE_CONFIG`, else the platform config directory.
pub fn config_path() -> PathBuf {
    env::config_path().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    })
}

/// Default queue file in the platform data directory.
pub fn default_queue_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(QUEUE_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
