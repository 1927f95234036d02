// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Read;
use std::path::Path;

use dw_core::{nearby_with, NearbySearch, Pharmacy, Ranked};

use crate::cli::{OutputFormat, Units};
use crate::config::Config;
use crate::display::format_pharmacy;
use crate::error::{Error, Result};

use super::print_json;

pub fn run(
    config: &Config,
    search: NearbySearch,
    file: Option<&Path>,
    units: Units,
    output: OutputFormat,
) -> Result<()> {
    let pharmacies = load_pharmacies(file)?;
    let ranked = nearby_with(&config.distance_model(), &search, &pharmacies)?;

    match output {
        OutputFormat::Text => {
            for line in render_text(&ranked, &search, units) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => print_json(&ranked)?,
    }
    Ok(())
}

/// Read pharmacy rows from `file`, or stdin when no file is given.
pub(crate) fn load_pharmacies(file: Option<&Path>) -> Result<Vec<Pharmacy>> {
    match file {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| Error::PharmacyData {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            parse_pharmacies(&path.display().to_string(), &content)
        }
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            parse_pharmacies("stdin", &content)
        }
    }
}

pub(crate) fn parse_pharmacies(source: &str, content: &str) -> Result<Vec<Pharmacy>> {
    serde_json::from_str(content).map_err(|e| Error::PharmacyData {
        path: source.to_string(),
        reason: e.to_string(),
    })
}

pub(crate) fn render_text(
    ranked: &[Ranked<'_, Pharmacy>],
    search: &NearbySearch,
    units: Units,
) -> Vec<String> {
    if ranked.is_empty() {
        return vec![format!(
            "No verified pharmacies within {} km.",
            search.max_distance_km
        )];
    }
    let labels = units.labels();
    ranked
        .iter()
        .flat_map(|r| format_pharmacy(r, &labels))
        .collect()
}

#[cfg(test)]
#[path = "nearby_tests.rs"]
mod tests;
