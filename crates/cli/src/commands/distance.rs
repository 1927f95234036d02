// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use dw_core::{format_distance_with, Coordinate, DistanceModel, UnitLabels};

use crate::cli::{OutputFormat, Units};
use crate::config::Config;
use crate::error::Result;

use super::print_json;

/// JSON output for the distance command.
#[derive(Debug, Serialize)]
pub struct DistanceJson {
    pub from: Coordinate,
    pub to: Coordinate,
    pub distance_km: f64,
    pub road_corrected: bool,
    pub formatted: String,
}

pub fn run(
    config: &Config,
    from: (f64, f64),
    to: (f64, f64),
    raw: bool,
    units: Units,
    output: OutputFormat,
) -> Result<()> {
    let result = measure(&config.distance_model(), from, to, raw, &units.labels())?;
    match output {
        OutputFormat::Text => println!("{}", result.formatted),
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(())
}

/// Validate both points and compute the distance between them.
pub(crate) fn measure(
    model: &DistanceModel,
    from: (f64, f64),
    to: (f64, f64),
    raw: bool,
    labels: &UnitLabels,
) -> Result<DistanceJson> {
    let from = Coordinate::new(from.0, from.1)?;
    let to = Coordinate::new(to.0, to.1)?;
    let distance_km = if raw {
        model.great_circle_km(from, to)
    } else {
        model.distance_km(from, to)
    };

    Ok(DistanceJson {
        from,
        to,
        distance_km,
        road_corrected: !raw,
        formatted: format_distance_with(distance_km, labels),
    })
}

#[cfg(test)]
#[path = "distance_tests.rs"]
mod tests;
