// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Display formatting for distances.

/// Unit suffixes used when rendering a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    pub meters: &'static str,
    pub kilometers: &'static str,
}

impl UnitLabels {
    pub const fn arabic() -> Self {
        UnitLabels {
            meters: "م",
            kilometers: "كم",
        }
    }

    pub const fn english() -> Self {
        UnitLabels {
            meters: "m",
            kilometers: "km",
        }
    }
}

impl Default for UnitLabels {
    fn default() -> Self {
        UnitLabels::arabic()
    }
}

/// Formats a distance with Arabic unit labels.
///
/// Under 1 km renders whole meters (`350 م`), otherwise kilometres with one
/// decimal (`12.4 كم`).
pub fn format_distance(km: f64) -> String {
    format_distance_with(km, &UnitLabels::default())
}

/// Formats a distance with the given unit labels.
pub fn format_distance_with(km: f64, labels: &UnitLabels) -> String {
    if km < 1.0 {
        format!("{} {}", (km * 1000.0).round(), labels.meters)
    } else {
        format!("{:.1} {}", km, labels.kilometers)
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
