// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Great-circle distance between coordinates.
//!
//! Distances are computed with the Haversine formula on a spherical earth and
//! then scaled by a flat road factor to approximate travel distance. The
//! factor is a heuristic, not a routing computation:
//!
//! ```text
//! distance_km = 2R · atan2(√a, √(1 − a)) · road_factor
//! a           = sin²(Δφ/2) + cos φ₁ · cos φ₂ · sin²(Δλ/2)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Mean earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Multiplier applied to the geodesic distance to approximate road distance.
pub const ROAD_FACTOR: f64 = 1.2;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinate`] if either component is non-finite
    /// or outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinate = Coordinate {
            latitude,
            longitude,
        };
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(Error::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Returns true if both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Parameters of the distance computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceModel {
    pub earth_radius_km: f64,
    pub road_factor: f64,
}

impl Default for DistanceModel {
    fn default() -> Self {
        DistanceModel {
            earth_radius_km: EARTH_RADIUS_KM,
            road_factor: ROAD_FACTOR,
        }
    }
}

impl DistanceModel {
    /// Default model with a different road factor.
    pub fn with_road_factor(road_factor: f64) -> Self {
        DistanceModel {
            road_factor,
            ..DistanceModel::default()
        }
    }

    /// Uncorrected great-circle distance in kilometres.
    ///
    /// Non-finite inputs produce `NaN`; callers validate coordinates first.
    pub fn great_circle_km(&self, a: Coordinate, b: Coordinate) -> f64 {
        let phi1 = a.latitude.to_radians();
        let phi2 = b.latitude.to_radians();
        let d_phi = (b.latitude - a.latitude).to_radians();
        let d_lambda = (b.longitude - a.longitude).to_radians();

        let sin_phi = (d_phi / 2.0).sin();
        let sin_lambda = (d_lambda / 2.0).sin();
        let h = sin_phi * sin_phi + phi1.cos() * phi2.cos() * sin_lambda * sin_lambda;
        // Rounding can push h a hair past 1 for antipodal points.
        let h = h.clamp(0.0, 1.0);

        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        self.earth_radius_km * c
    }

    /// Road-corrected distance in kilometres.
    pub fn distance_km(&self, a: Coordinate, b: Coordinate) -> f64 {
        self.great_circle_km(a, b) * self.road_factor
    }
}

/// Road-corrected distance between two coordinates using the default model.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    DistanceModel::default().distance_km(a, b)
}

/// Uncorrected great-circle distance using the default earth radius.
pub fn great_circle_km(a: Coordinate, b: Coordinate) -> f64 {
    DistanceModel::default().great_circle_km(a, b)
}

#[cfg(test)]
#[path = "geo_tests.rs"]
mod tests;
