// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pharmacy records and nearby search.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::{Coordinate, DistanceModel};
use crate::rank::{rank_with, Locatable, Ranked};

pub const DEFAULT_RADIUS_KM: u32 = 50;
pub const MIN_RADIUS_KM: u32 = 1;
pub const MAX_RADIUS_KM: u32 = 500;
pub const MAX_QUERY_LEN: usize = 100;

/// A pharmacy row as returned by the data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pharmacy {
    pub id: String,
    #[serde(alias = "pharmacy_name")]
    pub name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_open: bool,
}

impl Locatable for Pharmacy {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate {
            latitude: self.latitude?,
            longitude: self.longitude?,
        })
    }
}

impl Pharmacy {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .address
                .as_deref()
                .is_some_and(|a| a.to_lowercase().contains(needle))
    }
}

/// Parameters of a nearby-pharmacy search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbySearch {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_radius")]
    pub max_distance_km: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

fn default_radius() -> u32 {
    DEFAULT_RADIUS_KM
}

impl NearbySearch {
    /// A search around the given point with the default radius and no query.
    pub fn around(latitude: f64, longitude: f64) -> Self {
        NearbySearch {
            latitude,
            longitude,
            max_distance_km: DEFAULT_RADIUS_KM,
            query: None,
        }
    }

    /// Checks the search bounds and returns the user's coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinate`], [`Error::InvalidRadius`] or
    /// [`Error::QueryTooLong`] for out-of-bounds parameters.
    pub fn validate(&self) -> Result<Coordinate> {
        let origin = Coordinate::new(self.latitude, self.longitude)?;
        if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&self.max_distance_km) {
            return Err(Error::InvalidRadius(self.max_distance_km));
        }
        if let Some(query) = &self.query {
            let len = query.chars().count();
            if len > MAX_QUERY_LEN {
                return Err(Error::QueryTooLong(len));
            }
        }
        Ok(origin)
    }
}

/// Verified pharmacies within the search radius, nearest first.
pub fn nearby<'a>(
    search: &NearbySearch,
    pharmacies: &'a [Pharmacy],
) -> Result<Vec<Ranked<'a, Pharmacy>>> {
    nearby_with(&DistanceModel::default(), search, pharmacies)
}

/// Like [`nearby`], with an explicit distance model.
pub fn nearby_with<'a>(
    model: &DistanceModel,
    search: &NearbySearch,
    pharmacies: &'a [Pharmacy],
) -> Result<Vec<Ranked<'a, Pharmacy>>> {
    let origin = search.validate()?;
    let needle = search
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let ranked = rank_with(
        model,
        origin,
        pharmacies,
        Some(f64::from(search.max_distance_km)),
    );

    Ok(ranked
        .into_iter()
        .filter(|r| r.entity.is_verified)
        .filter(|r| needle.as_deref().map_or(true, |n| r.entity.matches(n)))
        .collect())
}

#[cfg(test)]
#[path = "pharmacy_tests.rs"]
mod tests;
