// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Proximity ranking of located records.

use serde::Serialize;

use crate::geo::{Coordinate, DistanceModel};

/// A record that may carry a position.
pub trait Locatable {
    /// The record's coordinate, if it has one. Returned values are not
    /// assumed valid; the ranker checks them.
    fn coordinate(&self) -> Option<Coordinate>;
}

impl Locatable for Coordinate {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

/// A borrowed view of an entity with its distance from the user attached.
#[derive(Debug, Clone, Serialize)]
pub struct Ranked<'a, T> {
    #[serde(flatten)]
    pub entity: &'a T,
    pub distance_km: f64,
}

/// Ranks candidates by distance from `user` with the default model.
///
/// See [`rank_with`].
pub fn rank_by_proximity<'a, T: Locatable>(
    user: Coordinate,
    candidates: &'a [T],
    max_radius_km: Option<f64>,
) -> Vec<Ranked<'a, T>> {
    rank_with(&DistanceModel::default(), user, candidates, max_radius_km)
}

/// Ranks candidates by distance from `user`.
///
/// Candidates without a valid coordinate are skipped. When `max_radius_km`
/// is given, candidates farther than the radius are dropped before sorting.
/// The sort is stable, so equidistant candidates keep their input order.
pub fn rank_with<'a, T: Locatable>(
    model: &DistanceModel,
    user: Coordinate,
    candidates: &'a [T],
    max_radius_km: Option<f64>,
) -> Vec<Ranked<'a, T>> {
    if !user.is_valid() {
        tracing::warn!(
            "cannot rank from invalid user location ({}, {})",
            user.latitude,
            user.longitude
        );
        return Vec::new();
    }

    let mut ranked: Vec<Ranked<'a, T>> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, entity)| {
            let Some(coordinate) = entity.coordinate().filter(Coordinate::is_valid) else {
                tracing::debug!("skipping candidate {} without a valid coordinate", index);
                return None;
            };
            Some(Ranked {
                entity,
                distance_km: model.distance_km(user, coordinate),
            })
        })
        .filter(|r| max_radius_km.map_or(true, |radius| r.distance_km <= radius))
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
