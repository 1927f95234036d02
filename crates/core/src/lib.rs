// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dw-core: Shared library for the dawaee pharmacy client
//!
//! This crate provides the pure domain pieces used by the dawaee CLI:
//! great-circle distance and proximity ranking, distance formatting,
//! pharmacy search, and the queue item model used by the offline queue.

pub mod error;
pub mod format;
pub mod geo;
pub mod item;
pub mod jsonl;
pub mod pharmacy;
pub mod rank;

pub use error::{Error, Result};
pub use format::{format_distance, format_distance_with, UnitLabels};
pub use geo::{distance_km, great_circle_km, Coordinate, DistanceModel};
pub use item::{ItemKind, ItemState, Method, QueueItem};
pub use pharmacy::{nearby, nearby_with, NearbySearch, Pharmacy};
pub use rank::{rank_by_proximity, rank_with, Locatable, Ranked};
