// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline action queue and its delivery plumbing.
//!
//! Actions that need the network (prescription uploads, mutations, push
//! notifications) go through an [`OfflineQueue`]. When the device is offline
//! they are stored and replayed later.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ OfflineQueue │────►│  Transport  │────►│   Backend   │
//! │              │◄────│   (trait)   │◄────│   (HTTP)    │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!     │      ▲
//!     ▼      │ flush on reconnect
//! ┌────────┐ ┌────────────────┐
//! │ Store  │ │ NetworkMonitor │
//! │ (JSONL)│ │    (watch)     │
//! └────────┘ └────────────────┘
//! ```
//!
//! # Features
//!
//! - FIFO queue persisted as JSONL after every change
//! - Bounded retry: items are dropped and reported after `max_attempts`
//! - Concurrent replay with a single-flush guard
//! - Injectable transport and store traits for testing

mod network;
mod queue;
mod store;
mod transport;

pub use network::{spawn_auto_flush, NetworkMonitor, NetworkState, NetworkStatus, SyncEvent};
pub use queue::{
    FlushReport, OfflineQueue, QueueConfig, QueueError, QueueResult, Submitted,
    DEFAULT_MAX_ATTEMPTS,
};
pub use store::{JsonlStore, MemoryStore, QueueStore, StoreError, StoreResult};
pub use transport::{HttpTransport, Transport, TransportError, TransportResult};

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(test)]
mod network_tests;
