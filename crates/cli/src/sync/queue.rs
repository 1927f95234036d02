// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline queue for actions that could not be delivered.
//!
//! Items are kept in FIFO order and the full snapshot is persisted after
//! every change. [`OfflineQueue::flush`] replays every pending item
//! concurrently; failed items are retried on later flushes until they reach
//! the attempt ceiling, at which point they are dropped and reported.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use dw_core::{ItemKind, ItemState, Method, QueueItem};
use futures_util::future::join_all;
use serde::Serialize;

use super::store::{MemoryStore, QueueStore};
use super::transport::{Transport, TransportError};

/// Default number of delivery attempts before an item is dropped.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Configuration for the offline queue.
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Delivery attempts per item before it is reported as lost.
    pub max_attempts: u32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        QueueConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Counts from one flush pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlushReport {
    /// Items delivered and removed in this pass.
    pub delivered: usize,
    /// Items still pending after this pass.
    pub remaining: usize,
}

/// Error type for queue operations.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// Immediate delivery was rejected by the server.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Items ran out of attempts during a flush and were removed.
    #[error(
        "{} queued action(s) could not be delivered after {max_attempts} attempts and were dropped\n  hint: the affected actions must be repeated manually",
        lost.len()
    )]
    DeliveryExhausted {
        lost: Vec<QueueItem>,
        max_attempts: u32,
        report: FlushReport,
    },
}

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Outcome of [`OfflineQueue::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    /// Delivered right away.
    Delivered,
    /// Stored for a later flush.
    Queued(QueueItem),
}

struct QueueState {
    items: Vec<QueueItem>,
    in_flight: HashSet<String>,
    persistent: bool,
}

/// Offline queue of pending actions.
///
/// One instance is meant to exist per device; share it behind an `Arc`.
pub struct OfflineQueue<T: Transport> {
    transport: T,
    store: Box<dyn QueueStore>,
    config: QueueConfig,
    state: Mutex<QueueState>,
    flushing: AtomicBool,
}

impl<T: Transport> OfflineQueue<T> {
    /// Open a queue over `store`, loading any persisted items.
    ///
    /// If the store cannot be read the queue starts empty and runs memory-only
    /// for this session, leaving the stored data untouched.
    pub fn open(transport: T, store: impl QueueStore + 'static, config: QueueConfig) -> Self {
        let (items, persistent) = match store.load() {
            Ok(items) => (items, true),
            Err(e) => {
                tracing::warn!("failed to load offline queue, continuing in memory: {}", e);
                (Vec::new(), false)
            }
        };
        if !items.is_empty() {
            tracing::debug!("loaded {} queued action(s)", items.len());
        }

        OfflineQueue {
            transport,
            store: Box::new(store),
            config,
            state: Mutex::new(QueueState {
                items,
                in_flight: HashSet::new(),
                persistent,
            }),
            flushing: AtomicBool::new(false),
        }
    }

    /// Create a queue that never touches durable storage.
    pub fn in_memory(transport: T, config: QueueConfig) -> Self {
        Self::open(transport, MemoryStore::new(), config)
    }

    fn state(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write the snapshot, dropping to memory-only on failure.
    fn persist(&self, state: &mut QueueState) {
        if !state.persistent {
            return;
        }
        if let Err(e) = self.store.save(&state.items) {
            tracing::warn!("failed to persist offline queue, continuing in memory: {}", e);
            state.persistent = false;
        }
    }

    fn push(&self, item: QueueItem) {
        let mut state = self.state();
        state.items.push(item);
        self.persist(&mut state);
    }

    /// Queue an action for a later flush.
    ///
    /// Never fails: a storage error only degrades the queue to memory-only.
    pub fn enqueue(
        &self,
        kind: ItemKind,
        target: impl Into<String>,
        method: Method,
        payload: Option<serde_json::Value>,
    ) -> QueueItem {
        let item = QueueItem::new(kind, target, method, payload);
        tracing::debug!("queued {} {} {} as {}", item.kind, item.method, item.target, item.id);
        self.push(item.clone());
        item
    }

    /// Deliver an action now, or queue it if the device is offline.
    ///
    /// A network-class failure of the immediate attempt also queues the
    /// action. A server rejection is returned to the caller.
    pub async fn submit(
        &self,
        kind: ItemKind,
        target: impl Into<String>,
        method: Method,
        payload: Option<serde_json::Value>,
        online: bool,
    ) -> QueueResult<Submitted> {
        if !online {
            return Ok(Submitted::Queued(self.enqueue(kind, target, method, payload)));
        }

        let item = QueueItem::new(kind, target, method, payload);
        match self.transport.deliver(&item).await {
            Ok(()) => Ok(Submitted::Delivered),
            Err(e) if e.is_network() => {
                tracing::warn!("delivery of {} failed, queued for later: {}", item.target, e);
                self.push(item.clone());
                Ok(Submitted::Queued(item))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.state().items.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pending items in FIFO order.
    pub fn items(&self) -> Vec<QueueItem> {
        self.state().items.clone()
    }

    /// State of a queued item, or `None` once it has left the queue.
    pub fn state_of(&self, id: &str) -> Option<ItemState> {
        let state = self.state();
        if !state.items.iter().any(|i| i.id == id) {
            return None;
        }
        if state.in_flight.contains(id) {
            Some(ItemState::InFlight)
        } else {
            Some(ItemState::Pending)
        }
    }

    /// Returns false once the queue has fallen back to memory-only.
    pub fn is_persistent(&self) -> bool {
        self.state().persistent
    }

    /// The transport used for deliveries, e.g. to probe connectivity.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }

    /// Drop every pending item and erase persisted state.
    ///
    /// Deliveries already in flight run to completion; their results are
    /// ignored.
    pub fn clear(&self) {
        let mut state = self.state();
        let dropped = state.items.len();
        state.items.clear();
        if state.persistent {
            if let Err(e) = self.store.erase() {
                tracing::warn!("failed to erase offline queue, continuing in memory: {}", e);
                state.persistent = false;
            }
        }
        tracing::info!("cleared offline queue ({} item(s) dropped)", dropped);
    }

    /// Replay every pending item.
    ///
    /// Only items present when the call starts are attempted. Returns
    /// [`QueueError::DeliveryExhausted`] if any item used its last attempt;
    /// those items are removed either way. A call made while another flush
    /// is running does nothing.
    pub async fn flush(&self) -> QueueResult<FlushReport> {
        let Some(_guard) = FlushGuard::acquire(self) else {
            tracing::debug!("flush already in progress, skipping");
            return Ok(FlushReport {
                delivered: 0,
                remaining: self.len(),
            });
        };

        let snapshot = {
            let mut guard = self.state();
            let state = &mut *guard;
            state
                .in_flight
                .extend(state.items.iter().map(|i| i.id.clone()));
            state.items.clone()
        };
        if snapshot.is_empty() {
            return Ok(FlushReport::default());
        }

        tracing::info!("processing {} offline item(s)", snapshot.len());
        let results = join_all(snapshot.iter().map(|item| self.transport.deliver(item))).await;

        let max_attempts = self.config.max_attempts;
        let mut delivered = 0;
        let mut lost = Vec::new();
        let remaining = {
            let mut guard = self.state();
            let state = &mut *guard;
            for (item, result) in snapshot.iter().zip(results) {
                state.in_flight.remove(&item.id);
                let Some(pos) = state.items.iter().position(|i| i.id == item.id) else {
                    tracing::debug!("discarding result for {}, no longer queued", item.id);
                    continue;
                };
                match result {
                    Ok(()) => {
                        state.items.remove(pos);
                        delivered += 1;
                        tracing::debug!("synced {} {}", item.kind, item.id);
                    }
                    Err(e) => {
                        let attempts = state.items[pos].record_failure();
                        if state.items[pos].is_exhausted(max_attempts) {
                            tracing::error!(
                                "failed to sync {} {} after {} attempts: {}",
                                item.kind,
                                item.id,
                                attempts,
                                e
                            );
                            lost.push(state.items.remove(pos));
                        } else {
                            tracing::warn!(
                                "retry {}/{} for {} {}: {}",
                                attempts,
                                max_attempts,
                                item.kind,
                                item.id,
                                e
                            );
                        }
                    }
                }
            }
            self.persist(state);
            state.items.len()
        };

        let report = FlushReport {
            delivered,
            remaining,
        };
        tracing::info!(
            "processed {}/{} offline item(s), {} remaining",
            delivered,
            snapshot.len(),
            remaining
        );

        if lost.is_empty() {
            Ok(report)
        } else {
            Err(QueueError::DeliveryExhausted {
                lost,
                max_attempts,
                report,
            })
        }
    }
}

/// Held for the duration of a flush; releases the flag and the in-flight
/// markers even if the flush future is dropped.
struct FlushGuard<'a, T: Transport> {
    queue: &'a OfflineQueue<T>,
}

impl<'a, T: Transport> FlushGuard<'a, T> {
    fn acquire(queue: &'a OfflineQueue<T>) -> Option<Self> {
        queue
            .flushing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FlushGuard { queue })
    }
}

impl<T: Transport> Drop for FlushGuard<'_, T> {
    fn drop(&mut self) {
        self.queue.state().in_flight.clear();
        self.queue.flushing.store(false, Ordering::Release);
    }
}
