// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Network status observer and automatic queue replay.
//!
//! The queue never decides on its own when to retry. A [`NetworkMonitor`]
//! publishes connectivity changes, and [`spawn_auto_flush`] flushes the queue
//! whenever the device comes back online, reporting each outcome as a
//! [`SyncEvent`].

use std::sync::Arc;

use dw_core::QueueItem;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::queue::{FlushReport, OfflineQueue, QueueError};
use super::transport::Transport;

/// Device connectivity as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    Online,
    Offline,
}

impl NetworkStatus {
    pub fn is_online(self) -> bool {
        self == NetworkStatus::Online
    }
}

/// Connectivity as published to subscribers.
///
/// `reconnects` counts offline to online transitions, so a subscriber that
/// only sees the latest value can still tell that a reconnect happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkState {
    pub status: NetworkStatus,
    pub reconnects: u64,
}

/// Observable connectivity state.
pub struct NetworkMonitor {
    tx: watch::Sender<NetworkState>,
}

impl NetworkMonitor {
    pub fn new(initial: NetworkStatus) -> Self {
        let (tx, _rx) = watch::channel(NetworkState {
            status: initial,
            reconnects: 0,
        });
        NetworkMonitor { tx }
    }

    /// Record the current status. Returns true if it changed.
    pub fn set(&self, status: NetworkStatus) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if current.status == status {
                return false;
            }
            if status.is_online() {
                current.reconnects += 1;
            }
            current.status = status;
            true
        });
        if changed {
            tracing::info!("network is now {:?}", status);
        }
        changed
    }

    pub fn status(&self) -> NetworkStatus {
        self.tx.borrow().status
    }

    pub fn subscribe(&self) -> watch::Receiver<NetworkState> {
        self.tx.subscribe()
    }
}

/// Outcome of an automatic flush.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// A flush finished without losing anything.
    Flushed(FlushReport),
    /// A flush dropped items that ran out of attempts.
    Lost {
        items: Vec<QueueItem>,
        report: FlushReport,
    },
}

/// Spawn a task that flushes `queue` on every offline to online transition.
///
/// If the status is already online when the task starts, it flushes once
/// right away. Reconnects that happen while a flush is running are caught
/// up afterwards; if the device is offline again by then, the flush waits
/// for the next reconnect. The task exits when the monitor is dropped.
pub fn spawn_auto_flush<T: Transport + 'static>(
    queue: Arc<OfflineQueue<T>>,
    mut state: watch::Receiver<NetworkState>,
    events: mpsc::Sender<SyncEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let initial = *state.borrow_and_update();
        let mut seen = initial.reconnects;
        if initial.status.is_online() {
            flush_and_report(&queue, &events).await;
        }

        while state.changed().await.is_ok() {
            let current = *state.borrow_and_update();
            if current.reconnects == seen {
                continue;
            }
            seen = current.reconnects;
            if current.status.is_online() {
                flush_and_report(&queue, &events).await;
            }
        }
        tracing::debug!("network monitor closed, stopping auto flush");
    })
}

async fn flush_and_report<T: Transport>(
    queue: &OfflineQueue<T>,
    events: &mpsc::Sender<SyncEvent>,
) {
    let event = match queue.flush().await {
        Ok(report) => SyncEvent::Flushed(report),
        Err(QueueError::DeliveryExhausted { lost, report, .. }) => SyncEvent::Lost {
            items: lost,
            report,
        },
        Err(e) => {
            tracing::warn!("auto flush failed: {}", e);
            return;
        }
    };
    match events.try_send(event) {
        Ok(()) => {}
        Err(mpsc::error::TrySendError::Full(event)) => {
            tracing::warn!("sync event channel full, dropping {:?}", event);
        }
        Err(mpsc::error::TrySendError::Closed(_)) => {
            tracing::debug!("no sync event listener");
        }
    }
}
