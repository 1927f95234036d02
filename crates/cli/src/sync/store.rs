// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable storage for the offline queue.
//!
//! Uses JSONL format for durability - each queued item is written as a single
//! line and the whole snapshot is rewritten and fsynced after every change.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use dw_core::{jsonl, QueueItem};

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying file or encoding error.
    #[error("{0}")]
    Core(#[from] dw_core::Error),

    /// The backing storage cannot be used.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value style persistence for the queue snapshot.
pub trait QueueStore: Send + Sync {
    /// Load the persisted items in FIFO order.
    fn load(&self) -> StoreResult<Vec<QueueItem>>;

    /// Replace the persisted snapshot.
    fn save(&self, items: &[QueueItem]) -> StoreResult<()>;

    /// Forget all persisted state.
    fn erase(&self) -> StoreResult<()>;
}

impl<S: QueueStore + ?Sized> QueueStore for Arc<S> {
    fn load(&self) -> StoreResult<Vec<QueueItem>> {
        (**self).load()
    }

    fn save(&self, items: &[QueueItem]) -> StoreResult<()> {
        (**self).save(items)
    }

    fn erase(&self) -> StoreResult<()> {
        (**self).erase()
    }
}

/// Queue snapshot stored in a JSONL file, one item per line.
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonlStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QueueStore for JsonlStore {
    fn load(&self) -> StoreResult<Vec<QueueItem>> {
        Ok(jsonl::read_all(&self.path)?)
    }

    fn save(&self, items: &[QueueItem]) -> StoreResult<()> {
        Ok(jsonl::write_all(&self.path, items)?)
    }

    fn erase(&self) -> StoreResult<()> {
        Ok(jsonl::remove(&self.path)?)
    }
}

/// In-process store; nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<Vec<QueueItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Snapshot of what was last saved.
    pub fn snapshot(&self) -> Vec<QueueItem> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl QueueStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<QueueItem>> {
        Ok(self.snapshot())
    }

    fn save(&self, items: &[QueueItem]) -> StoreResult<()> {
        *self.items.lock().unwrap_or_else(PoisonError::into_inner) = items.to_vec();
        Ok(())
    }

    fn erase(&self) -> StoreResult<()> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}
