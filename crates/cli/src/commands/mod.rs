// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod distance;
pub mod nearby;
pub mod queue;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod watch;

use std::future::Future;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::sync::{HttpTransport, JsonlStore, OfflineQueue};

/// Run a future to completion on a fresh single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

/// Helper to open the offline queue described by the config.
pub fn open_queue(config: &Config) -> Result<OfflineQueue<HttpTransport>> {
    let transport = HttpTransport::new(config.base_url.clone(), config.request_timeout())?;
    let store = JsonlStore::new(config.queue_path());
    let queue = OfflineQueue::open(transport, store, config.queue_config());
    if !queue.is_persistent() {
        eprintln!(
            "warning: offline queue at {} could not be loaded; changes this session are kept in memory only",
            config.queue_path().display()
        );
    }
    Ok(queue)
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
