// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Long-running connectivity watch.
//!
//! Probes the backend on an interval, feeds the result into a
//! [`NetworkMonitor`], and lets the auto-flush task replay the queue each
//! time the backend comes back. Runs until Ctrl-C.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::display::{format_flush_report, format_lost_items};
use crate::error::Result;
use crate::sync::{
    spawn_auto_flush, NetworkMonitor, NetworkStatus, OfflineQueue, SyncEvent, Transport,
};

use super::{block_on, open_queue};

pub fn run(config: &Config, interval: Option<u64>) -> Result<()> {
    let interval = interval
        .map(|secs| Duration::from_secs(secs.max(1)))
        .unwrap_or_else(|| config.probe_interval());
    let queue = Arc::new(open_queue(config)?);

    eprintln!(
        "Watching {} every {}s ({} queued). Press Ctrl-C to stop.",
        config.base_url,
        interval.as_secs(),
        queue.len()
    );
    block_on(watch(queue, interval, async {
        // An error here means no signal handler could be installed; stop right away.
        let _ = tokio::signal::ctrl_c().await;
    }))?
}

/// Probe loop. Returns once `shutdown` completes.
pub(crate) async fn watch<T: Transport + 'static>(
    queue: Arc<OfflineQueue<T>>,
    interval: Duration,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    // Start offline so the first successful probe counts as a reconnect.
    let monitor = NetworkMonitor::new(NetworkStatus::Offline);
    let (event_tx, mut event_rx) = mpsc::channel(16);
    let task = spawn_auto_flush(Arc::clone(&queue), monitor.subscribe(), event_tx);

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {
                let status = if queue.transport().probe().await {
                    NetworkStatus::Online
                } else {
                    NetworkStatus::Offline
                };
                monitor.set(status);
            }
            Some(event) = event_rx.recv() => {
                for line in describe_event(&event) {
                    println!("{}", line);
                }
            }
        }
    }

    drop(monitor);
    if let Err(e) = task.await {
        tracing::warn!("auto flush task ended abnormally: {}", e);
    }
    Ok(())
}

/// Lines to print for a sync event.
pub(crate) fn describe_event(event: &SyncEvent) -> Vec<String> {
    match event {
        SyncEvent::Flushed(report) => vec![format_flush_report(report)],
        SyncEvent::Lost { items, report } => {
            let mut lines = vec![format_flush_report(report)];
            lines.extend(format_lost_items(items));
            lines
        }
    }
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
