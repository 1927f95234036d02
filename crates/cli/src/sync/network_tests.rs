// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the network observer module.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::network::{spawn_auto_flush, NetworkMonitor, NetworkStatus, SyncEvent};
use super::queue::{FlushReport, OfflineQueue, QueueConfig};
use super::transport_tests::MockTransport;
use dw_core::{ItemKind, Method};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn queue_with_items(mock: &MockTransport, config: QueueConfig, n: usize) -> Arc<OfflineQueue<MockTransport>> {
    let queue = OfflineQueue::in_memory(mock.clone(), config);
    for i in 0..n {
        queue.enqueue(ItemKind::Action, format!("/api/{i}"), Method::Post, None);
    }
    Arc::new(queue)
}

/// Poll until `check` holds, failing the test after five seconds.
async fn until(check: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !check() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

async fn next_event(rx: &mut mpsc::Receiver<SyncEvent>) -> SyncEvent {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for sync event")
        .expect("event channel closed")
}

#[test]
fn monitor_reports_changes_only() {
    let monitor = NetworkMonitor::new(NetworkStatus::Offline);

    assert!(!monitor.set(NetworkStatus::Offline));
    assert!(monitor.set(NetworkStatus::Online));
    assert!(!monitor.set(NetworkStatus::Online));
    assert_eq!(monitor.status(), NetworkStatus::Online);
}

#[test]
fn subscribers_see_latest_status() {
    let monitor = NetworkMonitor::new(NetworkStatus::Online);
    let rx = monitor.subscribe();

    monitor.set(NetworkStatus::Offline);

    assert_eq!(rx.borrow().status, NetworkStatus::Offline);
}

#[test]
fn reconnects_count_offline_to_online_edges() {
    let monitor = NetworkMonitor::new(NetworkStatus::Online);
    let rx = monitor.subscribe();

    monitor.set(NetworkStatus::Offline);
    monitor.set(NetworkStatus::Online);
    monitor.set(NetworkStatus::Online);
    monitor.set(NetworkStatus::Offline);
    monitor.set(NetworkStatus::Online);

    assert_eq!(rx.borrow().reconnects, 2);
    assert_eq!(rx.borrow().status, NetworkStatus::Online);
}

#[tokio::test]
async fn flushes_immediately_when_already_online() {
    let mock = MockTransport::new();
    let queue = queue_with_items(&mock, QueueConfig::default(), 2);
    let monitor = NetworkMonitor::new(NetworkStatus::Online);
    let (tx, mut rx) = mpsc::channel(16);

    let _task = spawn_auto_flush(Arc::clone(&queue), monitor.subscribe(), tx);

    assert_eq!(
        next_event(&mut rx).await,
        SyncEvent::Flushed(FlushReport {
            delivered: 2,
            remaining: 0
        })
    );
    assert!(queue.is_empty());
}

#[tokio::test]
async fn flushes_on_reconnect() {
    let mock = MockTransport::new();
    let queue = queue_with_items(&mock, QueueConfig::default(), 1);
    let monitor = NetworkMonitor::new(NetworkStatus::Offline);
    let (tx, mut rx) = mpsc::channel(16);

    let _task = spawn_auto_flush(Arc::clone(&queue), monitor.subscribe(), tx);
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
    assert!(mock.attempts().is_empty());

    monitor.set(NetworkStatus::Online);

    assert_eq!(
        next_event(&mut rx).await,
        SyncEvent::Flushed(FlushReport {
            delivered: 1,
            remaining: 0
        })
    );
}

#[tokio::test]
async fn reports_lost_items() {
    let mock = MockTransport::new();
    mock.set_offline(true);
    let queue = queue_with_items(&mock, QueueConfig { max_attempts: 1 }, 1);
    let id = queue.items()[0].id.clone();
    let monitor = NetworkMonitor::new(NetworkStatus::Online);
    let (tx, mut rx) = mpsc::channel(16);

    let _task = spawn_auto_flush(queue, monitor.subscribe(), tx);

    match next_event(&mut rx).await {
        SyncEvent::Lost { items, report } => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, id);
            assert_eq!(report.remaining, 0);
        }
        other => unreachable!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn task_stops_when_monitor_dropped() {
    let mock = MockTransport::new();
    let queue = queue_with_items(&mock, QueueConfig::default(), 0);
    let monitor = NetworkMonitor::new(NetworkStatus::Offline);
    let (tx, _rx) = mpsc::channel(16);

    let task = spawn_auto_flush(queue, monitor.subscribe(), tx);
    drop(monitor);

    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn reconnect_during_flush_triggers_another_flush() {
    let mock = MockTransport::gated();
    let queue = queue_with_items(&mock, QueueConfig::default(), 1);
    let monitor = NetworkMonitor::new(NetworkStatus::Online);
    let (tx, mut rx) = mpsc::channel(16);

    let _task = spawn_auto_flush(Arc::clone(&queue), monitor.subscribe(), tx);
    until(|| mock.attempts().len() == 1).await;

    // Drop out and come back while the first flush is still in flight.
    monitor.set(NetworkStatus::Offline);
    queue.enqueue(ItemKind::Action, "/while-offline", Method::Post, None);
    monitor.set(NetworkStatus::Online);
    mock.release(2);

    assert_eq!(
        next_event(&mut rx).await,
        SyncEvent::Flushed(FlushReport {
            delivered: 1,
            remaining: 1
        })
    );
    assert_eq!(
        next_event(&mut rx).await,
        SyncEvent::Flushed(FlushReport {
            delivered: 1,
            remaining: 0
        })
    );
    assert!(queue.is_empty());
}

#[tokio::test]
async fn reconnect_while_offline_again_waits_for_next_one() {
    let mock = MockTransport::gated();
    let queue = queue_with_items(&mock, QueueConfig::default(), 1);
    let monitor = NetworkMonitor::new(NetworkStatus::Online);
    let (tx, mut rx) = mpsc::channel(16);

    let _task = spawn_auto_flush(Arc::clone(&queue), monitor.subscribe(), tx);
    until(|| mock.attempts().len() == 1).await;

    monitor.set(NetworkStatus::Offline);
    queue.enqueue(ItemKind::Action, "/while-offline", Method::Post, None);
    monitor.set(NetworkStatus::Online);
    monitor.set(NetworkStatus::Offline);
    mock.release(2);

    next_event(&mut rx).await;
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
    assert_eq!(mock.attempts().len(), 1);
    assert_eq!(queue.len(), 1);

    monitor.set(NetworkStatus::Online);

    assert_eq!(
        next_event(&mut rx).await,
        SyncEvent::Flushed(FlushReport {
            delivered: 1,
            remaining: 0
        })
    );
}

#[tokio::test]
async fn full_event_channel_does_not_stall_flushes() {
    let mock = MockTransport::new();
    let queue = queue_with_items(&mock, QueueConfig::default(), 0);
    let monitor = NetworkMonitor::new(NetworkStatus::Offline);
    // Never drained: only the first event fits.
    let (tx, _rx) = mpsc::channel(1);

    let _task = spawn_auto_flush(Arc::clone(&queue), monitor.subscribe(), tx);

    for round in 0..3 {
        queue.enqueue(ItemKind::Action, format!("/round/{round}"), Method::Post, None);
        monitor.set(NetworkStatus::Online);
        until(|| queue.is_empty()).await;
        monitor.set(NetworkStatus::Offline);
    }

    assert_eq!(mock.attempts().len(), 3);
}
