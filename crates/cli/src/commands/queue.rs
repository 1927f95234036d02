// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use dw_core::{ItemKind, Method, QueueItem};

use crate::cli::{OutputFormat, QueueCommand};
use crate::config::Config;
use crate::display::{format_flush_report, format_lost_items, format_queue_item};
use crate::error::{Error, Result};
use crate::sync::{FlushReport, OfflineQueue, QueueError, Submitted, Transport};

use super::{block_on, open_queue, print_json};

/// Execute a queue subcommand.
pub fn run(cmd: QueueCommand, config: &Config) -> Result<()> {
    let queue = open_queue(config)?;
    match cmd {
        QueueCommand::Add {
            kind,
            method,
            target,
            payload,
            submit,
            output,
        } => {
            let request = AddRequest::parse(&kind, &method, target, payload.as_deref())?;
            let outcome = block_on(add(&queue, request, submit))??;
            print_outcome(&outcome, output)
        }
        QueueCommand::List { output } => list(&queue, output),
        QueueCommand::Size => {
            println!("{}", queue.len());
            Ok(())
        }
        QueueCommand::Clear => {
            let dropped = queue.len();
            queue.clear();
            println!("Cleared {} queued action(s)", dropped);
            Ok(())
        }
        QueueCommand::Flush { output } => block_on(flush(&queue, output))?,
    }
}

/// A validated `queue add` request.
#[derive(Debug)]
pub(crate) struct AddRequest {
    pub kind: ItemKind,
    pub method: Method,
    pub target: String,
    pub payload: Option<serde_json::Value>,
}

impl AddRequest {
    pub(crate) fn parse(
        kind: &str,
        method: &str,
        target: String,
        payload: Option<&str>,
    ) -> Result<Self> {
        let payload = payload
            .map(|p| serde_json::from_str(p).map_err(|e| Error::InvalidPayload(e.to_string())))
            .transpose()?;
        Ok(AddRequest {
            kind: kind.parse()?,
            method: method.parse()?,
            target,
            payload,
        })
    }
}

/// Queue the action, or with `submit` try to deliver it first.
pub(crate) async fn add<T: Transport>(
    queue: &OfflineQueue<T>,
    request: AddRequest,
    submit: bool,
) -> Result<Submitted> {
    let AddRequest {
        kind,
        method,
        target,
        payload,
    } = request;

    if !submit {
        return Ok(Submitted::Queued(
            queue.enqueue(kind, target, method, payload),
        ));
    }
    let online = queue.transport().probe().await;
    Ok(queue.submit(kind, target, method, payload, online).await?)
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum OutcomeJson<'a> {
    Delivered,
    Queued { item: &'a QueueItem },
}

fn print_outcome(outcome: &Submitted, output: OutputFormat) -> Result<()> {
    match (outcome, output) {
        (Submitted::Delivered, OutputFormat::Text) => println!("Delivered"),
        (Submitted::Queued(item), OutputFormat::Text) => println!("Queued {}", item.id),
        (Submitted::Delivered, OutputFormat::Json) => print_json(&OutcomeJson::Delivered)?,
        (Submitted::Queued(item), OutputFormat::Json) => print_json(&OutcomeJson::Queued { item })?,
    }
    Ok(())
}

pub(crate) fn list<T: Transport>(queue: &OfflineQueue<T>, output: OutputFormat) -> Result<()> {
    let items = queue.items();
    match output {
        OutputFormat::Text => {
            if items.is_empty() {
                println!("Offline queue is empty.");
            }
            for item in &items {
                println!("{}", format_queue_item(item, queue.max_attempts()));
            }
        }
        OutputFormat::Json => print_json(&items)?,
    }
    Ok(())
}

/// JSON output for `queue flush`.
#[derive(Debug, Serialize)]
pub(crate) struct FlushJson<'a> {
    #[serde(flatten)]
    pub report: FlushReport,
    pub lost: &'a [QueueItem],
}

/// Flush the queue and print the outcome.
///
/// Items dropped for running out of attempts are listed, then reported as
/// an error so the exit status reflects the loss.
pub(crate) async fn flush<T: Transport>(
    queue: &OfflineQueue<T>,
    output: OutputFormat,
) -> Result<()> {
    let (report, exhausted) = match queue.flush().await {
        Ok(report) => (report, None),
        Err(QueueError::DeliveryExhausted {
            lost,
            max_attempts,
            report,
        }) => (report, Some((lost, max_attempts))),
        Err(e) => return Err(e.into()),
    };
    let lost = exhausted.as_ref().map_or(&[][..], |(lost, _)| lost.as_slice());

    match output {
        OutputFormat::Text => {
            println!("{}", format_flush_report(&report));
            for line in format_lost_items(lost) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => print_json(&FlushJson { report, lost })?,
    }

    match exhausted {
        Some((lost, max_attempts)) => Err(QueueError::DeliveryExhausted {
            lost,
            max_attempts,
            report,
        }
        .into()),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
