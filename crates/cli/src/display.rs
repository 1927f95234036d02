// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dw_core::{format_distance_with, Pharmacy, QueueItem, Ranked, UnitLabels};

use crate::colors;
use crate::sync::FlushReport;

/// Width of the distance column in pharmacy listings.
const DISTANCE_WIDTH: usize = 9;

/// Format one ranked pharmacy.
///
/// Output format:
/// ```text
///    1.2 كم  Al Nahdi Pharmacy (open)
///            King Fahd Rd · +966 11 000 0000
/// ```
pub fn format_pharmacy(ranked: &Ranked<'_, Pharmacy>, labels: &UnitLabels) -> Vec<String> {
    let pharmacy = ranked.entity;
    let distance = format_distance_with(ranked.distance_km, labels);
    let padding = DISTANCE_WIDTH.saturating_sub(distance.chars().count());
    let status = if pharmacy.is_open { "open" } else { "closed" };

    let mut lines = vec![format!(
        "{}{}  {} ({})",
        " ".repeat(padding),
        colors::context(&distance),
        pharmacy.name,
        status
    )];

    let details: Vec<&str> = [pharmacy.address.as_deref(), pharmacy.phone.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !details.is_empty() {
        lines.push(format!(
            "{}  {}",
            " ".repeat(DISTANCE_WIDTH),
            details.join(" · ")
        ));
    }
    lines
}

/// Format a queued item as a single line.
///
/// Output format: `1718000000000-a1b2c3d4  upload POST /api/x  (1/3 attempts)`
pub fn format_queue_item(item: &QueueItem, max_attempts: u32) -> String {
    let line = format!(
        "{}  {} {} {}",
        item.id, item.kind, item.method, item.target
    );
    if item.attempts == 0 {
        return line;
    }
    let attempts = format!("({}/{} attempts)", item.attempts, max_attempts);
    format!("{}  {}", line, colors::warning(&attempts))
}

/// One-line summary of a flush.
pub fn format_flush_report(report: &FlushReport) -> String {
    let noun = if report.delivered == 1 {
        "action"
    } else {
        "actions"
    };
    format!(
        "Delivered {} {}, {} remaining",
        report.delivered, noun, report.remaining
    )
}

/// Lines naming actions that were dropped after exhausting their attempts.
pub fn format_lost_items(items: &[QueueItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            format!(
                "{} {} {} {} (queued {})",
                colors::warning("lost:"),
                item.kind,
                item.method,
                item.target,
                item.enqueued_at.format("%Y-%m-%d %H:%M")
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
