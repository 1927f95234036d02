// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let literal = fg(colors::codes::LITERAL);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_pharmacies}
  {distance}  Distance between two points
  {nearby}    Verified pharmacies near a location

{header_offline}
  {queue}     Inspect and replay the offline queue
  {watch}     Flush the queue whenever the backend is reachable

{header_setup}
  {config}    Show configuration",
        header_pharmacies = colors::header("Pharmacies:"),
        header_offline = colors::header("Offline Queue:"),
        header_setup = colors::header("Setup:"),
        distance = colors::literal("distance"),
        nearby = colors::literal("nearby"),
        queue = colors::literal("queue"),
        watch = colors::literal("watch"),
        config = colors::literal("config"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  dawaee nearby --lat 24.71 --lon 46.67 --file <pharmacies.json>   Find pharmacies
  dawaee queue add upload POST /api/prescriptions                  Queue an upload
  dawaee queue flush                                               Replay queued actions",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
