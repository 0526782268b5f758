// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and poll output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Section headers, poll questions: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Counts, hints, placeholders: medium grey
    pub const CONTEXT: u8 = 245;
    /// Leading option: soft green
    pub const LEADING: u8 = 114;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (counts, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Apply the leading-option color to text.
pub fn leading(text: &str) -> String {
    paint(codes::LEADING, text)
}

/// Colorize an examples help block.
///
/// Expects format like:
/// ```text
/// Examples:
///   quickpoll vote <poll> <option>    Vote for an option
/// ```
///
/// Lines ending with `:` become headers. On example lines the command (up to
/// the first run of 2+ spaces) is literal, with `<placeholders>` in context
/// color; the description is left alone.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{}{}", indent, header(trimmed)));
        } else if let Some(end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(end);
            lines.push(format!("{}{}{}", indent, colorize_command(cmd), desc));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Colorize a command, showing `<placeholders>` in context color.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.is_empty() {
                String::new()
            } else if word.starts_with('<') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    if line[start..].trim_start().is_empty() {
        None
    } else {
        Some(start)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
