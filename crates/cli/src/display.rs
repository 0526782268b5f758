// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for polls.

use qp_core::{Poll, PollOption, SessionMark};

use crate::colors;
use crate::sync::ConnectionState;

/// Width of the vote share bar, in cells.
const BAR_WIDTH: usize = 20;

/// Marker placed before the leading option(s).
const LEADING_MARKER: &str = "*";

/// Format the one-line summary of a poll.
pub fn format_poll_line(poll: &Poll) -> String {
    format!(
        "#{} {} ({} {}, {} {})",
        poll.id,
        poll.question,
        poll.likes,
        plural(poll.likes, "like", "likes"),
        poll.total_votes(),
        plural(poll.total_votes(), "vote", "votes"),
    )
}

/// Format a poll with one line per option.
///
/// Output format:
/// ```text
/// #3 Lunch? (2 likes, 8 votes)
///     [1] Pizza  3   38%  ████████············
///   * [2] Salad  5   63%  █████████████·······  (your vote)
/// ```
pub fn format_poll(poll: &Poll, mark: SessionMark, color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(poll.options.len() + 1);

    let mut title = format_poll_line(poll);
    if color {
        title = colors::header(&title);
    }
    if mark.liked {
        title.push_str("  (liked)");
    }
    lines.push(title);

    let lead = poll.leading_votes();
    let text_width = poll
        .options
        .iter()
        .map(|o| o.text.chars().count())
        .max()
        .unwrap_or(0);
    let votes_width = poll
        .options
        .iter()
        .map(|o| o.votes.to_string().len())
        .max()
        .unwrap_or(1);

    for option in &poll.options {
        let is_leading = lead == Some(option.votes);
        let pct = poll.percentage(option);
        let mut line = format!(
            "  {} [{}] {:<tw$}  {:>vw$}  {:>3}%  {}",
            if is_leading { LEADING_MARKER } else { " " },
            option.id,
            option.text,
            option.votes,
            pct,
            bar(pct),
            tw = text_width,
            vw = votes_width,
        );
        if color && is_leading {
            line = colors::leading(&line);
        }
        if mark.voted == Some(option.id) {
            line.push_str("  (your vote)");
        }
        lines.push(line);
    }

    lines
}

/// Format a sequence of polls separated by blank lines.
pub fn format_polls<'a>(
    polls: impl IntoIterator<Item = &'a Poll>,
    mark: impl Fn(&Poll) -> SessionMark,
    color: bool,
) -> String {
    let blocks: Vec<String> = polls
        .into_iter()
        .map(|p| format_poll(p, mark(p), color).join("\n"))
        .collect();
    if blocks.is_empty() {
        "No polls yet.".to_string()
    } else {
        blocks.join("\n\n")
    }
}

/// Format the single option a vote went to, e.g. for command output.
pub fn format_option_result(poll: &Poll, option: &PollOption) -> String {
    format!(
        "{} in #{}: {} {} ({}%)",
        option.text,
        poll.id,
        option.votes,
        plural(option.votes, "vote", "votes"),
        poll.percentage(option)
    )
}

/// Describe the push connection for the watch status line.
pub fn format_connection(state: ConnectionState) -> String {
    match state {
        ConnectionState::Connecting => "connecting".to_string(),
        ConnectionState::Connected => "live".to_string(),
        ConnectionState::Reconnecting { attempt } => format!("reconnecting (attempt {})", attempt),
        ConnectionState::Disconnected => "offline".to_string(),
    }
}

/// Vote share bar for a whole percentage.
pub fn bar(pct: u64) -> String {
    let filled = (pct.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "·".repeat(BAR_WIDTH - filled))
}

fn plural(n: u64, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
