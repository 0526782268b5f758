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

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

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
///
/// Pairs that differ only by an "un" prefix are shown together using the
/// `[un]` convention (`[un]vote` covers both `vote` and `unvote`).
pub fn commands() -> String {
    format!(
        "\
{header_polls}
  {list}        List polls
  {watch}       Follow polls live as they change
  {create}      Create a poll
  {un_vote}    Vote for an option, or take the vote back
  {un_like}    Like a poll, or take the like back
  {delete}      Delete a poll

{header_setup}
  {config}      Show resolved configuration
  {completion}  Generate shell completions
",
        header_polls = colors::header("Polls:"),
        header_setup = colors::header("Setup:"),
        list = colors::literal("list"),
        watch = colors::literal("watch"),
        create = colors::literal("create"),
        un_vote = un_literal("vote"),
        un_like = un_literal("like"),
        delete = colors::literal("delete"),
        config = colors::literal("config"),
        completion = colors::literal("completion"),
    )
}

/// Format a command with `[un]` prefix, e.g., `[un]vote` for vote/unvote.
/// The brackets and "un" are colored as context (dimmer), while the command name
/// is colored as literal (brighter).
fn un_literal(name: &str) -> String {
    format!("{}{}", colors::context("[un]"), colors::literal(name))
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  quickpoll list                       List polls, newest first
  quickpoll create \"Lunch?\" Pizza Salad  Create a poll
  quickpoll vote <poll> <option>       Vote for an option
  quickpoll watch --sort votes         Follow live, most votes first",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
