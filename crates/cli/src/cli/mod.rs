// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use qp_core::{OptionId, PollId};

pub use args::{GlobalArgs, SortArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Poll orderings accepted on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    /// Newest polls first
    #[default]
    Newest,
    /// Most liked first
    Popular,
    /// Most votes first
    Votes,
}

impl From<SortBy> for qp_core::SortKey {
    fn from(sort: SortBy) -> Self {
        match sort {
            SortBy::Newest => qp_core::SortKey::Newest,
            SortBy::Popular => qp_core::SortKey::Popular,
            SortBy::Votes => qp_core::SortKey::Votes,
        }
    }
}

#[derive(Parser)]
#[command(name = "quickpoll")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Create, vote on, and follow polls in real time")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Print version
    #[arg(short = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List polls
    #[command(after_help = colors::examples("\
Examples:
  quickpoll list                  Newest polls first
  quickpoll list --sort popular   Most liked first
  quickpoll list -o json          Output as JSON"))]
    List {
        #[command(flatten)]
        sort: SortArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Follow polls live as they change
    #[command(after_help = colors::examples("\
Examples:
  quickpoll watch                 Follow newest polls
  quickpoll watch --sort votes    Keep the most voted on top"))]
    Watch {
        #[command(flatten)]
        sort: SortArgs,
    },

    /// Create a poll
    #[command(after_help = colors::examples("\
Examples:
  quickpoll create \"Lunch?\" Pizza Salad Soup    Poll with three options"))]
    Create {
        /// The question to ask
        #[arg(value_parser = non_empty_string)]
        question: String,

        /// Options to choose from (2 to 5)
        #[arg(required = true, num_args = 1..)]
        options: Vec<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Vote for an option
    Vote {
        /// Poll ID
        poll: PollId,
        /// Option ID
        option: OptionId,
    },

    /// Take back a vote
    Unvote {
        /// Poll ID
        poll: PollId,
        /// Option ID
        option: OptionId,
    },

    /// Like a poll
    Like {
        /// Poll ID
        poll: PollId,
    },

    /// Take back a like
    Unlike {
        /// Poll ID
        poll: PollId,
    },

    /// Delete a poll
    Delete {
        /// Poll ID
        poll: PollId,
    },

    /// Show resolved configuration
    Config,

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  quickpoll completion bash > ~/.local/share/bash-completion/completions/quickpoll"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
