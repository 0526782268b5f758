// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common options.

use clap::Args;

use super::SortBy;
use crate::config::Overrides;

/// Options accepted by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Base URL of the poll API [env: API_BASE_URL]
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// URL of the live update channel [env: WS_BASE_URL]
    #[arg(long, global = true, value_name = "URL")]
    pub ws_url: Option<String>,

    /// Log more (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// URL overrides given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_url: self.api_url.clone(),
            ws_url: self.ws_url.clone(),
        }
    }
}

/// Sort order for commands that show a list of polls.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct SortArgs {
    /// Order polls by
    #[arg(long, short, value_enum, default_value_t = SortBy::Newest)]
    pub sort: SortBy,
}
