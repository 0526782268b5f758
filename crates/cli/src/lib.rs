// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qprs - the QuickPoll client library.
//!
//! This crate provides everything behind the `quickpoll` CLI: a REST client
//! for the poll service, a reconnecting push client for live updates, and
//! the [`App`] context that reconciles both into one poll store.
//!
//! # Main Components
//!
//! - [`App`] - Store, session marks, REST and push wired together
//! - [`api`] - The [`PollApi`] trait and its HTTP implementation
//! - [`sync`] - Push channel transport and [`PushClient`]
//! - [`Settings`] - Layered configuration (defaults, file, env, flags)
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use qprs::{App, HttpPollApi, PushClient, Settings};
//!
//! let settings = Settings::resolve(&Default::default())?;
//! let api = HttpPollApi::new(settings.api_url.clone(), settings.request_timeout())?;
//! let mut app = App::new(api).with_push(PushClient::connect(settings.push_config()));
//! app.load().await?;
//! while let Some(applied) = app.next_event().await {
//!     // re-render app.view(SortKey::Newest)
//! }
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
pub mod logging;

pub mod api;
pub mod app;
pub mod config;
pub mod env;
pub mod error;
pub mod sync;

pub use api::{HttpPollApi, PollApi};
pub use app::App;
pub use cli::{Cli, Command, GlobalArgs, OutputFormat, SortArgs, SortBy};
pub use config::Settings;
pub use error::{Error, Result};
pub use sync::PushClient;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    if let Command::Completion { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "quickpoll", &mut std::io::stdout());
        return Ok(());
    }

    let settings = Settings::resolve(&cli.global.overrides())?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(&settings, cli.command))
}

async fn dispatch(settings: &Settings, command: Command) -> Result<()> {
    match command {
        Command::List { sort, output } => {
            commands::list::run(settings, sort.sort.into(), output).await
        }
        Command::Watch { sort } => commands::watch::run(settings, sort.sort.into()).await,
        Command::Create {
            question,
            options,
            output,
        } => commands::create::run(settings, &question, &options, output).await,
        Command::Vote { poll, option } => commands::vote::vote(settings, poll, option).await,
        Command::Unvote { poll, option } => commands::vote::unvote(settings, poll, option).await,
        Command::Like { poll } => commands::like::like(settings, poll).await,
        Command::Unlike { poll } => commands::like::unlike(settings, poll).await,
        Command::Delete { poll } => commands::delete::run(settings, poll).await,
        Command::Config => commands::config::run(settings),
        Command::Completion { .. } => Ok(()),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
