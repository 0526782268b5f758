// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qp_core::PollId;

use crate::api::PollApi;
use crate::app::App;
use crate::config::Settings;
use crate::error::Result;

use super::open_app;

pub async fn run(settings: &Settings, poll: PollId) -> Result<()> {
    let mut app = open_app(settings)?;
    println!("{}", run_impl(&mut app, poll).await?);
    Ok(())
}

/// Internal implementation that accepts the app for testing.
pub(crate) async fn run_impl<A: PollApi>(app: &mut App<A>, poll: PollId) -> Result<String> {
    let confirmation = app.delete(poll).await?;
    tracing::info!(%poll, "poll deleted");
    Ok(format!("{} (#{})", confirmation.detail, poll))
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
