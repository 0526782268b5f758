// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qp_core::SortKey;

use crate::api::PollApi;
use crate::app::App;
use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Settings;
use crate::display::format_polls;
use crate::error::Result;

use super::{open_app, to_json};

pub async fn run(settings: &Settings, sort: SortKey, output: OutputFormat) -> Result<()> {
    let mut app = open_app(settings)?;
    let text = run_impl(&mut app, sort, output, colors::should_colorize()).await?;
    println!("{}", text);
    Ok(())
}

/// Internal implementation that accepts the app for testing.
pub(crate) async fn run_impl<A: PollApi>(
    app: &mut App<A>,
    sort: SortKey,
    output: OutputFormat,
    color: bool,
) -> Result<String> {
    let count = app.load().await?;
    tracing::debug!(count, %sort, "polls loaded");

    let polls = app.view(sort);
    match output {
        OutputFormat::Text => Ok(format_polls(
            polls,
            |p| app.session().mark(p.id),
            color,
        )),
        OutputFormat::Json => to_json(&polls),
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
