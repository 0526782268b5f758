// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qp_core::{PollCreate, MAX_OPTIONS};

use crate::api::PollApi;
use crate::app::App;
use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Settings;
use crate::display::format_poll;
use crate::error::{Error, Result};

use super::{open_app, to_json};

pub async fn run(
    settings: &Settings,
    question: &str,
    options: &[String],
    output: OutputFormat,
) -> Result<()> {
    let request = build_request(question, options)?;
    let mut app = open_app(settings)?;
    let text = run_impl(&mut app, &request, output, colors::should_colorize()).await?;
    println!("{}", text);
    Ok(())
}

/// Validates user input into a create request.
///
/// Blank options are dropped before counting.
pub(crate) fn build_request(question: &str, options: &[String]) -> Result<PollCreate> {
    let request = PollCreate::new(question, options)?;
    if request.options.len() > MAX_OPTIONS {
        return Err(Error::TooManyOptions {
            actual: request.options.len(),
            max: MAX_OPTIONS,
        });
    }
    Ok(request)
}

/// Internal implementation that accepts the app for testing.
pub(crate) async fn run_impl<A: PollApi>(
    app: &mut App<A>,
    request: &PollCreate,
    output: OutputFormat,
    color: bool,
) -> Result<String> {
    let poll = app.create(request).await?;
    tracing::info!(poll = %poll.id, "poll created");
    match output {
        OutputFormat::Text => {
            let mut lines = vec![format!("Created poll {}", poll.id)];
            lines.extend(format_poll(&poll, app.session().mark(poll.id), color));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => to_json(&poll),
    }
}

#[cfg(test)]
#[path = "create_tests.rs"]
mod tests;
