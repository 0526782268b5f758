// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qp_core::{OptionId, Poll, PollId};

use crate::api::PollApi;
use crate::app::App;
use crate::config::Settings;
use crate::display::format_option_result;
use crate::error::Result;

use super::open_app;

pub async fn vote(settings: &Settings, poll: PollId, option: OptionId) -> Result<()> {
    let mut app = open_app(settings)?;
    println!("{}", vote_impl(&mut app, poll, option).await?);
    Ok(())
}

pub async fn unvote(settings: &Settings, poll: PollId, option: OptionId) -> Result<()> {
    let mut app = open_app(settings)?;
    println!("{}", unvote_impl(&mut app, poll, option).await?);
    Ok(())
}

pub(crate) async fn vote_impl<A: PollApi>(
    app: &mut App<A>,
    poll: PollId,
    option: OptionId,
) -> Result<String> {
    let updated = app.vote(poll, option).await?;
    Ok(format!("Voted for {}", result_line(&updated, option)?))
}

pub(crate) async fn unvote_impl<A: PollApi>(
    app: &mut App<A>,
    poll: PollId,
    option: OptionId,
) -> Result<String> {
    let updated = app.unvote(poll, option).await?;
    Ok(format!("Removed vote for {}", result_line(&updated, option)?))
}

fn result_line(poll: &Poll, option: OptionId) -> Result<String> {
    let chosen = poll.require_option(option)?;
    Ok(format_option_result(poll, chosen))
}

#[cfg(test)]
#[path = "vote_tests.rs"]
mod tests;
