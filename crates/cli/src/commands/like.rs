// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qp_core::PollId;

use crate::api::PollApi;
use crate::app::App;
use crate::config::Settings;
use crate::display::format_poll_line;
use crate::error::Result;

use super::open_app;

pub async fn like(settings: &Settings, poll: PollId) -> Result<()> {
    let mut app = open_app(settings)?;
    println!("{}", like_impl(&mut app, poll).await?);
    Ok(())
}

pub async fn unlike(settings: &Settings, poll: PollId) -> Result<()> {
    let mut app = open_app(settings)?;
    println!("{}", unlike_impl(&mut app, poll).await?);
    Ok(())
}

pub(crate) async fn like_impl<A: PollApi>(app: &mut App<A>, poll: PollId) -> Result<String> {
    let updated = app.like(poll).await?;
    Ok(format!("Liked {}", format_poll_line(&updated)))
}

pub(crate) async fn unlike_impl<A: PollApi>(app: &mut App<A>, poll: PollId) -> Result<String> {
    let updated = app.unlike(poll).await?;
    Ok(format!("Unliked {}", format_poll_line(&updated)))
}

#[cfg(test)]
#[path = "like_tests.rs"]
mod tests;
