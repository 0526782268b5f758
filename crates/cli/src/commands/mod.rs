// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod create;
pub mod delete;
pub mod like;
pub mod list;
pub mod vote;
pub mod watch;

use serde::Serialize;

use crate::api::HttpPollApi;
use crate::app::App;
use crate::config::Settings;
use crate::error::Result;

/// Helper to build the app from resolved settings.
pub fn open_app(settings: &Settings) -> Result<App<HttpPollApi>> {
    let api = HttpPollApi::new(settings.api_url.clone(), settings.request_timeout())?;
    Ok(App::new(api))
}

/// Pretty JSON for `-o json` output.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
