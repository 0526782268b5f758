// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST endpoints of the poll service, relative to the configured base URL.

use std::fmt;

use qp_core::{OptionId, PollId};
use reqwest::Method;

/// One endpoint of the poll service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /`
    List,
    /// `POST /`
    Create,
    /// `POST /{poll}/vote/{option}`
    Vote(PollId, OptionId),
    /// `DELETE /{poll}/vote/{option}`
    Unvote(PollId, OptionId),
    /// `POST /{poll}/like`
    Like(PollId),
    /// `DELETE /{poll}/like`
    Unlike(PollId),
    /// `DELETE /{poll}`
    Delete(PollId),
}

impl Route {
    pub fn method(&self) -> Method {
        match self {
            Route::List => Method::GET,
            Route::Create | Route::Vote(..) | Route::Like(_) => Method::POST,
            Route::Unvote(..) | Route::Unlike(_) | Route::Delete(_) => Method::DELETE,
        }
    }

    /// Path below the base URL, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Route::List | Route::Create => "/".to_string(),
            Route::Vote(poll, option) | Route::Unvote(poll, option) => {
                format!("/{}/vote/{}", poll, option)
            }
            Route::Like(poll) | Route::Unlike(poll) => format!("/{}/like", poll),
            Route::Delete(poll) => format!("/{}", poll),
        }
    }

    /// Full URL of this route under `base`. Trailing slashes on `base` are ignored.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Short action name used in logs and error messages.
    pub fn action(&self) -> &'static str {
        match self {
            Route::List => "load polls",
            Route::Create => "create poll",
            Route::Vote(..) => "vote",
            Route::Unvote(..) => "remove vote",
            Route::Like(_) => "like",
            Route::Unlike(_) => "unlike",
            Route::Delete(_) => "delete poll",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;
