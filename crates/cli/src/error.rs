// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::api::ApiError;

/// All possible errors that can occur in the qprs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    /// A user action did not take effect. Nothing was changed locally.
    #[error("could not {action}: {reason}")]
    Action {
        action: &'static str,
        reason: String,
    },

    #[error("too many options ({actual}, max {max})")]
    TooManyOptions { actual: usize, max: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid {field} '{url}'\n  hint: {field} must start with {expected}")]
    InvalidUrl {
        field: &'static str,
        url: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Core(#[from] qp_core::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wraps a failed REST call as a user-facing action failure.
    ///
    /// The server's `detail` message is preferred over the raw status line.
    pub fn action(action: &'static str, err: &ApiError) -> Self {
        let reason = match err.detail() {
            Some(detail) => detail.to_string(),
            None => err.to_string(),
        };
        Error::Action { action, reason }
    }

    /// A refusal decided locally, before any request was made.
    pub fn refused(action: &'static str, reason: impl Into<String>) -> Self {
        Error::Action {
            action,
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for qprs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
