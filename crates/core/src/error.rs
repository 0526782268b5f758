// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for qp-core operations.

use thiserror::Error;

use crate::poll::{OptionId, PollId, MIN_OPTIONS};

/// All possible errors that can occur in qp-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("question cannot be empty\n  hint: give the poll a question to ask")]
    EmptyQuestion,

    #[error("a poll needs at least {MIN_OPTIONS} options, got {0}\n  hint: blank options are ignored")]
    TooFewOptions(usize),

    #[error("duplicate option {option} in poll {poll}")]
    DuplicateOption { poll: PollId, option: OptionId },

    #[error("poll {poll} has no option {option}")]
    UnknownOption { poll: PollId, option: OptionId },

    #[error("invalid id: '{0}'\n  hint: ids are non-negative integers")]
    InvalidId(String),

    #[error("invalid sort key: '{0}'\n  hint: valid keys are: newest, popular, votes")]
    InvalidSortKey(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for qp-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
