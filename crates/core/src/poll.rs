// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Poll data types as they appear on the wire.
//!
//! Field names match the server's JSON exactly. Counters are unsigned, so a
//! negative count from the server fails to decode instead of entering the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Fewest options a poll may be created with.
pub const MIN_OPTIONS: usize = 2;

/// Most options the front end lets a user enter.
pub const MAX_OPTIONS: usize = 5;

/// Server-assigned poll identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollId(pub u64);

/// Server-assigned option identifier, unique within its poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(pub u64);

macro_rules! impl_id {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                s.trim()
                    .parse::<u64>()
                    .map($ty)
                    .map_err(|_| Error::InvalidId(s.to_string()))
            }
        }

        impl From<u64> for $ty {
            fn from(v: u64) -> Self {
                $ty(v)
            }
        }
    };
}

impl_id!(PollId);
impl_id!(OptionId);

/// One selectable answer within a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: OptionId,
    pub text: String,
    pub votes: u64,
}

/// A question with an ordered set of votable options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: PollId,
    pub question: String,
    pub likes: u64,
    #[serde(default)]
    pub options: Vec<PollOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Poll {
    /// Sum of the vote counts of every option, saturating at `u64::MAX`.
    pub fn total_votes(&self) -> u64 {
        self.options
            .iter()
            .fold(0u64, |sum, o| sum.saturating_add(o.votes))
    }

    /// Looks up an option by identifier.
    pub fn option(&self, id: OptionId) -> Option<&PollOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Returns an error unless `id` names one of this poll's options.
    pub fn require_option(&self, id: OptionId) -> Result<&PollOption> {
        self.option(id).ok_or(Error::UnknownOption {
            poll: self.id,
            option: id,
        })
    }

    /// Highest vote count among the options, or `None` when nobody has voted.
    pub fn leading_votes(&self) -> Option<u64> {
        self.options
            .iter()
            .map(|o| o.votes)
            .max()
            .filter(|&max| max > 0)
    }

    /// Share of the total votes held by `option`, rounded to a whole percent.
    ///
    /// A poll with no votes reports 0 for every option. Never exceeds 100.
    pub fn percentage(&self, option: &PollOption) -> u64 {
        let total = u128::from(self.total_votes());
        if total == 0 {
            return 0;
        }
        let share = (u128::from(option.votes) * 100 + total / 2) / total;
        share.min(100) as u64
    }

    /// Checks the invariants that can be verified from a single snapshot.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if !seen.insert(option.id) {
                return Err(Error::DuplicateOption {
                    poll: self.id,
                    option: option.id,
                });
            }
        }
        Ok(())
    }
}

/// Option text for a poll that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCreate {
    pub text: String,
}

/// Request body for creating a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollCreate {
    pub question: String,
    pub options: Vec<OptionCreate>,
}

impl PollCreate {
    /// Builds a create request from raw user input.
    ///
    /// Trims the question and every option, drops blank options, and
    /// requires a non-empty question plus at least [`MIN_OPTIONS`] options.
    pub fn new<I, S>(question: &str, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::EmptyQuestion);
        }

        let options: Vec<OptionCreate> = options
            .into_iter()
            .map(|text| text.as_ref().trim().to_string())
            .filter(|text| !text.is_empty())
            .map(|text| OptionCreate { text })
            .collect();

        if options.len() < MIN_OPTIONS {
            return Err(Error::TooFewOptions(options.len()));
        }

        Ok(PollCreate {
            question: question.to_string(),
            options,
        })
    }
}

#[cfg(test)]
#[path = "poll_tests.rs"]
mod tests;
