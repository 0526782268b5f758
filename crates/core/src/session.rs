// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-session record of this client's own actions.
//!
//! These flags are a display affordance ("you already voted here"), not server
//! truth. They live apart from the poll store, are never persisted or merged,
//! and start empty on every run.

use std::collections::HashMap;

use crate::poll::{OptionId, PollId};

/// What this session has done to one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionMark {
    /// Option this session voted for, if any.
    pub voted: Option<OptionId>,
    /// Whether this session liked the poll.
    pub liked: bool,
}

impl SessionMark {
    fn is_empty(&self) -> bool {
        self.voted.is_none() && !self.liked
    }
}

/// Ephemeral map of session marks keyed by poll id.
#[derive(Debug, Default)]
pub struct SessionFlags {
    marks: HashMap<PollId, SessionMark>,
}

impl SessionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark for a poll; untouched polls report the empty mark.
    pub fn mark(&self, poll: PollId) -> SessionMark {
        self.marks.get(&poll).copied().unwrap_or_default()
    }

    /// Returns true unless this session already voted on the poll.
    pub fn can_vote(&self, poll: PollId) -> bool {
        self.voted_for(poll).is_none()
    }

    /// Returns the option this session voted for.
    pub fn voted_for(&self, poll: PollId) -> Option<OptionId> {
        self.marks.get(&poll).and_then(|m| m.voted)
    }

    pub fn mark_voted(&mut self, poll: PollId, option: OptionId) {
        self.marks.entry(poll).or_default().voted = Some(option);
    }

    /// Clears the vote mark, returning the option it held.
    pub fn clear_vote(&mut self, poll: PollId) -> Option<OptionId> {
        let mark = self.marks.get_mut(&poll)?;
        let voted = mark.voted.take();
        if mark.is_empty() {
            self.marks.remove(&poll);
        }
        voted
    }

    pub fn is_liked(&self, poll: PollId) -> bool {
        self.marks.get(&poll).is_some_and(|m| m.liked)
    }

    pub fn set_liked(&mut self, poll: PollId, liked: bool) {
        if liked {
            self.marks.entry(poll).or_default().liked = true;
        } else if let Some(mark) = self.marks.get_mut(&poll) {
            mark.liked = false;
            if mark.is_empty() {
                self.marks.remove(&poll);
            }
        }
    }

    /// Drops every mark for a poll, e.g. once it has been deleted.
    pub fn forget(&mut self, poll: PollId) {
        self.marks.remove(&poll);
    }

    /// Number of polls with a non-empty mark.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
