// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Push channel events.
//!
//! The server pushes one JSON object per frame, tagged by its `event` field:
//! - `poll_created`, `vote_update`, `like_update` carry a full poll snapshot
//! - `poll_deleted` carries only the identifier of the removed poll

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::poll::{Poll, PollId};

/// A server-pushed change to the poll collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A poll was created by some client.
    PollCreated { poll: Poll },

    /// Vote counts of a poll changed.
    VoteUpdate { poll: Poll },

    /// Like count of a poll changed.
    LikeUpdate { poll: Poll },

    /// A poll was deleted.
    PollDeleted { poll_id: PollId },
}

/// The tag of an [`Event`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PollCreated,
    VoteUpdate,
    LikeUpdate,
    PollDeleted,
}

impl EventKind {
    /// Returns the wire name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::PollCreated => "poll_created",
            EventKind::VoteUpdate => "vote_update",
            EventKind::LikeUpdate => "like_update",
            EventKind::PollDeleted => "poll_deleted",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Event {
    /// Creates a PollCreated event.
    pub fn poll_created(poll: Poll) -> Self {
        Event::PollCreated { poll }
    }

    /// Creates a VoteUpdate event.
    pub fn vote_update(poll: Poll) -> Self {
        Event::VoteUpdate { poll }
    }

    /// Creates a LikeUpdate event.
    pub fn like_update(poll: Poll) -> Self {
        Event::LikeUpdate { poll }
    }

    /// Creates a PollDeleted event.
    pub fn poll_deleted(poll_id: PollId) -> Self {
        Event::PollDeleted { poll_id }
    }

    /// Returns the tag of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::PollCreated { .. } => EventKind::PollCreated,
            Event::VoteUpdate { .. } => EventKind::VoteUpdate,
            Event::LikeUpdate { .. } => EventKind::LikeUpdate,
            Event::PollDeleted { .. } => EventKind::PollDeleted,
        }
    }

    /// Returns the identifier of the poll this event concerns.
    pub fn poll_id(&self) -> PollId {
        match self {
            Event::PollCreated { poll } | Event::VoteUpdate { poll } | Event::LikeUpdate { poll } => {
                poll.id
            }
            Event::PollDeleted { poll_id } => *poll_id,
        }
    }

    /// Returns the carried snapshot, if this event has one.
    pub fn poll(&self) -> Option<&Poll> {
        match self {
            Event::PollCreated { poll } | Event::VoteUpdate { poll } | Event::LikeUpdate { poll } => {
                Some(poll)
            }
            Event::PollDeleted { .. } => None,
        }
    }

    /// Serializes the event to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an event from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
