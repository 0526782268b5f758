// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory poll collection reconciled from REST responses and push events.
//!
//! Merge rules:
//! - Seed: replaces the whole collection (duplicates in the seed collapse, last wins)
//! - Upsert: an existing entry with the same id is replaced wholesale, otherwise
//!   the poll is inserted at the front
//! - Remove: drops the entry if present, no-op otherwise
//!
//! Writes from REST responses and push events are not ordered against each
//! other. Whichever lands last wins, even if its snapshot is older. Every write
//! is stamped with a [`Revision`] and its [`Source`], and `upsert` reports the
//! entry it replaced, so a cross-source overwrite is visible to the caller.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::event::Event;
use crate::poll::{Poll, PollId};
use crate::revision::{Revision, RevisionClock};

/// Where a write to the store came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Initial fetch of the poll list.
    Seed,
    /// Response to a request this client made.
    Rest,
    /// Push event from the server.
    Event,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Seed => "seed",
            Source::Rest => "rest",
            Source::Event => "event",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The write an upsert replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Previous {
    pub revision: Revision,
    pub source: Source,
}

/// Outcome of [`PollStore::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// No entry had this id; the poll now leads the collection.
    Inserted { revision: Revision },
    /// An entry with this id was replaced.
    Replaced {
        revision: Revision,
        previous: Previous,
    },
}

impl Upsert {
    /// Revision stamped on the written entry.
    pub fn revision(&self) -> Revision {
        match self {
            Upsert::Inserted { revision } | Upsert::Replaced { revision, .. } => *revision,
        }
    }

    /// Returns the replaced write if it came from a different source.
    pub fn crossed_source(&self, source: Source) -> Option<Previous> {
        match self {
            Upsert::Replaced { previous, .. } if previous.source != source => Some(*previous),
            _ => None,
        }
    }
}

/// Outcome of [`PollStore::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A snapshot event was upserted.
    Upserted(Upsert),
    /// A deletion event removed this poll.
    Removed(Poll),
    /// A deletion event named a poll the store does not hold.
    Absent,
}

/// Orderings offered by [`PollStore::view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Identifier descending; server ids grow, so newest polls come first.
    #[default]
    Newest,
    /// Like count descending.
    Popular,
    /// Total votes across all options, descending.
    Votes,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Newest, SortKey::Popular, SortKey::Votes];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
            SortKey::Votes => "votes",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "popular" => Ok(SortKey::Popular),
            "votes" => Ok(SortKey::Votes),
            _ => Err(Error::InvalidSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    poll: Poll,
    revision: Revision,
    source: Source,
}

/// The client's collection of polls for the current view.
///
/// Holds at most one entry per poll id.
#[derive(Debug, Default)]
pub struct PollStore {
    entries: Vec<Entry>,
    clock: RevisionClock,
}

impl PollStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire collection, keeping the given order.
    ///
    /// A poll id repeated in `polls` keeps the position of its first
    /// occurrence and the contents of its last.
    pub fn seed(&mut self, polls: impl IntoIterator<Item = Poll>) {
        self.entries.clear();
        for poll in polls {
            let revision = self.clock.tick();
            let entry = Entry {
                poll,
                revision,
                source: Source::Seed,
            };
            match self.position(entry.poll.id) {
                Some(index) => self.entries[index] = entry,
                None => self.entries.push(entry),
            }
        }
        tracing::debug!(count = self.entries.len(), "store seeded");
    }

    /// Inserts `poll` at the front, or replaces the entry with the same id.
    pub fn upsert(&mut self, poll: Poll, source: Source) -> Upsert {
        let revision = self.clock.tick();
        let id = poll.id;
        let entry = Entry {
            poll,
            revision,
            source,
        };

        match self.position(id) {
            Some(index) => {
                let old = std::mem::replace(&mut self.entries[index], entry);
                let previous = Previous {
                    revision: old.revision,
                    source: old.source,
                };
                if previous.source != source {
                    tracing::debug!(
                        poll = %id,
                        %revision,
                        %source,
                        previous = %previous.revision,
                        previous_source = %previous.source,
                        "poll replaced across sources"
                    );
                }
                Upsert::Replaced { revision, previous }
            }
            None => {
                self.entries.insert(0, entry);
                Upsert::Inserted { revision }
            }
        }
    }

    /// Removes the poll with this id, returning it if it was present.
    pub fn remove(&mut self, id: PollId) -> Option<Poll> {
        let index = self.position(id)?;
        self.clock.tick();
        Some(self.entries.remove(index).poll)
    }

    /// Applies a push event through the same merge path as REST responses.
    pub fn apply(&mut self, event: Event) -> Applied {
        match event {
            Event::PollCreated { poll } | Event::VoteUpdate { poll } | Event::LikeUpdate { poll } => {
                Applied::Upserted(self.upsert(poll, Source::Event))
            }
            Event::PollDeleted { poll_id } => match self.remove(poll_id) {
                Some(poll) => Applied::Removed(poll),
                None => Applied::Absent,
            },
        }
    }

    /// Returns the stored polls ordered by `key`.
    ///
    /// The sort is stable over stored order and leaves the store untouched.
    pub fn view(&self, key: SortKey) -> Vec<&Poll> {
        let mut polls: Vec<&Poll> = self.iter().collect();
        match key {
            SortKey::Newest => polls.sort_by_key(|p| Reverse(p.id)),
            SortKey::Popular => polls.sort_by_key(|p| Reverse(p.likes)),
            SortKey::Votes => polls.sort_by_key(|p| Reverse(p.total_votes())),
        }
        polls
    }

    /// Returns the stored poll with this id.
    pub fn get(&self, id: PollId) -> Option<&Poll> {
        self.entry(id).map(|e| &e.poll)
    }

    /// Returns the revision of the write that produced the stored poll.
    pub fn revision(&self, id: PollId) -> Option<Revision> {
        self.entry(id).map(|e| e.revision)
    }

    /// Returns where the stored poll came from.
    pub fn source(&self, id: PollId) -> Option<Source> {
        self.entry(id).map(|e| e.source)
    }

    /// Returns true if a poll with this id is stored.
    pub fn contains(&self, id: PollId) -> bool {
        self.position(id).is_some()
    }

    /// Iterates polls in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &Poll> {
        self.entries.iter().map(|e| &e.poll)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: PollId) -> Option<usize> {
        self.entries.iter().position(|e| e.poll.id == id)
    }

    fn entry(&self, id: PollId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.poll.id == id)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
