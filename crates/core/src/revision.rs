// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local write revisions for store entries.
//!
//! The server sends no version or timestamp with a snapshot, so the store
//! cannot tell a stale snapshot from a fresh one. Instead every write to the
//! store is stamped with a revision drawn from one monotonic counter. The
//! revision orders writes as they *landed*, which is what last-writer-wins
//! resolves on, and lets callers see exactly which write replaced which.
//!
//! Format: `r{n}`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a write in the store's local history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Revision(u64);

impl Revision {
    /// Returns the raw counter value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Produces strictly increasing revisions.
#[derive(Debug, Default)]
pub struct RevisionClock {
    last: u64,
}

impl RevisionClock {
    /// Creates a clock whose first tick is `r1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a revision greater than every revision returned before.
    pub fn tick(&mut self) -> Revision {
        self.last = self.last.saturating_add(1);
        Revision(self.last)
    }
}

#[cfg(test)]
#[path = "revision_tests.rs"]
mod tests;
