// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qp-core: Shared library for the quickpoll client
//!
//! This crate provides the poll data model, the push event union, and the
//! in-memory store that reconciles REST snapshots with pushed events. It does
//! no I/O; the `quickpoll` crate drives it from the network.

pub mod error;
pub mod event;
pub mod poll;
pub mod revision;
pub mod session;
pub mod store;

pub use error::{Error, Result};
pub use event::{Event, EventKind};
pub use poll::{
    OptionCreate, OptionId, Poll, PollCreate, PollId, PollOption, MAX_OPTIONS, MIN_OPTIONS,
};
pub use revision::{Revision, RevisionClock};
pub use session::{SessionFlags, SessionMark};
pub use store::{Applied, PollStore, Previous, SortKey, Source, Upsert};
