// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Application context.
//!
//! [`App`] owns the poll store, the session's own vote/like marks, the REST
//! client, and optionally a push client. Every store mutation goes through
//! it, from one task, so REST responses and push events are applied one at a
//! time in whatever order they complete.

use qp_core::{
    Applied, Event, OptionId, Poll, PollCreate, PollId, PollStore, SessionFlags, SortKey, Source,
};

use crate::api::{DeleteConfirmation, PollApi, Route};
use crate::error::{Error, Result};
use crate::sync::PushClient;

/// Top-level client state.
pub struct App<A: PollApi> {
    api: A,
    store: PollStore,
    session: SessionFlags,
    push: Option<PushClient>,
}

impl<A: PollApi> App<A> {
    /// Creates an app with an empty store and no push channel.
    pub fn new(api: A) -> Self {
        App {
            api,
            store: PollStore::new(),
            session: SessionFlags::new(),
            push: None,
        }
    }

    /// Attaches a push client. Events are applied by [`App::next_event`].
    pub fn with_push(mut self, push: PushClient) -> Self {
        self.push = Some(push);
        self
    }

    pub fn store(&self) -> &PollStore {
        &self.store
    }

    pub fn session(&self) -> &SessionFlags {
        &self.session
    }

    pub fn push_mut(&mut self) -> Option<&mut PushClient> {
        self.push.as_mut()
    }

    /// Seeds the store from the server's poll list.
    pub async fn load(&mut self) -> Result<usize> {
        let polls = self
            .api
            .list_polls()
            .await
            .map_err(|e| Error::action(Route::List.action(), &e))?;
        self.store.seed(polls);
        Ok(self.store.len())
    }

    /// Creates a poll and shows it first.
    pub async fn create(&mut self, request: &PollCreate) -> Result<Poll> {
        let poll = self
            .api
            .create_poll(request)
            .await
            .map_err(|e| Error::action(Route::Create.action(), &e))?;
        Ok(self.accept(poll))
    }

    /// Votes for `option`. Refused without a request if this session has
    /// already voted on the poll, or if the loaded poll has no such option.
    pub async fn vote(&mut self, poll: PollId, option: OptionId) -> Result<Poll> {
        let action = Route::Vote(poll, option).action();
        if !self.session.can_vote(poll) {
            return Err(Error::refused(
                action,
                format!("already voted on poll {} in this session", poll),
            ));
        }
        if let Some(stored) = self.store.get(poll) {
            stored
                .require_option(option)
                .map_err(|e| Error::refused(action, e.to_string()))?;
        }

        let updated = self
            .api
            .vote(poll, option)
            .await
            .map_err(|e| Error::action(action, &e))?;
        let updated = self.accept(updated);
        self.session.mark_voted(poll, option);
        Ok(updated)
    }

    /// Withdraws a vote for `option`.
    pub async fn unvote(&mut self, poll: PollId, option: OptionId) -> Result<Poll> {
        let updated = self
            .api
            .unvote(poll, option)
            .await
            .map_err(|e| Error::action(Route::Unvote(poll, option).action(), &e))?;
        let updated = self.accept(updated);
        self.session.clear_vote(poll);
        Ok(updated)
    }

    pub async fn like(&mut self, poll: PollId) -> Result<Poll> {
        let updated = self
            .api
            .like(poll)
            .await
            .map_err(|e| Error::action(Route::Like(poll).action(), &e))?;
        let updated = self.accept(updated);
        self.session.set_liked(poll, true);
        Ok(updated)
    }

    pub async fn unlike(&mut self, poll: PollId) -> Result<Poll> {
        let updated = self
            .api
            .unlike(poll)
            .await
            .map_err(|e| Error::action(Route::Unlike(poll).action(), &e))?;
        let updated = self.accept(updated);
        self.session.set_liked(poll, false);
        Ok(updated)
    }

    /// Likes the poll, or unlikes it if this session already liked it.
    pub async fn toggle_like(&mut self, poll: PollId) -> Result<Poll> {
        if self.session.is_liked(poll) {
            self.unlike(poll).await
        } else {
            self.like(poll).await
        }
    }

    /// Deletes a poll and drops it from the store.
    pub async fn delete(&mut self, poll: PollId) -> Result<DeleteConfirmation> {
        let confirmation = self
            .api
            .delete_poll(poll)
            .await
            .map_err(|e| Error::action(Route::Delete(poll).action(), &e))?;
        self.store.remove(poll);
        self.session.forget(poll);
        Ok(confirmation)
    }

    /// Applies a push event.
    pub fn handle_event(&mut self, event: Event) -> Applied {
        let kind = event.kind();
        let poll = event.poll_id();
        let applied = self.store.apply(event);
        if let Applied::Removed(_) | Applied::Absent = applied {
            self.session.forget(poll);
        }
        tracing::debug!(event = %kind, %poll, "event applied");
        applied
    }

    /// Waits for the next push event and applies it.
    ///
    /// Returns `None` without a push client or once it has shut down.
    pub async fn next_event(&mut self) -> Option<Applied> {
        let event = self.push.as_mut()?.next_event().await?;
        Some(self.handle_event(event))
    }

    /// Stored polls ordered by `key`.
    pub fn view(&self, key: SortKey) -> Vec<&Poll> {
        self.store.view(key)
    }

    /// Shuts down the push client, if any.
    pub async fn shutdown(mut self) {
        if let Some(push) = self.push.take() {
            push.shutdown().await;
        }
    }

    /// Funnels a REST response into the store.
    fn accept(&mut self, poll: Poll) -> Poll {
        self.store.upsert(poll.clone(), Source::Rest);
        poll
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
