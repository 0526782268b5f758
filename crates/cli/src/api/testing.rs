// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles for the poll service.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use qp_core::{OptionId, Poll, PollCreate, PollId, PollOption};
use reqwest::StatusCode;

use super::{ApiError, ApiFuture, DeleteConfirmation, PollApi, Route};

/// In-memory stand-in for the poll service.
///
/// Applies each call to its own poll list, the way the server does, and
/// records the calls it received.
#[derive(Default)]
pub(crate) struct MockApi {
    polls: Mutex<Vec<Poll>>,
    calls: Mutex<Vec<String>>,
    fail_next: Mutex<Option<ApiError>>,
}

impl MockApi {
    pub(crate) fn with_polls(polls: Vec<Poll>) -> Self {
        MockApi {
            polls: Mutex::new(polls),
            ..MockApi::default()
        }
    }

    pub(crate) fn fail_next(&self, err: ApiError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn respond<T: Send + 'static>(
        &self,
        route: Route,
        f: impl FnOnce(&mut Vec<Poll>) -> Result<T, ApiError>,
    ) -> ApiFuture<'_, T> {
        self.calls.lock().unwrap().push(route.to_string());
        let result = match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => f(&mut self.polls.lock().unwrap()),
        };
        Box::pin(async move { result })
    }

    fn update(
        &self,
        route: Route,
        poll: PollId,
        f: impl FnOnce(&mut Poll) -> Result<(), ApiError>,
    ) -> ApiFuture<'_, Poll> {
        self.respond(route, move |polls| {
            let p = polls
                .iter_mut()
                .find(|p| p.id == poll)
                .ok_or_else(|| not_found("Poll not found"))?;
            f(p)?;
            Ok(p.clone())
        })
    }
}

pub(crate) fn not_found(detail: &str) -> ApiError {
    ApiError::Status {
        status: StatusCode::NOT_FOUND,
        detail: Some(detail.to_string()),
    }
}

fn option_mut(poll: &mut Poll, option: OptionId) -> Result<&mut PollOption, ApiError> {
    poll.options
        .iter_mut()
        .find(|o| o.id == option)
        .ok_or_else(|| not_found("Option not found in this poll"))
}

impl PollApi for MockApi {
    fn list_polls(&self) -> ApiFuture<'_, Vec<Poll>> {
        self.respond(Route::List, |polls| Ok(polls.clone()))
    }

    fn create_poll<'a>(&'a self, request: &'a PollCreate) -> ApiFuture<'a, Poll> {
        self.respond(Route::Create, |polls| {
            let id = polls.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
            let poll = Poll {
                id: PollId(id),
                question: request.question.clone(),
                likes: 0,
                options: request
                    .options
                    .iter()
                    .enumerate()
                    .map(|(i, o)| PollOption {
                        id: OptionId(id * 100 + i as u64),
                        text: o.text.clone(),
                        votes: 0,
                    })
                    .collect(),
                created_at: None,
                updated_at: None,
            };
            polls.push(poll.clone());
            Ok(poll)
        })
    }

    fn vote(&self, poll: PollId, option: OptionId) -> ApiFuture<'_, Poll> {
        self.update(Route::Vote(poll, option), poll, |p| {
            option_mut(p, option)?.votes += 1;
            Ok(())
        })
    }

    fn unvote(&self, poll: PollId, option: OptionId) -> ApiFuture<'_, Poll> {
        self.update(Route::Unvote(poll, option), poll, |p| {
            let o = option_mut(p, option)?;
            o.votes = o.votes.saturating_sub(1);
            Ok(())
        })
    }

    fn like(&self, poll: PollId) -> ApiFuture<'_, Poll> {
        self.update(Route::Like(poll), poll, |p| {
            p.likes += 1;
            Ok(())
        })
    }

    fn unlike(&self, poll: PollId) -> ApiFuture<'_, Poll> {
        self.update(Route::Unlike(poll), poll, |p| {
            p.likes = p.likes.saturating_sub(1);
            Ok(())
        })
    }

    fn delete_poll(&self, poll: PollId) -> ApiFuture<'_, DeleteConfirmation> {
        self.respond(Route::Delete(poll), |polls| {
            let index = polls
                .iter()
                .position(|p| p.id == poll)
                .ok_or_else(|| not_found("Poll not found"))?;
            polls.remove(index);
            Ok(DeleteConfirmation {
                detail: "Poll deleted".to_string(),
            })
        })
    }
}

/// A poll with `votes.len()` options numbered from 1.
pub(crate) fn poll(id: u64, likes: u64, votes: &[u64]) -> Poll {
    Poll {
        id: PollId(id),
        question: format!("question {id}"),
        likes,
        options: votes
            .iter()
            .enumerate()
            .map(|(i, &v)| PollOption {
                id: OptionId(i as u64 + 1),
                text: format!("option {}", i + 1),
                votes: v,
            })
            .collect(),
        created_at: None,
        updated_at: None,
    }
}
