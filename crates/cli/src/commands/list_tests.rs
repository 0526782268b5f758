// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::api::testing::{poll, MockApi};
use crate::api::ApiError;
use qp_core::{Poll, PollId};
use yare::parameterized;

fn app() -> App<MockApi> {
    App::new(MockApi::with_polls(vec![
        poll(1, 5, &[1, 0]),
        poll(2, 0, &[4, 4]),
        poll(3, 1, &[0, 0]),
    ]))
}

fn headers(text: &str) -> Vec<&str> {
    text.lines().filter(|l| l.starts_with('#')).collect()
}

#[parameterized(
    newest = { SortKey::Newest, &["#3", "#2", "#1"] },
    popular = { SortKey::Popular, &["#1", "#3", "#2"] },
    votes = { SortKey::Votes, &["#2", "#1", "#3"] },
)]
fn text_follows_sort_order(sort: SortKey, expected: &[&str]) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let mut app = app();
    let text = rt
        .block_on(run_impl(&mut app, sort, OutputFormat::Text, false))
        .unwrap();
    let order: Vec<&str> = headers(&text)
        .iter()
        .map(|l| l.split(' ').next().unwrap())
        .collect();
    assert_eq!(order, expected);
}

#[tokio::test]
async fn json_is_an_array_of_polls() {
    let mut app = app();
    let text = run_impl(&mut app, SortKey::Newest, OutputFormat::Json, false)
        .await
        .unwrap();
    let polls: Vec<Poll> = serde_json::from_str(&text).unwrap();
    assert_eq!(polls.len(), 3);
    assert_eq!(polls[0].id, PollId(3));
}

#[tokio::test]
async fn empty_server_prints_placeholder() {
    let mut app = App::new(MockApi::default());
    let text = run_impl(&mut app, SortKey::Newest, OutputFormat::Text, false)
        .await
        .unwrap();
    assert_eq!(text, "No polls yet.");
}

#[tokio::test]
async fn server_failure_is_reported() {
    let api = MockApi::default();
    api.fail_next(ApiError::Request("connection refused".to_string()));
    let mut app = App::new(api);

    let err = run_impl(&mut app, SortKey::Newest, OutputFormat::Text, false)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not load polls: connection refused"
    );
}
