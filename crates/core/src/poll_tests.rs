// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn poll_with_votes(votes: &[u64]) -> Poll {
    Poll {
        id: PollId(1),
        question: "Tabs or spaces?".to_string(),
        likes: 0,
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

#[test]
fn poll_decodes_server_shape() {
    let json = r#"{
        "id": 4,
        "question": "Lunch?",
        "likes": 2,
        "options": [
            {"id": 10, "text": "Pizza", "votes": 3},
            {"id": 11, "text": "Salad", "votes": 5}
        ]
    }"#;
    let poll: Poll = serde_json::from_str(json).unwrap();
    assert_eq!(poll.id, PollId(4));
    assert_eq!(poll.likes, 2);
    assert_eq!(poll.options.len(), 2);
    assert_eq!(poll.options[1].id, OptionId(11));
    assert!(poll.created_at.is_none());
}

#[test]
fn poll_decodes_optional_timestamps() {
    let json = r#"{"id":1,"question":"q","likes":0,"options":[],
        "created_at":"2025-01-02T03:04:05Z","updated_at":"2025-01-02T03:04:06Z"}"#;
    let poll: Poll = serde_json::from_str(json).unwrap();
    assert!(poll.created_at.is_some());
    assert!(poll.updated_at.unwrap() > poll.created_at.unwrap());
}

#[test]
fn poll_missing_options_defaults_to_empty() {
    let poll: Poll = serde_json::from_str(r#"{"id":1,"question":"q","likes":0}"#).unwrap();
    assert!(poll.options.is_empty());
}

#[parameterized(
    negative_likes = { r#"{"id":1,"question":"q","likes":-1,"options":[]}"# },
    negative_votes = { r#"{"id":1,"question":"q","likes":0,"options":[{"id":1,"text":"a","votes":-2}]}"# },
    string_id = { r#"{"id":"one","question":"q","likes":0,"options":[]}"# },
    missing_question = { r#"{"id":1,"likes":0,"options":[]}"# },
)]
fn poll_rejects_invalid_json(json: &str) {
    assert!(serde_json::from_str::<Poll>(json).is_err());
}

#[test]
fn poll_serializes_without_absent_timestamps() {
    let json = serde_json::to_string(&poll_with_votes(&[1])).unwrap();
    assert!(!json.contains("created_at"));
    assert!(json.contains(r#""id":1"#));
}

#[parameterized(
    empty = { &[], 0 },
    zero = { &[0, 0], 0 },
    mixed = { &[3, 5], 8 },
    single = { &[7], 7 },
    saturated = { &[u64::MAX, 1], u64::MAX },
)]
fn total_votes_sums_options(votes: &[u64], expected: u64) {
    assert_eq!(poll_with_votes(votes).total_votes(), expected);
}

#[test]
fn percentage_rounds_to_whole_percent() {
    let poll = poll_with_votes(&[1, 2]);
    assert_eq!(poll.percentage(&poll.options[0]), 33);
    assert_eq!(poll.percentage(&poll.options[1]), 67);
}

#[test]
fn percentage_is_zero_without_votes() {
    let poll = poll_with_votes(&[0, 0]);
    assert_eq!(poll.percentage(&poll.options[0]), 0);
}

#[parameterized(
    halves = { &[u64::MAX / 2, u64::MAX / 2], &[50, 50] },
    saturated = { &[u64::MAX, u64::MAX], &[100, 100] },
    lopsided = { &[u64::MAX, 1], &[100, 0] },
)]
fn percentage_handles_huge_counts(votes: &[u64], expected: &[u64]) {
    let poll = poll_with_votes(votes);
    let shares: Vec<u64> = poll.options.iter().map(|o| poll.percentage(o)).collect();
    assert_eq!(shares, expected);
}

#[test]
fn leading_votes_ignores_unvoted_polls() {
    assert_eq!(poll_with_votes(&[0, 0]).leading_votes(), None);
    assert_eq!(poll_with_votes(&[2, 4, 4]).leading_votes(), Some(4));
}

#[test]
fn require_option_reports_unknown_option() {
    let poll = poll_with_votes(&[0, 0]);
    assert!(poll.require_option(OptionId(2)).is_ok());
    let err = poll.require_option(OptionId(9)).unwrap_err();
    assert!(matches!(err, Error::UnknownOption { option: OptionId(9), .. }));
}

#[test]
fn validate_rejects_duplicate_option_ids() {
    let mut poll = poll_with_votes(&[0, 0]);
    assert!(poll.validate().is_ok());
    poll.options[1].id = poll.options[0].id;
    assert!(matches!(poll.validate(), Err(Error::DuplicateOption { .. })));
}

#[parameterized(
    plain = { "42", 42 },
    padded = { " 7 ", 7 },
    zero = { "0", 0 },
)]
fn poll_id_parses(input: &str, expected: u64) {
    assert_eq!(input.parse::<PollId>().unwrap(), PollId(expected));
}

#[parameterized(
    word = { "abc" },
    negative = { "-1" },
    empty = { "" },
)]
fn option_id_parse_errors(input: &str) {
    assert!(matches!(input.parse::<OptionId>(), Err(Error::InvalidId(_))));
}

#[test]
fn poll_create_trims_and_drops_blank_options() {
    let create = PollCreate::new("  Best editor? ", ["vim", "  ", " emacs ", ""]).unwrap();
    assert_eq!(create.question, "Best editor?");
    let texts: Vec<&str> = create.options.iter().map(|o| o.text.as_str()).collect();
    assert_eq!(texts, vec!["vim", "emacs"]);
}

#[test]
fn poll_create_requires_question() {
    let err = PollCreate::new("   ", ["a", "b"]).unwrap_err();
    assert!(matches!(err, Error::EmptyQuestion));
}

#[test]
fn poll_create_requires_two_options_after_trimming() {
    let err = PollCreate::new("q", ["a", " "]).unwrap_err();
    assert!(matches!(err, Error::TooFewOptions(1)));
}

#[test]
fn poll_create_accepts_more_than_front_end_cap() {
    let texts: Vec<String> = (0..MAX_OPTIONS + 2).map(|i| format!("o{i}")).collect();
    let create = PollCreate::new("q", &texts).unwrap();
    assert_eq!(create.options.len(), MAX_OPTIONS + 2);
}

#[test]
fn poll_create_serializes_request_body() {
    let create = PollCreate::new("q", ["a", "b"]).unwrap();
    let value = serde_json::to_value(&create).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"question": "q", "options": [{"text": "a"}, {"text": "b"}]})
    );
}
