// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A `quickpoll` command isolated from the caller's environment.
///
/// Points `QUICKPOLL_CONFIG` at an empty file inside `temp` so a config in
/// the user's home directory cannot leak into the test.
pub fn quickpoll(temp: &TempDir) -> Command {
    let config = temp.path().join("config.toml");
    if !config.exists() {
        std::fs::write(&config, "").unwrap();
    }
    let mut cmd = cargo_bin_cmd!("quickpoll");
    cmd.env("QUICKPOLL_CONFIG", &config)
        .env("NO_COLOR", "1")
        .env_remove("API_BASE_URL")
        .env_remove("WS_BASE_URL")
        .env_remove("QUICKPOLL_LOG")
        .env_remove("COLOR");
    cmd
}

/// A request seen by [`serve_once`].
#[derive(Debug)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Serves one canned HTTP response on a random port.
///
/// Returns the API base URL and a handle yielding the request received.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<Request>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/api/polls", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or_default().to_string();
        let path = parts.next().unwrap_or_default().to_string();

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut body = vec![0; content_length];
        reader.read_exact(&mut body).unwrap();

        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        Request {
            method,
            path,
            body: String::from_utf8(body).unwrap(),
        }
    });

    (url, handle)
}

pub const LUNCH_JSON: &str = r#"{"id":1,"question":"Lunch?","likes":2,"options":[{"id":10,"text":"Pizza","votes":3},{"id":11,"text":"Salad","votes":1}]}"#;
