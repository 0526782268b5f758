// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Reads a variable, treating an empty value as unset.
fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the value of `API_BASE_URL` if set.
pub fn api_base_url() -> Option<String> {
    non_empty(vars::API_BASE_URL)
}

/// Returns the value of `WS_BASE_URL` if set.
pub fn ws_base_url() -> Option<String> {
    non_empty(vars::WS_BASE_URL)
}

/// Returns the value of `QUICKPOLL_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    non_empty(vars::QUICKPOLL_CONFIG).map(PathBuf::from)
}

/// Returns the log filter directive from `QUICKPOLL_LOG` if set.
pub fn log_filter() -> Option<String> {
    non_empty(vars::QUICKPOLL_LOG)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
pub(crate) mod tests;
