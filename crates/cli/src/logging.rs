// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter used when `QUICKPOLL_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Builds the log filter.
///
/// Valid `directives` (from `QUICKPOLL_LOG`) win; otherwise each `-v` raises
/// the level (`warn`, then `debug`, then `trace`). Directives that fail to
/// parse are ignored, and the second value says why.
fn build_filter(directives: Option<&str>, verbose: u8) -> (EnvFilter, Option<String>) {
    let Some(directives) = directives else {
        return (EnvFilter::new(level_for(verbose)), None);
    };
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(e) => {
            let note = format!(
                "ignoring invalid {} '{}': {}",
                env::vars::QUICKPOLL_LOG,
                directives,
                e
            );
            (EnvFilter::new(level_for(verbose)), Some(note))
        }
    }
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_FILTER,
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber, writing to stderr so command output on
/// stdout stays clean.
///
/// An unparsable `QUICKPOLL_LOG` gets a one-line warning instead of being
/// dropped silently.
pub fn init(verbose: u8) {
    let (filter, rejected) = build_filter(env::log_filter().as_deref(), verbose);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Some(note) = rejected {
        eprintln!("warning: {}", note);
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
