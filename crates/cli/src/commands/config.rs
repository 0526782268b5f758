// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::config::{default_config_path, Settings};
use crate::env;
use crate::error::Result;

pub fn run(settings: &Settings) -> Result<()> {
    let path = env::config_path().or_else(|| default_config_path().filter(|p| p.is_file()));
    print!("{}", run_impl(settings, path.as_deref())?);
    Ok(())
}

/// Renders the resolved settings, noting which file (if any) they came from.
pub(crate) fn run_impl(settings: &Settings, file: Option<&Path>) -> Result<String> {
    let source = match file {
        Some(path) => format!("# from {}\n", path.display()),
        None => "# no config file, using defaults\n".to_string(),
    };
    Ok(format!("{}{}", source, settings.to_toml()?))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
