// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! Settings are layered, later sources winning:
//! - built-in defaults
//! - `config.toml` (`$QUICKPOLL_CONFIG`, else the user config dir)
//! - environment (`API_BASE_URL`, `WS_BASE_URL`)
//! - command-line flags

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};
use crate::sync::PushConfig;

const CONFIG_DIR_NAME: &str = "quickpoll";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_API_URL: &str = "http://localhost:8000/api/polls";
const DEFAULT_WS_URL: &str = "ws://localhost:8000/ws";

/// Resolved client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Base URL of the poll REST API.
    pub api_url: String,
    /// URL of the push channel.
    pub ws_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// First reconnect delay in milliseconds; doubles on each failure.
    pub reconnect_initial_delay_ms: u64,
    /// Ceiling for the reconnect delay in seconds.
    pub reconnect_max_delay_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: DEFAULT_API_URL.to_string(),
            ws_url: DEFAULT_WS_URL.to_string(),
            request_timeout_secs: 15,
            reconnect_initial_delay_ms: 100,
            reconnect_max_delay_secs: 30,
        }
    }
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub ws_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub reconnect_initial_delay_ms: Option<u64>,
    pub reconnect_max_delay_secs: Option<u64>,
}

impl FileConfig {
    /// Loads and parses a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

/// URL overrides from the environment or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub ws_url: Option<String>,
}

impl Overrides {
    /// Reads `API_BASE_URL` and `WS_BASE_URL`.
    pub fn from_env() -> Self {
        Overrides {
            api_url: env::api_base_url(),
            ws_url: env::ws_base_url(),
        }
    }
}

impl Settings {
    /// Resolves settings from every layer.
    ///
    /// A config file named by `$QUICKPOLL_CONFIG` must exist; the default
    /// location is skipped when absent.
    pub fn resolve(flags: &Overrides) -> Result<Self> {
        let file = match env::config_path() {
            Some(path) => Some(FileConfig::load(&path)?),
            None => match default_config_path() {
                Some(path) if path.is_file() => Some(FileConfig::load(&path)?),
                _ => None,
            },
        };
        Self::layered(file, &Overrides::from_env(), flags)
    }

    /// Applies the layers in order and validates the result.
    pub fn layered(file: Option<FileConfig>, env: &Overrides, flags: &Overrides) -> Result<Self> {
        let mut settings = Settings::default();
        if let Some(file) = file {
            settings.apply_file(file);
        }
        settings.apply(env);
        settings.apply(flags);
        settings.validate()?;
        tracing::debug!(api_url = %settings.api_url, ws_url = %settings.ws_url, "settings resolved");
        Ok(settings)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(v) = file.api_url {
            self.api_url = v;
        }
        if let Some(v) = file.ws_url {
            self.ws_url = v;
        }
        if let Some(v) = file.request_timeout_secs {
            self.request_timeout_secs = v;
        }
        if let Some(v) = file.reconnect_initial_delay_ms {
            self.reconnect_initial_delay_ms = v;
        }
        if let Some(v) = file.reconnect_max_delay_secs {
            self.reconnect_max_delay_secs = v;
        }
    }

    fn apply(&mut self, overrides: &Overrides) {
        if let Some(v) = &overrides.api_url {
            self.api_url = v.clone();
        }
        if let Some(v) = &overrides.ws_url {
            self.ws_url = v.clone();
        }
    }

    /// Checks URL schemes and numeric bounds.
    pub fn validate(&self) -> Result<()> {
        if !has_scheme(&self.api_url, &["http://", "https://"]) {
            return Err(Error::InvalidUrl {
                field: "api_url",
                url: self.api_url.clone(),
                expected: "http:// or https://",
            });
        }
        if !has_scheme(&self.ws_url, &["ws://", "wss://"]) {
            return Err(Error::InvalidUrl {
                field: "ws_url",
                url: self.ws_url.clone(),
                expected: "ws:// or wss://",
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.reconnect_max_delay_secs == 0 {
            return Err(Error::Config(
                "reconnect_max_delay_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Push client configuration derived from these settings.
    pub fn push_config(&self) -> PushConfig {
        PushConfig {
            url: self.ws_url.clone(),
            initial_delay_ms: self.reconnect_initial_delay_ms,
            max_delay_secs: self.reconnect_max_delay_secs,
        }
    }

    /// Renders the settings as TOML, in the shape `config.toml` accepts.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }
}

fn has_scheme(url: &str, schemes: &[&str]) -> bool {
    schemes.iter().any(|s| {
        url.len() > s.len()
            && url
                .get(..s.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(s))
    })
}

/// Default config file location, `<config dir>/quickpoll/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
