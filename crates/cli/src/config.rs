// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration management.
//!
//! Configuration is stored in `~/.config/aero/config.toml` and covers:
//! - `server`: backend base URL, optional WebSocket URL override, API key
//! - `live`: reconnect budget and polling cadence for the live stream
//! - `location`: default coordinates and forecast horizon

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::live::LiveConfig;

const CONFIG_DIR_NAME: &str = "aero";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub live: LiveSettings,
    #[serde(default)]
    pub location: LocationConfig,
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP base URL of the forecast backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Explicit WebSocket URL for the alert stream. When absent it is
    /// derived from `base_url` (`http` becomes `ws`, `https` becomes `wss`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws_url: Option<String>,
    /// Bearer token for authenticated endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Live stream delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveSettings {
    /// Maximum WebSocket connection attempts before giving up (default: 5).
    /// 0 means the WebSocket channel is never attempted.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base reconnect delay in milliseconds (default: 1000). The delay before
    /// retry `n` is `base_delay_ms * n`.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Polling interval in milliseconds for the fallback path (default: 5000).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Whether to fall back to polling once the reconnect budget is spent
    /// (default: true).
    #[serde(default = "default_fall_back_to_poll")]
    pub fall_back_to_poll: bool,
}

/// Default location for forecast and polling requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_lon")]
    pub lon: f64,
    /// Forecast horizon in hours.
    #[serde(default = "default_hours")]
    pub hours: u32,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_max_attempts() -> u32 {
    5
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_poll_interval_ms() -> u64 {
    5000
}

fn default_fall_back_to_poll() -> bool {
    true
}

fn default_lat() -> f64 {
    34.0522
}

fn default_lon() -> f64 {
    -118.2437
}

fn default_hours() -> u32 {
    24
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
            ws_url: None,
            api_key: None,
        }
    }
}

impl Default for LiveSettings {
    fn default() -> Self {
        LiveSettings {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            poll_interval_ms: default_poll_interval_ms(),
            fall_back_to_poll: default_fall_back_to_poll(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        LocationConfig {
            lat: default_lat(),
            lon: default_lon(),
            hours: default_hours(),
        }
    }
}

impl Config {
    /// The default config file location (`~/.config/aero/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Loads the config at `path`, or the default location, or built-in
    /// defaults when no file exists. An explicit `path` must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => match Self::default_path() {
                Some(p) if p.is_file() => Self::load(&p),
                _ => Ok(Config::default()),
            },
        }
    }

    /// Saves configuration to the given file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The WebSocket URL for the alert stream, explicit or derived.
    pub fn ws_url(&self) -> String {
        if let Some(ref url) = self.server.ws_url {
            return url.clone();
        }
        let base = self.server.base_url.trim_end_matches('/');
        let ws_base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{}", rest)
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{}", rest)
        } else {
            base.to_string()
        };
        format!("{}/ws/alerts", ws_base)
    }

    /// Builds the live delivery config for the given polling endpoint.
    pub fn live_config(&self, poll_url: String) -> LiveConfig {
        LiveConfig {
            url: self.ws_url(),
            poll_url,
            max_attempts: self.live.max_attempts,
            base_delay: Duration::from_millis(self.live.base_delay_ms),
            poll_interval: Duration::from_millis(self.live.poll_interval_ms),
            fall_back_to_poll: self.live.fall_back_to_poll,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
