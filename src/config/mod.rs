// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file in the config directory.
//!
//! # Configuration Sections
//!
//! - `[api]` - License API base URL and user agent
//!
//! The theme is not part of this file: it is a preference owned by
//! [`crate::preferences`] and persisted in the data directory.
//!
//! # Base URL Resolution
//!
//! [`Config::resolve_base_url`] picks, in order: the `--api-url` argument,
//! the `LICENSE_DESK_API_URL` environment variable, `[api].base_url`.
//!
//! # Examples
//!
//! ```no_run
//! use license_desk::config;
//!
//! let (mut config, _warning) = config::load();
//! config.api.base_url = "https://licenses.example.com".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[api].base_url`.
pub const ENV_API_URL: &str = "LICENSE_DESK_API_URL";

/// Warning key returned by [`load`] when `settings.toml` exists but is unreadable.
pub const WARNING_CONFIG_LOAD: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// License API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Root URL of the license API, without the `/api/v1/...` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User agent sent with requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Resolves the API base URL: `cli_override`, then [`ENV_API_URL`], then
    /// the configured value. Empty overrides are ignored.
    #[must_use]
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        if let Some(url) = cli_override.filter(|u| !u.is_empty()) {
            return url.to_string();
        }
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                return url;
            }
        }
        self.api.base_url.clone()
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(%err, path = %path.display(), "failed to load config; using defaults");
                    return (Config::default(), Some(WARNING_CONFIG_LOAD.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
