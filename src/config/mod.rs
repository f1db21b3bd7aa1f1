// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language selection
//! - `[notifications]` - Capacity and timing of the toast system
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("es-ES".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_DIR: &str = "IcedToast";
const CONFIG_DIR_ENV: &str = "ICED_TOAST_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es-ES").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Maximum number of live toasts; the oldest is evicted past this.
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,

    /// Auto-dismiss duration in milliseconds for non-error toasts.
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,

    /// Auto-dismiss duration in milliseconds for error toasts.
    #[serde(default = "default_error_duration_ms")]
    pub error_duration_ms: u64,

    /// Delay in milliseconds between dismissal and removal, covering the
    /// exit animation.
    #[serde(default = "default_exit_delay_ms")]
    pub exit_delay_ms: u64,
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

fn default_error_duration_ms() -> u64 {
    DEFAULT_ERROR_DURATION_MS
}

fn default_exit_delay_ms() -> u64 {
    DEFAULT_EXIT_DELAY_MS
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
            default_duration_ms: DEFAULT_DURATION_MS,
            error_duration_ms: DEFAULT_ERROR_DURATION_MS,
            exit_delay_ms: DEFAULT_EXIT_DELAY_MS,
        }
    }
}

impl NotificationsConfig {
    /// Returns `max_visible` clamped to the allowed range.
    #[must_use]
    pub fn clamped_max_visible(&self) -> usize {
        self.max_visible.clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE)
    }

    /// Returns the default auto-dismiss duration, clamped.
    #[must_use]
    pub fn clamped_default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms.clamp(MIN_DURATION_MS, MAX_DURATION_MS))
    }

    /// Returns the error auto-dismiss duration, clamped.
    #[must_use]
    pub fn clamped_error_duration(&self) -> Duration {
        Duration::from_millis(self.error_duration_ms.clamp(MIN_DURATION_MS, MAX_DURATION_MS))
    }

    /// Returns the exit-phase delay, clamped.
    #[must_use]
    pub fn clamped_exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms.min(MAX_EXIT_DELAY_MS))
    }
}

// =============================================================================
// Top-Level Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Path Resolution
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields the defaults, and an unreadable or
/// invalid file yields the defaults plus a warning message the caller may
/// surface (e.g., as a toast).
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = get_default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("could not read {}: {}", path.display(), err)),
        ),
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to an explicit path, creating parent directories
/// as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
