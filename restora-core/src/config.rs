//! Persistent viewer configuration
//!
//! Settings are grouped into backend connection, UI preferences and viewport
//! tuning. They are stored as TOML (or JSON, chosen by file extension) in the
//! platform configuration directory.

use crate::error::{Error, Result};
use crate::logs::LogBook;
use crate::viewport::ViewportSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "restora";
const CONFIG_FILE: &str = "config.toml";

/// Theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow system preference
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Next theme when cycling with the header toggle
    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Where the OCR backend lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub base_url: String,
    /// Delay before reconnecting a dropped log stream, 0 disables reconnecting
    pub reconnect_delay_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            reconnect_delay_secs: 5,
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub theme: ThemePreference,
    pub log_panel_open: bool,
    /// Records kept in the log console
    pub log_capacity: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            log_panel_open: false,
            log_capacity: LogBook::DEFAULT_CAPACITY,
        }
    }
}

/// Complete viewer configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendSettings,
    pub ui: UiSettings,
    pub viewport: ViewportSettings,
}

impl Config {
    /// `<config dir>/restora/config.toml`, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if has_extension(path, "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if has_extension(path, "json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(Error::Config("backend base_url must not be empty".to_string()));
        }
        if self.ui.log_capacity == 0 {
            return Err(Error::Config("log_capacity must be > 0".to_string()));
        }
        self.viewport.validate()
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.ui.theme, ThemePreference::System);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            theme = "dark"

            [viewport]
            zoom_step = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.theme, ThemePreference::Dark);
        assert_eq!(config.ui.log_capacity, LogBook::DEFAULT_CAPACITY);
        assert_eq!(config.viewport.zoom_step, 0.25);
        assert_eq!(config.viewport.zoom_max, 5.0);
        assert_eq!(config.backend, BackendSettings::default());
    }

    #[test]
    fn theme_cycles() {
        assert_eq!(ThemePreference::System.next(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.next(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.next(), ThemePreference::System);
    }

    #[test]
    fn empty_backend_url_is_invalid() {
        let mut config = Config::default();
        config.backend.base_url = "  ".into();
        assert!(config.validate().is_err());
    }
}
