//! Startup configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[serde(default)]` fills every missing field from `Default`, so a
//! config file only needs the keys it wants to change. The editor never
//! writes this file; it is read once at startup when `--config` is given.

use serde::Deserialize;
use std::path::Path;

/// Main editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window geometry
    pub window: WindowConfig,

    /// Text area settings
    pub editor: EditorConfig,

    /// Menu and status bar settings
    pub ui: UiConfig,
}

impl Config {
    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses config from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

/// Initial window size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 700.0,
        }
    }
}

/// Text area configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in points
    pub font_size: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { font_size: 18.0 }
    }
}

/// Menu bar and status bar configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub menu_font_size: f32,
    pub status_font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            menu_font_size: 14.0,
            status_font_size: 12.0,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
