//! TOML configuration for the engine and the desktop front-end
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! [search]
//! max_depth = 4
//! time_limit_ms = 3000
//!
//! [ui]
//! human_color = "white"
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::Stone;
use crate::error::ConfigError;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// AI move search
    pub search: SearchConfig,
    /// Hint search (usually the same as `search`)
    pub hint: SearchConfig,
    pub ui: UiConfig,
}

/// Search bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub time_limit_ms: u64,
    pub root_candidates: usize,
    pub node_candidates: usize,
    pub neighbor_radius: usize,
}

impl SearchConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            time_limit_ms: 5_000,
            root_candidates: 25,
            node_candidates: 15,
            neighbor_radius: 2,
        }
    }
}

/// Color of a player in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Black,
    White,
}

impl PlayerColor {
    pub fn stone(self) -> Stone {
        match self {
            PlayerColor::Black => Stone::Black,
            PlayerColor::White => Stone::White,
        }
    }
}

/// Front-end display options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Mark cells that are forbidden for Black
    pub show_forbidden: bool,
    pub show_coordinates: bool,
    /// Side the human plays against the AI
    pub human_color: PlayerColor,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_forbidden: true,
            show_coordinates: true,
            human_color: PlayerColor::Black,
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }
}
