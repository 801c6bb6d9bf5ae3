//! Index bar configuration
//!
//! Loaded from `~/.indexbar/config.toml` when present. Every field has a
//! default so a partial (or missing) file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{index_bar, paths};
use crate::error::{Error, Result};

/// Caller-facing configuration for an [`crate::IndexBar`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct IndexBarConfig {
    /// Stacking order hint; the sidebar renders one above it
    pub z_index: Option<i32>,
    /// Color override for the active marker
    pub highlight_color: Option<String>,
    /// Enables sticky pin/hand-off behavior
    pub sticky: bool,
    /// Offset reserved above the pin line
    pub sticky_offset_top: f64,
    /// Ordered marker keys shown in the sidebar
    pub index_list: Vec<String>,
}

impl Default for IndexBarConfig {
    fn default() -> Self {
        Self {
            z_index: None,
            highlight_color: None,
            sticky: index_bar::DEFAULT_STICKY,
            sticky_offset_top: index_bar::DEFAULT_STICKY_OFFSET_TOP,
            index_list: alphabet(),
        }
    }
}

impl IndexBarConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        info!(path = %path.display(), "Loaded index bar config");
        Ok(config)
    }

    /// Load from the default location, falling back to defaults when no
    /// file exists. A file that exists but is broken is still an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path(),
        };
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Reject values the index bar cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.index_list.is_empty() {
            return Err(Error::InvalidConfig("index_list must not be empty".into()));
        }
        if let Some(pos) = self.index_list.iter().position(|k| k.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "index_list entry {} is blank",
                pos
            )));
        }
        if !self.sticky_offset_top.is_finite() || self.sticky_offset_top < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "sticky_offset_top must be a non-negative number, got {}",
                self.sticky_offset_top
            )));
        }
        Ok(())
    }

    /// Sidebar stacking order: one above the configured z-index
    pub fn sidebar_z_index(&self) -> Option<i32> {
        self.z_index.map(|z| z.saturating_add(1))
    }
}

/// Default marker list: uppercase letters A-Z
pub fn alphabet() -> Vec<String> {
    (0..index_bar::ALPHABET_LEN)
        .map(|i| char::from(b'A' + i).to_string())
        .collect()
}

/// Base directory for indexbar files (~/.indexbar)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(paths::CONFIG_DIR_NAME)
}

/// Default config file path (~/.indexbar/config.toml)
pub fn default_config_path() -> PathBuf {
    config_dir().join(paths::CONFIG_FILE_NAME)
}

/// Log directory (~/.indexbar/logs)
pub fn logs_dir() -> PathBuf {
    config_dir().join(paths::LOGS_DIR_NAME)
}
