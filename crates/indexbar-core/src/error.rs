//! Error types
//!
//! Only configuration loading is fallible. Runtime geometry problems
//! (hidden container, unmatched jump, empty registry) degrade to no-ops.

use std::path::PathBuf;

use thiserror::Error;

/// indexbar error type
#[derive(Debug, Error)]
pub enum Error {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::IndexBarConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but holds values the index bar cannot use
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
