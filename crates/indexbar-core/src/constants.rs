//! Configuration defaults
//!
//! Centralized location for default values and tuning constants

/// Index bar defaults
pub mod index_bar {
    /// Sticky pinning is enabled unless configured otherwise
    pub const DEFAULT_STICKY: bool = true;

    /// Pixels reserved above the pin line (e.g. for a fixed page header)
    pub const DEFAULT_STICKY_OFFSET_TOP: f64 = 0.0;

    /// Number of letters in the default marker list
    pub const ALPHABET_LEN: u8 = 26;
}

/// Gesture detection
pub mod gesture {
    /// Minimum travel before a drag direction is latched
    pub const MIN_DISTANCE: f64 = 10.0;
}

/// Config file locations
pub mod paths {
    /// Config directory name under the home directory
    pub const CONFIG_DIR_NAME: &str = ".indexbar";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";
}
