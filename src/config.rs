//! Terminal configuration
//!
//! Loaded from a JSON file; every field has a default so partial files
//! and missing files both work.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::SortColumn;

/// Errors raised while loading or writing the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User-facing settings of the storage terminal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Whitelist mode: only chests in the filter are linked.
    /// Blacklist mode (default): chests in the filter are left out.
    pub use_whitelist: bool,

    /// Log at trace level unless RUST_LOG says otherwise
    pub trace_logging: bool,

    /// Leave one unit behind when draining the last chest of an item
    pub keep_last_unit: bool,

    /// Column the view is sorted by when a terminal opens
    pub default_sort: SortColumn,

    pub sort_ascending: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            use_whitelist: false,
            trace_logging: false,
            keep_last_unit: true,
            default_sort: SortColumn::Name,
            sort_ascending: true,
        }
    }
}

impl TerminalConfig {
    /// Default location: `<config dir>/storage-terminal/config.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("storage-terminal"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.json")
    }

    /// Loads a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Loads a config file, falling back to defaults when it doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Writes the config as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
