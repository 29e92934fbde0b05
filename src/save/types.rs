//! Filter file types
//!
//! Serialized as pretty JSON through Serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::selection::ChestFilter;

/// The root filter file structure
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterFile {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub entries: ChestFilter,
}

/// Error types for filter load/save
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported filter file version: {0}")]
    InvalidVersion(u32),
}

/// Current filter file version
pub const CURRENT_FILTER_VERSION: u32 = 1;
