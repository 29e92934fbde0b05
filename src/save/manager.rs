//! Filter store for loading and saving the chest filter
//!
//! Handles:
//! - Creating the data directory
//! - Writing the filter as versioned JSON
//! - Reading it back (an absent file is an empty filter)

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::*;
use crate::selection::ChestFilter;

const FILTER_FILENAME: &str = "chest_filter.json";

pub struct FilterStore {
    directory: PathBuf,
}

impl FilterStore {
    /// Creates a new FilterStore rooted at `directory`
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, StoreError> {
        let directory = directory.as_ref().to_path_buf();

        if !directory.exists() {
            fs::create_dir_all(&directory)?;
        }

        Ok(FilterStore { directory })
    }

    /// `<data dir>/storage-terminal`, or `./storage-terminal` without one
    pub fn default_directory() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join("storage-terminal"))
            .unwrap_or_else(|| PathBuf::from("./storage-terminal"))
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(FILTER_FILENAME)
    }

    /// Check if a filter file has been written
    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Save the filter to disk
    pub fn save(&self, filter: &ChestFilter) -> Result<PathBuf, StoreError> {
        let file = FilterFile {
            version: CURRENT_FILTER_VERSION,
            saved_at: Utc::now(),
            entries: filter.clone(),
        };
        let path = self.path();

        // Pretty format for readability/debugging
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&path, json)?;

        tracing::info!(path = %path.display(), entries = filter.len(), "saved chest filter");
        Ok(path)
    }

    /// Load the filter; an empty filter when none was saved yet
    pub fn load(&self) -> Result<ChestFilter, StoreError> {
        let path = self.path();
        if !path.exists() {
            return Ok(ChestFilter::new());
        }

        let json = fs::read_to_string(&path)?;
        let file: FilterFile = serde_json::from_str(&json)?;

        // Version check
        if file.version > CURRENT_FILTER_VERSION {
            return Err(StoreError::InvalidVersion(file.version));
        }

        tracing::debug!(path = %path.display(), entries = file.entries.len(), saved_at = %file.saved_at, "loaded chest filter");
        Ok(file.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Placement;

    #[test]
    fn test_load_without_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilterStore::new(dir.path()).unwrap();

        assert!(!store.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilterStore::new(dir.path().join("data")).unwrap();
        let filter: ChestFilter = [Placement::new("Farm", 3, 9), Placement::new("Cabin", 1, 2)]
            .into_iter()
            .collect();

        store.save(&filter).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), filter);
    }

    #[test]
    fn test_newer_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilterStore::new(dir.path()).unwrap();
        let json = r#"{ "version": 99, "saved_at": "2026-01-01T00:00:00Z", "entries": [] }"#;
        fs::write(store.path(), json).unwrap();

        assert!(matches!(store.load(), Err(StoreError::InvalidVersion(99))));
    }
}
