//! Persistence of the chest filter
//!
//! The host game persists containers and items itself; the only state
//! this crate owns is the set of marked chests, kept as a small JSON file.
//!
//! - `types`: file layout and error types
//! - `manager`: FilterStore for file operations
//!
//! # Example Usage
//!
//! ```ignore
//! let store = FilterStore::new(FilterStore::default_directory())?;
//! let mut filter = store.load()?;
//! filter.add(Placement::new("Farm", 12, 7));
//! store.save(&filter)?;
//! ```

pub mod manager;
pub mod types;

// Re-export commonly used types
pub use manager::FilterStore;
pub use types::*;
