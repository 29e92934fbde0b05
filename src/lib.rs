//! Storage terminal: one aggregated view over many chests
//!
//! Scans a set of containers, groups their stacks by logical item
//! identity into a sortable, searchable table, and moves stock between
//! that table and an actor's personal inventory.
//!
//! The engine only depends on the traits in [`item::traits`]; the
//! concrete [`item::ItemStack`], [`inventory::Chest`] and
//! [`inventory::PlayerInventory`] are ready-made implementations.

pub mod config;
pub mod inventory;
pub mod item;
pub mod logging;
pub mod save;
pub mod selection;
pub mod storage;

pub use config::TerminalConfig;
pub use storage::StorageTerminal;
