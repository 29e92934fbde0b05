//! Aggregated storage over many containers
//!
//! - `aggregate`: rebuilds the grouped view from a container list
//! - `sort` / `filter`: ordering and search over that view
//! - `transfer`: moves stock between containers and an actor inventory
//! - `policy`: turns clicks into requested quantities
//! - `terminal`: the facade tying the above together per click

pub mod aggregate;
pub mod entry;
pub mod error;
pub mod filter;
pub mod policy;
pub mod sort;
pub mod terminal;
pub mod transfer;

#[cfg(test)]
mod fixtures;

pub use aggregate::rebuild;
pub use entry::{AggregateEntry, ItemLocation};
pub use error::{Notification, TransferError};
pub use filter::filter_entries;
pub use policy::{requested_quantity, ClickAction, ClickSource};
pub use sort::{sort_entries, SortColumn, SortState};
pub use terminal::{ClickTarget, Direction, StorageTerminal, TransferOutcome};
pub use transfer::{
    collect_from_containers, take_indivisible, transfer_to_containers, DepositReport,
    WithdrawPolicy,
};
