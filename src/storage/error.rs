use std::fmt;

/// Invalid requests rejected before anything is mutated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// Zero items requested
    #[error("requested quantity must be greater than zero")]
    InvalidQuantity,

    /// Slot index outside the actor inventory
    #[error("inventory slot {slot} out of range ({len} stacks held)")]
    SlotOutOfRange { slot: usize, len: usize },

    /// Entry index outside the visible view
    #[error("entry {index} out of range ({len} entries visible)")]
    EntryOutOfRange { index: usize, len: usize },

    /// The container slot an entry points at no longer holds its item
    #[error("'{0}' is no longer at its storage location")]
    StaleEntry(String),
}

/// User-facing, non-fatal conditions raised by a transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Deposit could not place everything; the rest stayed with the actor
    NoStorageSpace { item: String, remaining: u32 },

    /// Withdrawal found no room in the actor inventory
    InventoryFull { item: String },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notification::NoStorageSpace { item, remaining } => {
                write!(f, "Not enough storage space: {} {} could not be stored", remaining, item)
            }
            Notification::InventoryFull { item } => {
                write!(f, "Inventory is full: could not take {}", item)
            }
        }
    }
}
