use serde::{Serialize, Deserialize};

use crate::item::{Capacity, ItemCollection, ItemStack};

/// Number of slots in a fresh personal inventory
pub const DEFAULT_PLAYER_SLOTS: usize = 36;

/// The actor's personal inventory
///
/// Same slot rules as a chest: ordered, no holes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerInventory {
    /// Held stacks in slot order
    pub items: Vec<ItemStack>,

    /// Maximum number of stacks
    pub capacity: usize,
}

impl PlayerInventory {
    /// Creates a new empty personal inventory
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_PLAYER_SLOTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PlayerInventory {
            items: Vec::new(),
            capacity,
        }
    }

    /// Builder: fills the inventory with stacks in slot order
    pub fn with_items(mut self, items: impl IntoIterator<Item = ItemStack>) -> Self {
        self.items.extend(items.into_iter().take(self.capacity));
        self.items.truncate(self.capacity);
        self
    }
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Capacity for PlayerInventory {
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl ItemCollection for PlayerInventory {
    type Item = ItemStack;

    fn items(&self) -> &[ItemStack] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<ItemStack> {
        &mut self.items
    }
}
