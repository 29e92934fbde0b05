use serde::{Deserialize, Serialize};
use std::fmt;

use crate::item::{Capacity, ItemCollection, ItemStack};

/// Default number of slots in a regular chest
pub const DEFAULT_CHEST_CAPACITY: usize = 36;

/// Where a container sits in the world
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub location_name: String,
    pub tile_x: i32,
    pub tile_y: i32,
}

impl Placement {
    pub fn new(location_name: impl Into<String>, tile_x: i32, tile_y: i32) -> Self {
        Placement {
            location_name: location_name.into(),
            tile_x,
            tile_y,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.location_name, self.tile_x, self.tile_y)
    }
}

/// A container that can report its world placement
pub trait Placed {
    fn placement(&self) -> Placement;
}

impl<T: Placed + ?Sized> Placed for &mut T {
    fn placement(&self) -> Placement {
        (**self).placement()
    }
}

/// A storage chest placed in the world
///
/// Items are kept in slot order without holes; `items.len()` never
/// exceeds `capacity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chest {
    /// World placement (location + tile)
    pub placement: Placement,

    /// Maximum number of stacks
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Stored stacks in slot order
    #[serde(default)]
    pub items: Vec<ItemStack>,

    /// False once the chest has been destroyed in the world
    #[serde(skip, default = "available")]
    pub available: bool,
}

fn default_capacity() -> usize {
    DEFAULT_CHEST_CAPACITY
}

fn available() -> bool {
    true
}

impl Chest {
    /// Creates an empty, unplaced chest with the given capacity
    pub fn new(capacity: usize) -> Self {
        Chest::placed(Placement::new("", 0, 0), capacity)
    }

    /// Creates an empty chest at a world placement
    pub fn placed(placement: Placement, capacity: usize) -> Self {
        Chest {
            placement,
            capacity,
            items: Vec::new(),
            available: true,
        }
    }

    /// Builder: fills the chest with stacks in slot order
    ///
    /// Stacks beyond the capacity are dropped.
    pub fn with_items(mut self, items: impl IntoIterator<Item = ItemStack>) -> Self {
        self.items.extend(items.into_iter().take(self.capacity));
        self.items.truncate(self.capacity);
        self
    }

    /// Marks the chest as destroyed; every later pass skips it
    pub fn destroy(&mut self) {
        self.available = false;
    }

    /// Returns true if the chest has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Chest {
    fn default() -> Self {
        Self::new(DEFAULT_CHEST_CAPACITY)
    }
}

impl Capacity for Chest {
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl ItemCollection for Chest {
    type Item = ItemStack;

    fn items(&self) -> &[ItemStack] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<ItemStack> {
        &mut self.items
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl Placed for Chest {
    fn placement(&self) -> Placement {
        self.placement.clone()
    }
}
