// Inventory system module
//
// This module provides the container side of the storage terminal, including:
// - Slot operations shared by every container (counting, room, depositing)
// - Chests placed in the world
// - The actor's personal inventory

pub mod chest;
pub mod player;
pub mod slots;

// Re-export main types
pub use chest::{Chest, Placement, Placed};
pub use player::PlayerInventory;
pub use slots::SlotOps;
