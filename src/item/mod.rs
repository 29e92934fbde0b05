// Item system module
//
// This module provides the item side of the storage terminal, including:
// - Logical item identity used for grouping and stacking
// - Capability traits the engine needs from host item/container types
// - A concrete item stack and catalog for hosts without their own types

pub mod definition;
pub mod identity;
pub mod properties;
pub mod registry;
pub mod stack;
pub mod traits;

// Re-export main types for convenient access
pub use definition::ItemDefinition;
pub use identity::ItemIdentity;
pub use properties::{EquipmentSlot, ItemKind, ToolType};
pub use registry::{CatalogError, ItemCatalog};
pub use stack::ItemStack;
pub use traits::{Capacity, HasStackIdentity, ItemCollection};
