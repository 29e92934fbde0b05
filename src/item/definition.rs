use serde::{Serialize, Deserialize};

use super::identity::ItemIdentity;
use super::properties::ItemKind;
use super::stack::ItemStack;

/// The blueprint for an item type
///
/// This defines the static properties of an item that are shared
/// across all instances. Quality is the only per-instance identity
/// field and is chosen when a stack is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier (used for lookups)
    pub id: String,

    /// Display name shown in the terminal
    pub name: String,

    /// Host category code
    pub category: i32,

    /// Type-specific discriminator
    pub discriminator: String,

    /// Maximum stack size (1 = non-stackable)
    pub max_stack_size: u32,

    /// Unit sale value
    pub unit_value: i64,

    /// Item category with type-specific data
    pub kind: ItemKind,
}

impl ItemDefinition {
    /// Creates a new item definition
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: i32,
        discriminator: impl Into<String>,
        max_stack_size: u32,
        unit_value: i64,
        kind: ItemKind,
    ) -> Self {
        ItemDefinition {
            id: id.into(),
            name: name.into(),
            category,
            discriminator: discriminator.into(),
            max_stack_size,
            unit_value,
            kind,
        }
    }

    /// Identity of an instance of this item at the given quality
    pub fn identity(&self, quality: u8) -> ItemIdentity {
        ItemIdentity::new(&self.name, self.category, quality, &self.discriminator)
    }

    /// Creates a stack of this item
    pub fn stack(&self, quantity: u32, quality: u8) -> ItemStack {
        ItemStack::new(self.identity(quality), quantity, self.max_stack_size, self.unit_value)
            .with_kind(self.kind)
    }
}
