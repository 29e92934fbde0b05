use serde::{Deserialize, Serialize};

use super::identity::ItemIdentity;
use super::properties::ItemKind;
use super::traits::HasStackIdentity;

/// An instance of an item with quantity
///
/// This is the reference item type: it carries its own identity, stack
/// limit and price so containers can hold it without a registry lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Logical identity (name, category, quality, discriminator)
    pub identity: ItemIdentity,

    /// How many of this item (1 to max_stack_size)
    pub quantity: u32,

    /// Maximum stack size (1 = non-stackable)
    pub max_stack_size: u32,

    /// Unit sale value; hosts may report negative prices
    pub unit_value: i64,

    /// Item category with type-specific data
    #[serde(default)]
    pub kind: ItemKind,
}

impl ItemStack {
    /// Creates a new material stack
    ///
    /// # Example
    /// ```
    /// # use storage_terminal::item::{HasStackIdentity, ItemIdentity, ItemStack};
    /// let stone = ItemStack::new(ItemIdentity::new("Stone", -16, 0, "390"), 10, 999, 2);
    /// let split = stone.with_quantity(3);
    /// assert_eq!(split.quantity, 3);
    /// assert_eq!(split.identity, stone.identity);
    /// assert!(!split.is_indivisible());
    /// ```
    pub fn new(identity: ItemIdentity, quantity: u32, max_stack_size: u32, unit_value: i64) -> Self {
        ItemStack {
            identity,
            quantity,
            max_stack_size,
            unit_value,
            kind: ItemKind::Material,
        }
    }

    /// Sets the item kind
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }
}

impl HasStackIdentity for ItemStack {
    fn identity(&self) -> ItemIdentity {
        self.identity.clone()
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    fn max_stack_size(&self) -> u32 {
        self.max_stack_size
    }

    fn unit_value(&self) -> i64 {
        self.unit_value
    }

    fn with_quantity(&self, quantity: u32) -> Self {
        ItemStack {
            quantity,
            ..self.clone()
        }
    }

    fn is_indivisible(&self) -> bool {
        self.kind.is_indivisible()
    }

    fn display_name(&self) -> String {
        self.identity.name.clone()
    }

    // Compares in place instead of cloning the identity
    fn stacks_with(&self, identity: &ItemIdentity) -> bool {
        self.identity == *identity
    }
}
