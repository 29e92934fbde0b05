//! Capability traits the storage engine depends on
//!
//! The engine never names a concrete item or container type. Hosts plug in
//! their own types by implementing these three traits; `ItemStack`, `Chest`
//! and `PlayerInventory` are the reference implementations.

use super::identity::ItemIdentity;

/// An item instance that knows its logical identity and stack bookkeeping
pub trait HasStackIdentity {
    /// Logical identity used for grouping and stacking
    fn identity(&self) -> ItemIdentity;

    /// Current stack count
    fn quantity(&self) -> u32;

    /// Overwrites the stack count
    fn set_quantity(&mut self, quantity: u32);

    /// Largest count a single stack of this item may hold
    fn max_stack_size(&self) -> u32;

    /// Unit sale value as reported by the host (may be negative)
    fn unit_value(&self) -> i64;

    /// Creates a new, independent instance of the same item with `quantity`
    ///
    /// Used to build split stacks; `self` is left untouched.
    fn with_quantity(&self, quantity: u32) -> Self
    where
        Self: Sized;

    /// Equipment-like items (tools, weapons, rings, boots, furniture) are
    /// moved as one indivisible unit and never split
    fn is_indivisible(&self) -> bool {
        false
    }

    /// Display name shown in the terminal
    fn display_name(&self) -> String {
        self.identity().name
    }

    /// Returns true if this item stacks with the given identity
    fn stacks_with(&self, identity: &ItemIdentity) -> bool {
        self.identity() == *identity
    }
}

/// A bounded container: how many stacks (slots) it may hold
pub trait Capacity {
    fn capacity(&self) -> usize;
}

/// An ordered, mutable collection of item stacks without holes
pub trait ItemCollection {
    type Item: HasStackIdentity;

    fn items(&self) -> &[Self::Item];

    fn items_mut(&mut self) -> &mut Vec<Self::Item>;

    /// Returns false once the host world has destroyed this container
    ///
    /// Unavailable containers are skipped by every pass.
    fn is_available(&self) -> bool {
        true
    }
}

impl<T: Capacity + ?Sized> Capacity for &mut T {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }
}

impl<T: ItemCollection + ?Sized> ItemCollection for &mut T {
    type Item = T::Item;

    fn items(&self) -> &[Self::Item] {
        (**self).items()
    }

    fn items_mut(&mut self) -> &mut Vec<Self::Item> {
        (**self).items_mut()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
