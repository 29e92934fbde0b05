use crate::item::{Capacity, HasStackIdentity, ItemCollection, ItemIdentity};

/// Slot management shared by every bounded item collection
///
/// Blanket-implemented for anything that is both an `ItemCollection` and
/// has a `Capacity`, so host containers get these for free.
pub trait SlotOps: ItemCollection + Capacity {
    /// Counts how many of a specific item are in the container
    fn count_of(&self, identity: &ItemIdentity) -> u32 {
        self.items()
            .iter()
            .filter(|stack| stack.stacks_with(identity))
            .map(|stack| stack.quantity())
            .sum()
    }

    /// Number of slots still free for new stacks
    fn free_slots(&self) -> usize {
        self.capacity().saturating_sub(self.items().len())
    }

    /// Returns true if all slots are occupied
    fn is_full(&self) -> bool {
        self.free_slots() == 0
    }

    /// How many more units of `template`'s item would fit
    ///
    /// Counts the headroom of matching stacks plus whole new stacks in
    /// free slots.
    fn room_for(&self, template: &Self::Item) -> u32 {
        let identity = template.identity();
        let max_stack = u64::from(template.max_stack_size().max(1));

        let headroom: u64 = self
            .items()
            .iter()
            .filter(|stack| stack.stacks_with(&identity))
            .map(|stack| max_stack.saturating_sub(u64::from(stack.quantity())))
            .sum();
        let fresh = self.free_slots() as u64 * max_stack;

        u32::try_from(headroom + fresh).unwrap_or(u32::MAX)
    }

    /// Deposits `quantity` units of `template`'s item
    ///
    /// Returns the number of items that couldn't fit (overflow).
    /// Returns 0 if all items were added successfully.
    ///
    /// # Strategy
    /// 1. Top up existing stacks of the same item
    /// 2. Create new stacks in free slots
    /// 3. Return overflow if the container is full
    fn deposit(&mut self, template: &Self::Item, quantity: u32) -> u32 {
        if quantity == 0 {
            return 0;
        }

        let identity = template.identity();
        let max_stack = template.max_stack_size().max(1);
        let mut remaining = quantity;

        // Phase 1: Try to add to existing stacks
        for stack in self.items_mut().iter_mut() {
            if remaining == 0 {
                break;
            }

            if stack.stacks_with(&identity) && stack.quantity() < max_stack {
                let added = (max_stack - stack.quantity()).min(remaining);
                stack.set_quantity(stack.quantity() + added);
                remaining -= added;
            }
        }

        // Phase 2: Create new stacks in free slots
        while remaining > 0 && self.free_slots() > 0 {
            let stack_size = remaining.min(max_stack);
            self.items_mut().push(template.with_quantity(stack_size));
            remaining -= stack_size;
        }

        remaining  // Return how many items didn't fit
    }

    /// Places a whole item instance into a free slot without merging
    ///
    /// Gives the item back if there is no free slot.
    fn place(&mut self, item: Self::Item) -> Result<usize, Self::Item> {
        if self.is_full() {
            return Err(item);
        }

        self.items_mut().push(item);
        Ok(self.items().len() - 1)
    }
}

impl<T: ItemCollection + Capacity + ?Sized> SlotOps for T {}
