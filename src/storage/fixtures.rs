//! Shared builders for storage tests

use crate::inventory::{Chest, PlayerInventory};
use crate::item::{ItemIdentity, ItemKind, ItemStack, ToolType};

use super::entry::{AggregateEntry, ItemLocation};

pub fn identity(name: &str) -> ItemIdentity {
    ItemIdentity::new(name, -16, 0, name.to_lowercase())
}

pub fn stack(name: &str, quantity: u32) -> ItemStack {
    ItemStack::new(identity(name), quantity, 999, 2)
}

pub fn wood(quantity: u32) -> ItemStack {
    stack("Wood", quantity)
}

pub fn stone(quantity: u32) -> ItemStack {
    stack("Stone", quantity)
}

pub fn pickaxe() -> ItemStack {
    ItemStack::new(ItemIdentity::new("Copper Pickaxe", 0, 0, "(T)CopperPickaxe"), 1, 1, 0)
        .with_kind(ItemKind::Tool { tool_type: ToolType::Pickaxe })
}

pub fn chest(capacity: usize, items: Vec<ItemStack>) -> Chest {
    Chest::new(capacity).with_items(items)
}

pub fn actor(items: Vec<ItemStack>) -> PlayerInventory {
    PlayerInventory::with_capacity(12).with_items(items)
}

pub fn entry(name: &str, quantity: u32, unit_value: u64) -> AggregateEntry<ItemStack> {
    AggregateEntry {
        name: name.to_string(),
        identity: identity(name),
        quantity,
        unit_value,
        total_value: quantity as u64 * unit_value,
        representative: stack(name, quantity),
        location: ItemLocation { container: 0, slot: 0 },
    }
}

/// Total units of an item across chests and the actor
pub fn total_units(chests: &[Chest], actor: &PlayerInventory, item: &ItemIdentity) -> u32 {
    let stored: u32 = chests
        .iter()
        .flat_map(|c| c.items.iter())
        .filter(|s| s.identity == *item)
        .map(|s| s.quantity)
        .sum();
    let held: u32 = actor
        .items
        .iter()
        .filter(|s| s.identity == *item)
        .map(|s| s.quantity)
        .sum();
    stored + held
}
