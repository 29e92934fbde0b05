use crate::item::ItemIdentity;

/// Where an item instance sat when the view was rebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemLocation {
    /// Index into the terminal's container list
    pub container: usize,

    /// Slot index inside that container
    pub slot: usize,
}

/// One row of the aggregated view: all stock of one logical item
///
/// Entries are rebuilt from scratch after every transfer and never
/// patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateEntry<I> {
    /// Display name
    pub name: String,

    /// Grouping key
    pub identity: ItemIdentity,

    /// Sum of all matching stacks across containers
    pub quantity: u32,

    /// Unit value of the representative, floored at zero
    pub unit_value: u64,

    /// Sum of quantity x unit value per stack, floored at zero
    pub total_value: u64,

    /// Copy of the first instance found; any instance of the identity
    /// serves as a transfer template
    pub representative: I,

    /// Location of the representative at rebuild time
    pub location: ItemLocation,
}
