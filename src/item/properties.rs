use serde::{Deserialize, Serialize};

/// Broad categories of items with type-specific data
///
/// The storage engine only cares whether a kind is indivisible; the
/// variants keep enough detail for hosts and the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemKind {
    /// Basic material (wood, stone, ore)
    #[default]
    Material,

    /// Edible or usable item
    Consumable,

    /// Worn item (rings, boots, hats)
    Equipment { slot: EquipmentSlot },

    /// Tool or weapon
    Tool { tool_type: ToolType },

    /// Placeable furniture
    Furniture,
}

impl ItemKind {
    /// Returns true for equipment-like kinds that move as a single unit
    pub fn is_indivisible(&self) -> bool {
        matches!(
            self,
            ItemKind::Equipment { .. } | ItemKind::Tool { .. } | ItemKind::Furniture
        )
    }
}

/// Equipment slots for worn items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Hat,
    Shirt,
    Pants,
    Boots,
    Ring,
}

/// Tool types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolType {
    Pickaxe,
    Axe,
    Hoe,
    WateringCan,
    FishingRod,
    Sword,  // Melee weapon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indivisible_kinds() {
        assert!(ItemKind::Tool { tool_type: ToolType::Axe }.is_indivisible());
        assert!(ItemKind::Equipment { slot: EquipmentSlot::Ring }.is_indivisible());
        assert!(ItemKind::Furniture.is_indivisible());
        assert!(!ItemKind::Material.is_indivisible());
        assert!(!ItemKind::Consumable.is_indivisible());
    }
}
