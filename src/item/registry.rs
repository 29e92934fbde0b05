use std::collections::HashMap;

use super::definition::ItemDefinition;
use super::properties::*;
use super::stack::ItemStack;

/// Errors raised while registering item definitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("item '{0}' already registered")]
    Duplicate(String),
}

/// Central catalog of item definitions
///
/// Hosts with their own item types don't need this; it backs the
/// console binary and makes building realistic stacks cheap.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, ItemDefinition>,
}

impl ItemCatalog {
    /// Creates a new empty catalog
    pub fn new() -> Self {
        ItemCatalog {
            items: HashMap::new(),
        }
    }

    /// Creates a catalog with the common farm items pre-registered
    pub fn create_default() -> Self {
        let mut catalog = Self::new();

        for definition in base_items() {
            // Ids in base_items() are unique
            let _ = catalog.register(definition);
        }

        catalog
    }

    /// Registers a new item definition
    ///
    /// Returns error if an item with this ID already exists.
    pub fn register(&mut self, item: ItemDefinition) -> Result<(), CatalogError> {
        if self.items.contains_key(&item.id) {
            return Err(CatalogError::Duplicate(item.id));
        }

        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Gets an item definition by ID
    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    /// Builds a stack of a registered item
    ///
    /// Returns None if no item with this ID exists.
    pub fn stack(&self, id: &str, quantity: u32, quality: u8) -> Option<ItemStack> {
        self.get(id).map(|definition| definition.stack(quantity, quality))
    }
}

// ======================================================================
// Base items
// ======================================================================

fn base_items() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition::new("wood", "Wood", -16, "388", 999, 2, ItemKind::Material),
        ItemDefinition::new("stone", "Stone", -16, "390", 999, 2, ItemKind::Material),
        ItemDefinition::new("copper_ore", "Copper Ore", -15, "378", 999, 5, ItemKind::Material),
        ItemDefinition::new("parsnip", "Parsnip", -75, "24", 999, 35, ItemKind::Consumable),
        ItemDefinition::new("sap", "Sap", -81, "92", 999, 2, ItemKind::Material),
        ItemDefinition::new(
            "copper_pickaxe",
            "Copper Pickaxe",
            0,
            "(T)CopperPickaxe",
            1,
            0,
            ItemKind::Tool { tool_type: ToolType::Pickaxe },
        ),
        ItemDefinition::new(
            "rusty_sword",
            "Rusty Sword",
            -98,
            "(W)0",
            1,
            50,
            ItemKind::Tool { tool_type: ToolType::Sword },
        ),
        ItemDefinition::new(
            "small_glow_ring",
            "Small Glow Ring",
            -96,
            "516",
            1,
            100,
            ItemKind::Equipment { slot: EquipmentSlot::Ring },
        ),
        ItemDefinition::new(
            "sneakers",
            "Sneakers",
            -97,
            "(B)504",
            1,
            50,
            ItemKind::Equipment { slot: EquipmentSlot::Boots },
        ),
        ItemDefinition::new("oak_chair", "Oak Chair", -24, "(F)0", 1, 175, ItemKind::Furniture),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::HasStackIdentity;

    #[test]
    fn test_default_catalog_stacks() {
        let catalog = ItemCatalog::create_default();
        let parsnips = catalog.stack("parsnip", 12, 2).unwrap();

        assert_eq!(parsnips.quantity, 12);
        assert_eq!(parsnips.identity.quality, 2);
        assert!(!parsnips.is_indivisible());
        assert!(catalog.stack("rusty_sword", 1, 0).unwrap().is_indivisible());
        assert!(catalog.stack("missing", 1, 0).is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut catalog = ItemCatalog::create_default();
        let result = catalog.register(ItemDefinition::new(
            "wood", "Wood", -16, "388", 999, 2, ItemKind::Material,
        ));

        assert_eq!(result, Err(CatalogError::Duplicate("wood".to_string())));
    }
}
