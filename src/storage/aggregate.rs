use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::item::{HasStackIdentity, ItemCollection, ItemIdentity};

use super::entry::{AggregateEntry, ItemLocation};
use super::sort::{sort_entries, SortColumn};

/// Rebuilds the aggregated view over a container list
///
/// Every stack in every available container is grouped by logical
/// identity. The first instance found becomes the entry's representative
/// and fixes its unit value; later instances only add quantity and
/// value. Prices below zero count as zero. The result is sorted by
/// `column`/`ascending`.
///
/// Read-only: containers are never touched. Duplicated containers in
/// the list are counted twice.
pub fn rebuild<C>(containers: &[C], column: SortColumn, ascending: bool) -> Vec<AggregateEntry<C::Item>>
where
    C: ItemCollection,
    C::Item: Clone,
{
    let mut index: HashMap<ItemIdentity, usize> = HashMap::new();
    let mut entries: Vec<AggregateEntry<C::Item>> = Vec::new();

    for (container_index, container) in containers.iter().enumerate() {
        if !container.is_available() {
            continue;
        }

        for (slot, item) in container.items().iter().enumerate() {
            let quantity = item.quantity();
            if quantity == 0 {
                continue;
            }

            let unit_value = clamp_value(item.unit_value());
            let stack_value = unit_value.saturating_mul(u64::from(quantity));

            match index.entry(item.identity()) {
                Entry::Occupied(existing) => {
                    let entry = &mut entries[*existing.get()];
                    entry.quantity = entry.quantity.saturating_add(quantity);
                    entry.total_value = entry.total_value.saturating_add(stack_value);
                }
                Entry::Vacant(vacant) => {
                    let identity = vacant.key().clone();
                    vacant.insert(entries.len());
                    entries.push(AggregateEntry {
                        name: item.display_name(),
                        identity,
                        quantity,
                        unit_value,
                        total_value: stack_value,
                        representative: item.clone(),
                        location: ItemLocation {
                            container: container_index,
                            slot,
                        },
                    });
                }
            }
        }
    }

    sort_entries(&mut entries, column, ascending);

    tracing::debug!(
        containers = containers.len(),
        entries = entries.len(),
        "rebuilt aggregated storage view"
    );

    entries
}

/// Floors a host price at zero
fn clamp_value(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemStack;
    use crate::storage::fixtures::{chest, identity, pickaxe, stack, stone, wood};

    #[test]
    fn test_same_item_in_different_chests_groups() {
        let chests = vec![chest(4, vec![wood(40)]), chest(4, vec![wood(10), stone(3)])];
        let entries = rebuild(&chests, SortColumn::Name, true);

        assert_eq!(entries.len(), 2);
        let wood_entry = entries.iter().find(|e| e.name == "Wood").unwrap();
        assert_eq!(wood_entry.quantity, 50);
        assert_eq!(wood_entry.total_value, 100);
        assert_eq!(wood_entry.location, ItemLocation { container: 0, slot: 0 });
    }

    #[test]
    fn test_quality_tiers_stay_separate() {
        let mut gold = wood(5);
        gold.identity = gold.identity.with_quality(2);
        let chests = vec![chest(4, vec![wood(5), gold])];

        let entries = rebuild(&chests, SortColumn::Quantity, true);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.quantity == 5));
    }

    #[test]
    fn test_negative_prices_clamp_to_zero() {
        let mut cursed = stack("Cursed Idol", 4);
        cursed.unit_value = -30;
        let entries = rebuild(&[chest(1, vec![cursed])], SortColumn::Name, true);

        assert_eq!(entries[0].unit_value, 0);
        assert_eq!(entries[0].total_value, 0);
    }

    #[test]
    fn test_representative_and_unit_value_not_replaced() {
        let first = ItemStack::new(identity("Wood"), 3, 999, 2);
        let mut second = ItemStack::new(identity("Wood"), 4, 999, 2);
        second.unit_value = 7;  // Same identity, different host price

        let entries = rebuild(&[chest(2, vec![first.clone(), second])], SortColumn::Name, true);
        assert_eq!(entries[0].representative, first);
        assert_eq!(entries[0].unit_value, 2);
        assert_eq!(entries[0].total_value, 3 * 2 + 4 * 7);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let chests = vec![
            chest(4, vec![wood(40), pickaxe()]),
            chest(4, vec![stone(7), wood(1)]),
        ];

        let first = rebuild(&chests, SortColumn::TotalValue, false);
        let second = rebuild(&chests, SortColumn::TotalValue, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_destroyed_and_empty_containers_contribute_nothing() {
        let mut destroyed = chest(4, vec![stone(99)]);
        destroyed.destroy();
        let chests = vec![chest(4, vec![]), destroyed, chest(4, vec![wood(0)])];

        assert!(rebuild(&chests, SortColumn::Name, true).is_empty());
        assert!(rebuild::<crate::inventory::Chest>(&[], SortColumn::Name, true).is_empty());
    }
}
