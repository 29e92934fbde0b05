//! Which chests a terminal links to
//!
//! Players mark chests by placement. In blacklist mode (the default)
//! marked chests are left out of the network; in whitelist mode only
//! marked chests are linked.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::inventory::{Placed, Placement};

/// The set of marked chest placements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChestFilter {
    entries: BTreeSet<Placement>,
}

impl ChestFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, placement: &Placement) -> bool {
        self.entries.contains(placement)
    }

    /// Marks a chest; returns false if it was already marked
    pub fn add(&mut self, placement: Placement) -> bool {
        self.entries.insert(placement)
    }

    /// Unmarks a chest; returns false if it wasn't marked
    pub fn remove(&mut self, placement: &Placement) -> bool {
        self.entries.remove(placement)
    }

    /// Unions another filter into this one (e.g. one received from a peer)
    pub fn merge(&mut self, other: ChestFilter) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.entries.iter()
    }

    /// Returns true if a chest at `placement` belongs to the network
    pub fn is_included(&self, placement: &Placement, use_whitelist: bool) -> bool {
        self.contains(placement) == use_whitelist
    }
}

impl FromIterator<Placement> for ChestFilter {
    fn from_iter<T: IntoIterator<Item = Placement>>(iter: T) -> Self {
        ChestFilter {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Keeps the containers the filter includes, keeping their order
pub fn select_containers<C, I>(containers: I, filter: &ChestFilter, use_whitelist: bool) -> Vec<C>
where
    C: Placed,
    I: IntoIterator<Item = C>,
{
    let selected: Vec<C> = containers
        .into_iter()
        .filter(|container| filter.is_included(&container.placement(), use_whitelist))
        .collect();

    tracing::debug!(selected = selected.len(), marked = filter.len(), use_whitelist, "selected containers");
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Chest;

    fn chests() -> Vec<Chest> {
        vec![
            Chest::placed(Placement::new("Farm", 1, 1), 36),
            Chest::placed(Placement::new("Farm", 2, 1), 36),
            Chest::placed(Placement::new("Shed", 4, 4), 36),
        ]
    }

    fn marked() -> ChestFilter {
        [Placement::new("Farm", 2, 1)].into_iter().collect()
    }

    #[test]
    fn test_blacklist_drops_marked_chests() {
        let selected = select_containers(chests(), &marked(), false);
        let places: Vec<String> = selected.iter().map(|c| c.placement.to_string()).collect();

        assert_eq!(places, vec!["Farm:1:1", "Shed:4:4"]);
    }

    #[test]
    fn test_whitelist_keeps_only_marked_chests() {
        let selected = select_containers(chests(), &marked(), true);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].placement, Placement::new("Farm", 2, 1));
    }

    #[test]
    fn test_select_borrowed_chests() {
        let mut owned = chests();
        let selected = select_containers(owned.iter_mut(), &marked(), false);

        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_add_remove_merge() {
        let mut filter = ChestFilter::new();
        assert!(filter.add(Placement::new("Farm", 0, 0)));
        assert!(!filter.add(Placement::new("Farm", 0, 0)));

        filter.merge(marked());
        assert_eq!(filter.len(), 2);

        assert!(filter.remove(&Placement::new("Farm", 0, 0)));
        assert!(!filter.remove(&Placement::new("Farm", 0, 0)));
        assert_eq!(filter, marked());
    }
}
