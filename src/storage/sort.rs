use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::entry::AggregateEntry;

/// Column the aggregated view is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortColumn {
    #[default]
    Name,
    Quantity,
    UnitValue,
    TotalValue,
}

/// Caller-held sort state, reapplied after every rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub ascending: bool,
}

impl SortState {
    pub fn new(column: SortColumn, ascending: bool) -> Self {
        SortState { column, ascending }
    }

    /// Header-click behaviour: same column flips direction, a new
    /// column starts ascending
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.ascending = !self.ascending;
        } else {
            self.column = column;
            self.ascending = true;
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        SortState::new(SortColumn::Name, true)
    }
}

/// Sorts entries in place by one column
///
/// Stable: ties keep their insertion order in both directions.
/// Names compare case-insensitively.
pub fn sort_entries<I>(entries: &mut [AggregateEntry<I>], column: SortColumn, ascending: bool) {
    entries.sort_by(|a, b| {
        let ordering = compare(a, b, column);
        if ascending { ordering } else { ordering.reverse() }
    });
}

fn compare<I>(a: &AggregateEntry<I>, b: &AggregateEntry<I>, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortColumn::Quantity => a.quantity.cmp(&b.quantity),
        SortColumn::UnitValue => a.unit_value.cmp(&b.unit_value),
        SortColumn::TotalValue => a.total_value.cmp(&b.total_value),
    }
}
