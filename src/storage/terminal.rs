use crate::config::TerminalConfig;
use crate::inventory::SlotOps;
use crate::item::{Capacity, HasStackIdentity, ItemCollection};

use super::aggregate::rebuild;
use super::entry::AggregateEntry;
use super::error::{Notification, TransferError};
use super::filter::filter_entries;
use super::policy::{requested_quantity, ClickAction, ClickSource};
use super::sort::{SortColumn, SortState};
use super::transfer::{
    collect_from_containers, take_indivisible, transfer_to_containers, WithdrawPolicy,
};

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A slot in the actor's personal inventory
    Inventory(usize),
    /// An index into the visible (sorted, filtered) entries
    Entry(usize),
}

/// Direction of a finished transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToContainers,
    ToInventory,
}

/// Summary of one transfer request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOutcome {
    pub direction: Direction,
    pub requested: u32,
    pub moved: u32,
}

/// The storage terminal: an aggregated, sortable, searchable view over a
/// set of containers, plus the click handlers that move stock between
/// them and an actor inventory
///
/// The container list is a snapshot for the lifetime of the terminal;
/// when the host's set of containers changes, build a new terminal.
/// Every mutating call ends with a full rebuild of the view.
pub struct StorageTerminal<C: ItemCollection> {
    containers: Vec<C>,
    sort: SortState,
    search_text: String,
    withdraw_policy: WithdrawPolicy,
    entries: Vec<AggregateEntry<C::Item>>,
    visible: Vec<AggregateEntry<C::Item>>,
    notifications: Vec<Notification>,
}

impl<C> StorageTerminal<C>
where
    C: ItemCollection + Capacity,
    C::Item: Clone,
{
    /// Creates a terminal over `containers` and builds the first view
    pub fn new(containers: Vec<C>, config: &TerminalConfig) -> Self {
        let mut terminal = StorageTerminal {
            containers,
            sort: SortState::new(config.default_sort, config.sort_ascending),
            search_text: String::new(),
            withdraw_policy: WithdrawPolicy {
                keep_last_unit: config.keep_last_unit,
            },
            entries: Vec::new(),
            visible: Vec::new(),
            notifications: Vec::new(),
        };
        terminal.refresh();
        terminal
    }

    // ======================================================================
    // View
    // ======================================================================

    /// Rebuilds the view, reapplying the current sort and search text
    pub fn refresh(&mut self) {
        self.entries = rebuild(&self.containers, self.sort.column, self.sort.ascending);
        self.visible = filter_entries(&self.entries, &self.search_text);
    }

    /// Sorted and filtered entries, as the UI should show them
    pub fn entries(&self) -> &[AggregateEntry<C::Item>] {
        &self.visible
    }

    /// Sorted entries ignoring the search text
    pub fn all_entries(&self) -> &[AggregateEntry<C::Item>] {
        &self.entries
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn set_sort(&mut self, column: SortColumn, ascending: bool) {
        self.sort = SortState::new(column, ascending);
        self.refresh();
    }

    /// Header click: flips direction on the active column, otherwise
    /// switches to `column` ascending
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        self.refresh();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Filters the full view by name; empty text shows everything
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.visible = filter_entries(&self.entries, &self.search_text);
    }

    pub fn containers(&self) -> &[C] {
        &self.containers
    }

    pub fn into_containers(self) -> Vec<C> {
        self.containers
    }

    /// Drains the notifications raised since the last call
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // ======================================================================
    // Click handling
    // ======================================================================

    /// Left click: move a whole stack (half with the modifier)
    pub fn handle_left_click<A>(
        &mut self,
        actor: &mut A,
        target: ClickTarget,
        modifier: bool,
    ) -> Result<TransferOutcome, TransferError>
    where
        A: ItemCollection<Item = C::Item> + Capacity,
    {
        self.handle_click(ClickAction::Primary, actor, target, modifier)
    }

    /// Right click: move one unit (ten with the modifier)
    pub fn handle_right_click<A>(
        &mut self,
        actor: &mut A,
        target: ClickTarget,
        modifier: bool,
    ) -> Result<TransferOutcome, TransferError>
    where
        A: ItemCollection<Item = C::Item> + Capacity,
    {
        self.handle_click(ClickAction::Secondary, actor, target, modifier)
    }

    fn handle_click<A>(
        &mut self,
        action: ClickAction,
        actor: &mut A,
        target: ClickTarget,
        modifier: bool,
    ) -> Result<TransferOutcome, TransferError>
    where
        A: ItemCollection<Item = C::Item> + Capacity,
    {
        let result = self.dispatch_click(action, actor, target, modifier);
        self.refresh();
        result
    }

    fn dispatch_click<A>(
        &mut self,
        action: ClickAction,
        actor: &mut A,
        target: ClickTarget,
        modifier: bool,
    ) -> Result<TransferOutcome, TransferError>
    where
        A: ItemCollection<Item = C::Item> + Capacity,
    {
        match target {
            ClickTarget::Inventory(slot) => {
                let len = actor.items().len();
                let stack = actor
                    .items()
                    .get(slot)
                    .ok_or(TransferError::SlotOutOfRange { slot, len })?;
                let quantity = requested_quantity(
                    action,
                    ClickSource::Inventory,
                    stack.quantity(),
                    stack.max_stack_size(),
                    modifier,
                );
                self.deposit_from_slot(actor, slot, quantity)
            }
            ClickTarget::Entry(index) => {
                let entry = self.visible_entry(index)?;
                let quantity = requested_quantity(
                    action,
                    ClickSource::Storage,
                    entry.quantity,
                    entry.representative.max_stack_size(),
                    modifier,
                );
                self.withdraw_entry(actor, index, quantity)
            }
        }
    }

    // ======================================================================
    // Transfers
    // ======================================================================

    /// Moves up to `quantity` units from an actor slot into storage
    ///
    /// A shortfall stays with the actor and raises
    /// `Notification::NoStorageSpace`.
    pub fn transfer_to_containers<A>(
        &mut self,
        actor: &mut A,
        slot: usize,
        quantity: u32,
    ) -> Result<TransferOutcome, TransferError>
    where
        A: ItemCollection<Item = C::Item>,
    {
        let result = self.deposit_from_slot(actor, slot, quantity);
        self.refresh();
        result
    }

    /// Moves up to `quantity` units of a visible entry into the actor
    ///
    /// The request is capped at the room left in the actor inventory;
    /// under-delivery is reported through `TransferOutcome::moved` only.
    pub fn transfer_to_inventory<A>(
        &mut self,
        actor: &mut A,
        index: usize,
        quantity: u32,
    ) -> Result<TransferOutcome, TransferError>
    where
        A: ItemCollection<Item = C::Item> + Capacity,
    {
        let result = self.withdraw_entry(actor, index, quantity);
        self.refresh();
        result
    }

    fn visible_entry(&self, index: usize) -> Result<&AggregateEntry<C::Item>, TransferError> {
        self.visible.get(index).ok_or(TransferError::EntryOutOfRange {
            index,
            len: self.visible.len(),
        })
    }

    fn deposit_from_slot<A>(
        &mut self,
        actor: &mut A,
        slot: usize,
        quantity: u32,
    ) -> Result<TransferOutcome, TransferError>
    where
        A: ItemCollection<Item = C::Item>,
    {
        let name = actor.items().get(slot).map(|stack| stack.display_name());
        let report = transfer_to_containers(&mut self.containers, actor, slot, quantity)?;

        if !report.is_complete() {
            let item = name.unwrap_or_default();
            tracing::info!(item = %item, remaining = report.shortfall(), "no storage space left");
            self.notifications.push(Notification::NoStorageSpace {
                item,
                remaining: report.shortfall(),
            });
        }

        Ok(TransferOutcome {
            direction: Direction::ToContainers,
            requested: report.requested,
            moved: report.transferred,
        })
    }

    fn withdraw_entry<A>(
        &mut self,
        actor: &mut A,
        index: usize,
        quantity: u32,
    ) -> Result<TransferOutcome, TransferError>
    where
        A: ItemCollection<Item = C::Item> + Capacity,
    {
        if quantity == 0 {
            return Err(TransferError::InvalidQuantity);
        }

        let entry = self.visible_entry(index)?.clone();
        if entry.representative.is_indivisible() {
            return self.withdraw_single(actor, &entry, quantity);
        }

        let room = actor.room_for(&entry.representative);
        let capped = quantity.min(room);
        if capped == 0 {
            self.notifications.push(Notification::InventoryFull { item: entry.name.clone() });
            return Ok(TransferOutcome {
                direction: Direction::ToInventory,
                requested: quantity,
                moved: 0,
            });
        }

        let collected = collect_from_containers(
            &mut self.containers,
            &entry.identity,
            capped,
            self.withdraw_policy,
        )?;

        // Capped to room_for above, so every collected unit fits
        let mut moved = 0;
        for item in collected {
            let units = item.quantity();
            let leftover = actor.deposit(&item, units);
            debug_assert_eq!(leftover, 0);
            moved += units - leftover;
        }

        tracing::info!(item = %entry.name, requested = quantity, moved, "withdrew from storage");

        Ok(TransferOutcome {
            direction: Direction::ToInventory,
            requested: quantity,
            moved,
        })
    }

    fn withdraw_single<A>(
        &mut self,
        actor: &mut A,
        entry: &AggregateEntry<C::Item>,
        requested: u32,
    ) -> Result<TransferOutcome, TransferError>
    where
        A: ItemCollection<Item = C::Item> + Capacity,
    {
        let mut outcome = TransferOutcome {
            direction: Direction::ToInventory,
            requested,
            moved: 0,
        };

        if actor.is_full() {
            self.notifications.push(Notification::InventoryFull { item: entry.name.clone() });
            return Ok(outcome);
        }

        let item = take_indivisible(&mut self.containers, entry.location, &entry.identity)?;
        match actor.place(item) {
            Ok(_) => outcome.moved = 1,
            Err(item) => {
                // Only reachable if the actor filled up in between
                self.containers[entry.location.container]
                    .items_mut()
                    .insert(entry.location.slot, item);
            }
        }

        tracing::info!(item = %entry.name, moved = outcome.moved, "moved indivisible item");
        Ok(outcome)
    }
}
