//! Moving stock between the container set and an actor inventory
//!
//! Both directions pick containers in a fixed order that is part of the
//! contract: deposits fill the containers already holding the most of an
//! item first, withdrawals drain the ones holding the least first.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::inventory::SlotOps;
use crate::item::{Capacity, HasStackIdentity, ItemCollection, ItemIdentity};

use super::entry::ItemLocation;
use super::error::TransferError;

/// How a deposit pass went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositReport {
    /// Units asked for, clamped to what the actor held
    pub requested: u32,

    /// Units that ended up in containers
    pub transferred: u32,
}

impl DepositReport {
    /// Units that stayed with the actor for lack of space
    pub fn shortfall(&self) -> u32 {
        self.requested - self.transferred
    }

    pub fn is_complete(&self) -> bool {
        self.shortfall() == 0
    }
}

/// Withdrawal rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawPolicy {
    /// When draining the last candidate container, never empty a stack of
    /// more than one unit: one unit stays behind
    pub keep_last_unit: bool,
}

impl Default for WithdrawPolicy {
    fn default() -> Self {
        WithdrawPolicy { keep_last_unit: true }
    }
}

/// Indices of containers the host still considers live
///
/// Taken once at the start of every pass.
pub fn live_containers<C: ItemCollection>(containers: &[C]) -> Vec<usize> {
    containers
        .iter()
        .enumerate()
        .filter(|(_, container)| container.is_available())
        .map(|(index, _)| index)
        .collect()
}

fn holdings<C>(containers: &[C], identity: &ItemIdentity) -> Vec<(usize, u32)>
where
    C: ItemCollection + Capacity,
{
    live_containers(containers)
        .into_iter()
        .map(|index| (index, containers[index].count_of(identity)))
        .collect()
}

/// Deposit order: containers holding the item, most stock first, then
/// the remaining live containers in list order
pub fn deposit_order<C>(containers: &[C], identity: &ItemIdentity) -> Vec<usize>
where
    C: ItemCollection + Capacity,
{
    let (mut holding, empty): (Vec<_>, Vec<_>) = holdings(containers, identity)
        .into_iter()
        .partition(|&(_, count)| count > 0);

    holding.sort_by_key(|&(_, count)| Reverse(count));

    holding
        .into_iter()
        .chain(empty)
        .map(|(index, _)| index)
        .collect()
}

/// Withdrawal order: containers holding the item, least stock first
pub fn withdraw_order<C>(containers: &[C], identity: &ItemIdentity) -> Vec<usize>
where
    C: ItemCollection + Capacity,
{
    let mut holding: Vec<_> = holdings(containers, identity)
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .collect();

    holding.sort_by_key(|&(_, count)| count);
    holding.into_iter().map(|(index, _)| index).collect()
}

/// Deposits up to `quantity` units of a template item across containers
///
/// Returns the units that found no room.
pub fn deposit_across<C>(containers: &mut [C], template: &C::Item, quantity: u32) -> u32
where
    C: ItemCollection + Capacity,
{
    let identity = template.identity();
    let mut remaining = quantity;

    for index in deposit_order(containers, &identity) {
        if remaining == 0 {
            break;
        }

        let before = remaining;
        remaining = containers[index].deposit(template, remaining);
        if remaining < before {
            tracing::debug!(container = index, accepted = before - remaining, item = %identity, "deposited");
        }
    }

    remaining
}

/// Moves up to `quantity` units from an actor slot into the containers
///
/// The request is clamped to the stack held in `slot`. Whatever does not
/// fit stays in the actor's stack; a stack that reaches zero is removed.
pub fn transfer_to_containers<C, A>(
    containers: &mut [C],
    actor: &mut A,
    slot: usize,
    quantity: u32,
) -> Result<DepositReport, TransferError>
where
    C: ItemCollection + Capacity,
    A: ItemCollection<Item = C::Item>,
{
    if quantity == 0 {
        return Err(TransferError::InvalidQuantity);
    }

    let len = actor.items().len();
    let source = actor
        .items()
        .get(slot)
        .ok_or(TransferError::SlotOutOfRange { slot, len })?;

    let held = source.quantity();
    let requested = quantity.min(held);
    let template = source.with_quantity(1);

    let remaining = deposit_across(containers, &template, requested);
    let transferred = requested - remaining;

    let items = actor.items_mut();
    if held - transferred == 0 {
        items.remove(slot);
    } else {
        items[slot].set_quantity(held - transferred);
    }

    Ok(DepositReport { requested, transferred })
}

/// Takes up to `quantity` units of an item out of the containers
///
/// Each container's stacks are walked from the last slot to the first so
/// removals never shift a slot still to be visited. Every partial take
/// becomes a new split stack in the returned list; emptied source stacks
/// are removed. Returns fewer units than requested when stock runs out.
pub fn collect_from_containers<C>(
    containers: &mut [C],
    identity: &ItemIdentity,
    quantity: u32,
    policy: WithdrawPolicy,
) -> Result<Vec<C::Item>, TransferError>
where
    C: ItemCollection + Capacity,
{
    if quantity == 0 {
        return Err(TransferError::InvalidQuantity);
    }

    let order = withdraw_order(containers, identity);
    let last = order.last().copied();
    let mut collected = Vec::new();
    let mut remaining = quantity;

    for index in order {
        let is_last = Some(index) == last;
        let items = containers[index].items_mut();

        for slot in (0..items.len()).rev() {
            if remaining == 0 {
                break;
            }

            let stack = &mut items[slot];
            if !stack.stacks_with(identity) {
                continue;
            }

            let held = stack.quantity();
            let mut take = held.min(remaining);
            if policy.keep_last_unit && is_last && held > 1 && take >= held {
                take = held - 1;
            }
            if take == 0 {
                continue;
            }

            remaining -= take;
            collected.push(stack.with_quantity(take));

            if take == held {
                items.remove(slot);
            } else {
                stack.set_quantity(held - take);
            }
        }

        tracing::debug!(container = index, remaining, item = %identity, "drained container");

        if remaining == 0 {
            break;
        }
    }

    Ok(collected)
}

/// Removes the single indivisible instance at `location`
///
/// Fails with `StaleEntry` when the container is gone or the slot no
/// longer holds the expected item.
pub fn take_indivisible<C>(
    containers: &mut [C],
    location: ItemLocation,
    identity: &ItemIdentity,
) -> Result<C::Item, TransferError>
where
    C: ItemCollection,
{
    let stale = || TransferError::StaleEntry(identity.name.clone());

    let container = containers
        .get_mut(location.container)
        .filter(|container| container.is_available())
        .ok_or_else(stale)?;

    let matches = container
        .items()
        .get(location.slot)
        .is_some_and(|item| item.stacks_with(identity));
    if !matches {
        return Err(stale());
    }

    Ok(container.items_mut().remove(location.slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Chest;
    use crate::storage::fixtures::{actor, chest, pickaxe, stone, total_units, wood};

    #[test]
    fn test_withdraw_prefers_smallest_pile() {
        // Two chests: 40 and 10 Wood; take 5
        let mut chests = vec![chest(4, vec![wood(40)]), chest(4, vec![wood(10)])];
        let taken = collect_from_containers(&mut chests, &wood(1).identity, 5, WithdrawPolicy::default()).unwrap();

        assert_eq!(taken.iter().map(|s| s.quantity).sum::<u32>(), 5);
        assert_eq!(chests[0].count_of(&wood(1).identity), 40);
        assert_eq!(chests[1].count_of(&wood(1).identity), 5);
    }

    #[test]
    fn test_withdraw_walks_slots_in_reverse() {
        let mut chests = vec![chest(4, vec![wood(3), stone(1), wood(4)])];
        let taken = collect_from_containers(&mut chests, &wood(1).identity, 5, WithdrawPolicy { keep_last_unit: false }).unwrap();

        assert_eq!(taken.iter().map(|s| s.quantity).collect::<Vec<_>>(), vec![4, 1]);
        assert_eq!(chests[0].items, vec![wood(2), stone(1)]);
    }

    #[test]
    fn test_withdraw_keeps_one_unit_in_last_container() {
        let mut chests = vec![chest(4, vec![wood(3)]), chest(4, vec![wood(10)])];
        let taken = collect_from_containers(&mut chests, &wood(1).identity, 13, WithdrawPolicy::default()).unwrap();

        // The smaller chest empties fully; the last one keeps a unit
        assert_eq!(taken.iter().map(|s| s.quantity).sum::<u32>(), 12);
        assert!(chests[0].is_empty());
        assert_eq!(chests[1].items, vec![wood(1)]);
    }

    #[test]
    fn test_withdraw_single_unit_stack_can_empty() {
        let mut chests = vec![chest(4, vec![wood(1)])];
        let taken = collect_from_containers(&mut chests, &wood(1).identity, 1, WithdrawPolicy::default()).unwrap();

        assert_eq!(taken, vec![wood(1)]);
        assert!(chests[0].is_empty());
    }

    #[test]
    fn test_withdraw_without_policy_drains_everything() {
        let mut chests = vec![chest(4, vec![wood(10)])];
        let taken = collect_from_containers(&mut chests, &wood(1).identity, 10, WithdrawPolicy { keep_last_unit: false }).unwrap();

        assert_eq!(taken, vec![wood(10)]);
        assert!(chests[0].is_empty());
    }

    #[test]
    fn test_withdraw_never_overdraws() {
        let mut chests = vec![chest(4, vec![wood(2)]), chest(4, vec![wood(3)])];
        let taken = collect_from_containers(&mut chests, &wood(1).identity, 500, WithdrawPolicy { keep_last_unit: false }).unwrap();

        assert_eq!(taken.iter().map(|s| s.quantity).sum::<u32>(), 5);
        assert!(chests.iter().all(Chest::is_empty));
    }

    #[test]
    fn test_withdraw_zero_fails_fast() {
        let mut chests = vec![chest(4, vec![wood(2)])];
        let result = collect_from_containers(&mut chests, &wood(1).identity, 0, WithdrawPolicy::default());

        assert_eq!(result, Err(TransferError::InvalidQuantity));
        assert_eq!(chests[0].items, vec![wood(2)]);
    }

    #[test]
    fn test_deposit_prefers_largest_pile() {
        let mut chests = vec![
            chest(4, vec![stone(5)]),
            chest(4, vec![stone(50)]),
            chest(4, vec![]),
        ];
        let mut player = actor(vec![stone(20)]);

        let report = transfer_to_containers(&mut chests, &mut player, 0, 20).unwrap();

        assert!(report.is_complete());
        assert_eq!(chests[1].count_of(&stone(1).identity), 70);
        assert_eq!(chests[0].count_of(&stone(1).identity), 5);
        assert!(player.items.is_empty());
    }

    #[test]
    fn test_deposit_falls_back_to_containers_without_the_item() {
        // First chest is full of other things, second has three free slots
        let mut chests = vec![
            chest(2, vec![wood(1), wood(1)]),
            chest(3, vec![]),
        ];
        let mut player = actor(vec![stone(50)]);

        let report = transfer_to_containers(&mut chests, &mut player, 0, 50).unwrap();

        assert_eq!(report, DepositReport { requested: 50, transferred: 50 });
        assert_eq!(chests[1].items, vec![stone(50)]);
        assert_eq!(chests[0].items.len(), 2);
    }

    #[test]
    fn test_deposit_shortfall_stays_with_actor() {
        let mut small = stone(1);
        small.max_stack_size = 10;
        let mut chests = vec![chest(2, vec![small.with_quantity(10)]), chest(1, vec![wood(3)])];
        let mut player = actor(vec![small.with_quantity(25)]);

        let report = transfer_to_containers(&mut chests, &mut player, 0, 25).unwrap();

        assert_eq!(report.transferred, 10);
        assert_eq!(report.shortfall(), 15);
        assert_eq!(player.items[0].quantity, 15);
        // No overfill
        assert!(chests.iter().all(|c| c.items.len() <= c.capacity));
        assert!(chests.iter().flat_map(|c| c.items.iter()).all(|s| s.quantity <= s.max_stack_size));
    }

    #[test]
    fn test_deposit_conserves_units() {
        let mut chests = vec![chest(3, vec![stone(900)]), chest(3, vec![stone(10), wood(5)])];
        let mut player = actor(vec![stone(500)]);
        let before = total_units(&chests, &player, &stone(1).identity);

        transfer_to_containers(&mut chests, &mut player, 0, 500).unwrap();

        assert_eq!(total_units(&chests, &player, &stone(1).identity), before);
        assert!(player.items.is_empty());
    }

    #[test]
    fn test_deposit_clamps_to_held_stack() {
        let mut chests = vec![chest(3, vec![])];
        let mut player = actor(vec![stone(4)]);

        let report = transfer_to_containers(&mut chests, &mut player, 0, 100).unwrap();
        assert_eq!(report.requested, 4);
        assert!(player.items.is_empty());
    }

    #[test]
    fn test_deposit_rejects_bad_input() {
        let mut chests = vec![chest(3, vec![])];
        let mut player = actor(vec![stone(4)]);

        assert_eq!(
            transfer_to_containers(&mut chests, &mut player, 0, 0),
            Err(TransferError::InvalidQuantity)
        );
        assert_eq!(
            transfer_to_containers(&mut chests, &mut player, 3, 1),
            Err(TransferError::SlotOutOfRange { slot: 3, len: 1 })
        );
    }

    #[test]
    fn test_destroyed_container_is_skipped() {
        let mut chests = vec![chest(3, vec![stone(1)]), chest(3, vec![])];
        chests[0].destroy();
        let mut player = actor(vec![stone(4)]);

        transfer_to_containers(&mut chests, &mut player, 0, 4).unwrap();
        assert_eq!(chests[0].items, vec![stone(1)]);
        assert_eq!(chests[1].items, vec![stone(4)]);
    }

    #[test]
    fn test_take_indivisible_checks_location() {
        let mut chests = vec![chest(3, vec![wood(2), pickaxe()])];
        let identity = pickaxe().identity;

        let stale = take_indivisible(&mut chests, ItemLocation { container: 0, slot: 0 }, &identity);
        assert!(matches!(stale, Err(TransferError::StaleEntry(_))));

        let tool = take_indivisible(&mut chests, ItemLocation { container: 0, slot: 1 }, &identity).unwrap();
        assert_eq!(tool, pickaxe());
        assert_eq!(chests[0].items, vec![wood(2)]);
    }
}
