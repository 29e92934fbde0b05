/// Units moved by a secondary action
pub const SECONDARY_STEP: u32 = 1;

/// Units moved by a secondary action with the modifier held
pub const SECONDARY_STEP_MODIFIED: u32 = 10;

/// Which mouse action triggered a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Left click
    Primary,
    /// Right click
    Secondary,
}

/// Where the clicked stock currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickSource {
    /// A stack in the actor's personal inventory
    Inventory,
    /// An aggregated entry in storage
    Storage,
}

/// Derives the quantity a click asks to move
///
/// `available` is the clicked stack (inventory) or the aggregate total
/// (storage).
///
/// - Primary on inventory: the whole stack; half (at least 1) with modifier
/// - Primary on storage: one full stack at most; half of that (at least 1)
///   with modifier
/// - Secondary: 1, or 10 with modifier, never more than is available and
///   never more than a stack minus one
///
/// Returns 0 only when nothing is available.
pub fn requested_quantity(
    action: ClickAction,
    source: ClickSource,
    available: u32,
    max_stack_size: u32,
    modifier: bool,
) -> u32 {
    if available == 0 {
        return 0;
    }

    match (action, source) {
        (ClickAction::Primary, ClickSource::Inventory) => {
            if modifier { (available / 2).max(1) } else { available }
        }
        (ClickAction::Primary, ClickSource::Storage) => {
            let capped = available.min(max_stack_size.max(1));
            if modifier { (capped / 2).max(1) } else { capped }
        }
        (ClickAction::Secondary, _) => {
            let step = if modifier { SECONDARY_STEP_MODIFIED } else { SECONDARY_STEP };
            // Single-unit items would otherwise clamp to zero
            let stack_bound = max_stack_size.saturating_sub(1).max(1);
            step.min(available).min(stack_bound)
        }
    }
}
