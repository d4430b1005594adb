//! Per-category update rules.
//!
//! A rule advances a single item by one day. Rules are stateless; the shared
//! arithmetic lives in the free functions below so every rule clamps the same
//! way.

mod builtin;

pub use builtin::{AcceleratedDecay, Appreciating, EventTicket, Legendary, Ordinary};

use rosestock_core::{InventoryError, InventoryResult, Item, MAX_QUALITY, MIN_QUALITY};

/// Advances one item by one elapsed day.
///
/// Built-in rules fail only when the day counter would underflow. Rules
/// registered at runtime may fail for their own reasons; the engine turns any
/// error into an update failure for the batch.
pub trait UpdateRule: Send + Sync + core::fmt::Debug {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    fn update(&self, item: &mut Item) -> InventoryResult<()>;
}

/// Raise quality by one, unless already at the ceiling.
pub fn increase_quality(item: &mut Item) {
    if item.quality < MAX_QUALITY {
        item.quality += 1;
    }
}

/// Lower quality by one, unless already at the floor.
pub fn decrease_quality(item: &mut Item) {
    if item.quality > MIN_QUALITY {
        item.quality -= 1;
    }
}

/// One day passes. May go negative (past due), but never wraps.
pub fn decrease_days(item: &mut Item) -> InventoryResult<()> {
    let Some(days_remaining) = item.days_remaining.checked_sub(1) else {
        return Err(InventoryError::rule_failed(format!(
            "days_remaining underflow for '{}' at {}",
            item.category(),
            item.days_remaining
        )));
    };
    item.days_remaining = days_remaining;
    Ok(())
}
