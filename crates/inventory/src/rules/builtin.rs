use rosestock_core::{InventoryResult, Item, LEGENDARY_QUALITY};

use super::{UpdateRule, decrease_days, decrease_quality, increase_quality};

/// Default rule: loses 1 quality per day, 2 once past due.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ordinary;

impl UpdateRule for Ordinary {
    fn name(&self) -> &'static str {
        "ordinary"
    }

    fn update(&self, item: &mut Item) -> InventoryResult<()> {
        decrease_quality(item);
        decrease_days(item)?;

        // Past-due check runs after the decrement.
        if item.days_remaining < 0 {
            decrease_quality(item);
        }
        Ok(())
    }
}

/// Gains 1 quality per day, 2 once past due.
#[derive(Debug, Default, Clone, Copy)]
pub struct Appreciating;

impl UpdateRule for Appreciating {
    fn name(&self) -> &'static str {
        "appreciating"
    }

    fn update(&self, item: &mut Item) -> InventoryResult<()> {
        increase_quality(item);
        decrease_days(item)?;

        if item.days_remaining < 0 {
            increase_quality(item);
        }
        Ok(())
    }
}

/// Never sold, never degrades. Quality is pinned.
#[derive(Debug, Default, Clone, Copy)]
pub struct Legendary;

impl UpdateRule for Legendary {
    fn name(&self) -> &'static str {
        "legendary"
    }

    fn update(&self, item: &mut Item) -> InventoryResult<()> {
        item.quality = LEGENDARY_QUALITY;
        Ok(())
    }
}

/// Gains value as the event approaches; worthless once it has happened.
///
/// Thresholds are checked against the days remaining *before* today's decrement.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventTicket;

impl UpdateRule for EventTicket {
    fn name(&self) -> &'static str {
        "event_ticket"
    }

    fn update(&self, item: &mut Item) -> InventoryResult<()> {
        let steps = match item.days_remaining {
            d if d > 10 => 1,
            d if d > 5 => 2,
            d if d > 0 => 3,
            _ => 0,
        };

        if steps == 0 {
            item.quality = 0;
        } else {
            for _ in 0..steps {
                increase_quality(item);
            }
        }

        decrease_days(item)?;
        Ok(())
    }
}

/// Degrades twice as fast as ordinary items: 2 per day, 4 once past due.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceleratedDecay;

impl UpdateRule for AcceleratedDecay {
    fn name(&self) -> &'static str {
        "accelerated_decay"
    }

    fn update(&self, item: &mut Item) -> InventoryResult<()> {
        decrease_quality(item);
        decrease_quality(item);
        decrease_days(item)?;

        if item.days_remaining < 0 {
            decrease_quality(item);
            decrease_quality(item);
        }
        Ok(())
    }
}
