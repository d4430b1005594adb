//! Inventory engine: advances a collection of items one day at a time.

use std::sync::Arc;

use serde_json::Value as JsonValue;

use rosestock_core::{
    DiagnosticSink, FailureRecord, InventoryError, InventoryResult, Item, NoopSink,
};

use crate::registry::RuleRegistry;

/// Owns the item collection and dispatches each item to its rule once per day.
///
/// Processing is fail-fast: the first item whose update fails stops the batch.
/// Items before it have already been mutated; items after it are untouched.
#[derive(Debug)]
pub struct Inventory<'r> {
    items: Vec<Item>,
    sink: Arc<dyn DiagnosticSink>,
    registry: &'r RuleRegistry,
}

impl Inventory<'static> {
    /// Engine over `items`, using the process-wide registry and no diagnostics.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            sink: Arc::new(NoopSink),
            registry: RuleRegistry::global(),
        }
    }

    /// Build from untyped input (e.g. a request body or fixture file).
    ///
    /// The value must be an array whose every element deserialises into an
    /// [`Item`]. Empty categories are accepted here and rejected at dispatch.
    pub fn from_json(value: &JsonValue) -> InventoryResult<Self> {
        let elements = value
            .as_array()
            .ok_or_else(|| InventoryError::invalid_argument("items must be an array"))?;

        let items = elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                serde_json::from_value::<Item>(element.clone()).map_err(|e| {
                    InventoryError::invalid_argument(format!(
                        "item at index {index} is not a valid item: {e}"
                    ))
                })
            })
            .collect::<InventoryResult<Vec<_>>>()?;

        Ok(Self::new(items))
    }
}

impl<'r> Inventory<'r> {
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Dispatch through `registry` instead of the process-wide one.
    pub fn with_registry<'n>(self, registry: &'n RuleRegistry) -> Inventory<'n> {
        Inventory {
            items: self.items,
            sink: self.sink,
            registry,
        }
    }

    /// Current items, without advancing time.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance every item by one day, in order.
    pub fn advance_one_day(&mut self) -> InventoryResult<&[Item]> {
        for item in self.items.iter_mut() {
            if let Err(cause) = apply_rule(self.registry, item) {
                let record = FailureRecord::new(item, &cause);
                tracing::warn!(
                    category = %record.category,
                    days_remaining = record.days_remaining,
                    quality = record.quality,
                    error = %cause,
                    "item update failed; aborting batch"
                );
                self.sink.record("failed to update item", &record);
                return Err(InventoryError::update_failure(item.category(), cause));
            }
        }
        Ok(self.items.as_slice())
    }

    /// Advance `days` times, stopping at the first failure.
    pub fn advance_days(&mut self, days: usize) -> InventoryResult<&[Item]> {
        for _ in 0..days {
            self.advance_one_day()?;
        }
        Ok(self.items.as_slice())
    }
}

fn apply_rule(registry: &RuleRegistry, item: &mut Item) -> InventoryResult<()> {
    let rule = registry.get_rule(Some(&*item))?;
    tracing::debug!(category = %item.category(), rule = rule.name(), "applying update rule");
    rule.update(item)
}
