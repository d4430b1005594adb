//! Category → rule dispatch table.
//!
//! Lookups fall back to [`Ordinary`] for any category without an explicit
//! entry. Registrations overwrite (last write wins) and are never removed.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rosestock_core::{InventoryError, InventoryResult, Item};

use crate::rules::{AcceleratedDecay, Appreciating, EventTicket, Legendary, Ordinary, UpdateRule};

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED: &str = "Conjured Item";

/// Mutable mapping from category name to update rule.
#[derive(Debug)]
pub struct RuleRegistry {
    rules: RwLock<HashMap<String, Arc<dyn UpdateRule>>>,
    fallback: Arc<dyn UpdateRule>,
}

impl RuleRegistry {
    /// Registry with the built-in categories and nothing else.
    pub fn with_builtins() -> Self {
        let mut rules: HashMap<String, Arc<dyn UpdateRule>> = HashMap::new();
        rules.insert(AGED_BRIE.to_string(), Arc::new(Appreciating));
        rules.insert(SULFURAS.to_string(), Arc::new(Legendary));
        rules.insert(BACKSTAGE_PASSES.to_string(), Arc::new(EventTicket));
        rules.insert(CONJURED.to_string(), Arc::new(AcceleratedDecay));

        Self {
            rules: RwLock::new(rules),
            fallback: Arc::new(Ordinary),
        }
    }

    /// Process-wide registry. Registrations made here are visible to every
    /// engine that does not carry its own registry.
    pub fn global() -> &'static RuleRegistry {
        static GLOBAL: OnceLock<RuleRegistry> = OnceLock::new();
        GLOBAL.get_or_init(RuleRegistry::with_builtins)
    }

    /// Resolve the rule for `item`.
    ///
    /// Fails only when the item is absent or has an empty category; unknown
    /// categories get the ordinary rule.
    pub fn get_rule(&self, item: Option<&Item>) -> InventoryResult<Arc<dyn UpdateRule>> {
        let item = match item {
            Some(item) if item.has_category() => item,
            Some(item) => {
                return Err(InventoryError::invalid_item(Some((
                    item.days_remaining,
                    item.quality,
                ))));
            }
            None => return Err(InventoryError::invalid_item(None)),
        };

        let rule = self
            .read()
            .get(item.category())
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.fallback));
        Ok(rule)
    }

    /// Map `category` to `rule`, replacing any existing mapping.
    pub fn register_rule(
        &self,
        category: impl Into<String>,
        rule: Arc<dyn UpdateRule>,
    ) -> InventoryResult<()> {
        let category = category.into();
        if category.is_empty() {
            return Err(InventoryError::invalid_argument(
                "both category and rule must be provided",
            ));
        }

        tracing::info!(category = %category, rule = rule.name(), "registered update rule");
        self.write().insert(category, rule);
        Ok(())
    }

    pub fn is_registered(&self, category: &str) -> bool {
        self.read().contains_key(category)
    }

    /// Explicitly registered categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = self.read().keys().cloned().collect();
        out.sort();
        out
    }

    // Every write is a single insert, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn UpdateRule>>> {
        self.rules.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn UpdateRule>>> {
        self.rules.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Frozen;

    impl UpdateRule for Frozen {
        fn name(&self) -> &'static str {
            "frozen"
        }

        fn update(&self, _item: &mut Item) -> InventoryResult<()> {
            Ok(())
        }
    }

    fn rule_name(registry: &RuleRegistry, category: &str) -> &'static str {
        registry
            .get_rule(Some(&Item::new(category, 5, 10)))
            .unwrap()
            .name()
    }

    #[test]
    fn builtins_dispatch_by_category() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(rule_name(&registry, AGED_BRIE), "appreciating");
        assert_eq!(rule_name(&registry, SULFURAS), "legendary");
        assert_eq!(rule_name(&registry, BACKSTAGE_PASSES), "event_ticket");
        assert_eq!(rule_name(&registry, CONJURED), "accelerated_decay");
    }

    #[test]
    fn unknown_category_falls_back_to_ordinary() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(rule_name(&registry, "Unknown Item"), "ordinary");
        assert!(!registry.is_registered("Unknown Item"));
    }

    #[test]
    fn absent_item_is_rejected_with_unknown_counters() {
        let registry = RuleRegistry::with_builtins();
        let err = registry.get_rule(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid item: item at days_remaining=unknown with quality=unknown must have a valid category"
        );
    }

    #[test]
    fn empty_category_is_rejected_with_counters() {
        let registry = RuleRegistry::with_builtins();
        let err = registry.get_rule(Some(&Item::new("", 5, 10))).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InvalidItem {
                days_remaining: "5".to_string(),
                quality: "10".to_string(),
            }
        );
    }

    #[test]
    fn register_rule_adds_new_category() {
        let registry = RuleRegistry::with_builtins();
        registry.register_rule("Mock Item", Arc::new(Frozen)).unwrap();

        assert!(registry.is_registered("Mock Item"));
        assert_eq!(rule_name(&registry, "Mock Item"), "frozen");
    }

    #[test]
    fn register_rule_overrides_builtin() {
        let registry = RuleRegistry::with_builtins();
        registry.register_rule(AGED_BRIE, Arc::new(Frozen)).unwrap();
        registry.register_rule(AGED_BRIE, Arc::new(Ordinary)).unwrap();

        assert_eq!(rule_name(&registry, AGED_BRIE), "ordinary");
    }

    #[test]
    fn whitespace_category_is_present_and_falls_back_to_ordinary() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(rule_name(&registry, " "), "ordinary");

        registry.register_rule(" ", Arc::new(Frozen)).unwrap();
        assert!(registry.is_registered(" "));
        assert_eq!(rule_name(&registry, " "), "frozen");
    }

    #[test]
    fn register_rule_rejects_empty_category() {
        let registry = RuleRegistry::with_builtins();
        let err = registry.register_rule("", Arc::new(Frozen)).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidArgument(_)));
        assert_eq!(registry.categories().len(), 4);
    }

    #[test]
    fn categories_are_sorted() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(
            registry.categories(),
            vec![AGED_BRIE, BACKSTAGE_PASSES, CONJURED, SULFURAS]
        );
    }

    #[test]
    fn global_registry_keeps_registrations() {
        let category = "Global Registry Test Item";
        RuleRegistry::global()
            .register_rule(category, Arc::new(Frozen))
            .unwrap();

        assert!(RuleRegistry::global().is_registered(category));
        assert_eq!(rule_name(RuleRegistry::global(), category), "frozen");
    }
}
