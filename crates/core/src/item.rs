use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};

/// Upper bound for the quality of ordinary (non-legendary) items.
pub const MAX_QUALITY: i32 = 50;

/// Lower bound for the quality of every item.
pub const MIN_QUALITY: i32 = 0;

/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A stock item tracked by the shop.
///
/// The category is fixed at creation and selects the update rule; the two
/// counters are mutated in place, once per simulated day. No range checks are
/// applied here: out-of-range quality is only constrained by rule execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(alias = "name")]
    category: String,
    #[serde(alias = "sellIn")]
    pub days_remaining: i32,
    pub quality: i32,
}

impl Item {
    /// Create an item. An empty category is accepted here and rejected at dispatch.
    pub fn new(category: impl Into<String>, days_remaining: i32, quality: i32) -> Self {
        Self {
            category: category.into(),
            days_remaining,
            quality,
        }
    }

    /// Create an item, rejecting an empty category up front.
    pub fn try_new(
        category: impl Into<String>,
        days_remaining: i32,
        quality: i32,
    ) -> InventoryResult<Self> {
        let item = Self::new(category, days_remaining, quality);
        if !item.has_category() {
            return Err(InventoryError::invalid_argument("item category cannot be empty"));
        }
        Ok(item)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether the category is usable for dispatch.
    pub fn has_category(&self) -> bool {
        !self.category.is_empty()
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.category, self.days_remaining, self.quality)
    }
}
