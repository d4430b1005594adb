//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Placeholder reported when an item is absent and its counters cannot be read.
pub const UNKNOWN: &str = "unknown";

/// Inventory-level error.
///
/// Every variant is fatal to the operation that produced it: the engine never
/// continues a batch past a failure and never retries internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Malformed constructor or registration input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An item was absent or had no usable category at dispatch time.
    #[error(
        "invalid item: item at days_remaining={days_remaining} with quality={quality} must have a valid category"
    )]
    InvalidItem {
        days_remaining: String,
        quality: String,
    },

    /// An update rule reported a failure while mutating an item.
    #[error("rule failed: {0}")]
    RuleFailed(String),

    /// Updating a specific item failed; wraps the underlying cause.
    #[error("failed to update item '{category}': {cause}")]
    UpdateFailure {
        category: String,
        #[source]
        cause: Box<InventoryError>,
    },
}

impl InventoryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn rule_failed(msg: impl Into<String>) -> Self {
        Self::RuleFailed(msg.into())
    }

    /// Build an `InvalidItem` error from whatever is known about the item.
    pub fn invalid_item(counters: Option<(i32, i32)>) -> Self {
        match counters {
            Some((days_remaining, quality)) => Self::InvalidItem {
                days_remaining: days_remaining.to_string(),
                quality: quality.to_string(),
            },
            None => Self::InvalidItem {
                days_remaining: UNKNOWN.to_string(),
                quality: UNKNOWN.to_string(),
            },
        }
    }

    pub fn update_failure(category: impl Into<String>, cause: InventoryError) -> Self {
        Self::UpdateFailure {
            category: category.into(),
            cause: Box::new(cause),
        }
    }
}
