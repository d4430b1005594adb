//! Diagnostic sink capability.
//!
//! The engine reports update failures here before returning the error. The
//! embedding application decides where records go (logs, metrics, nowhere).

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::item::Item;

/// Structured description of a failed item update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub category: String,
    pub days_remaining: i32,
    pub quality: i32,
    pub cause: String,
}

impl FailureRecord {
    /// Capture the item's state at the moment `cause` was raised.
    pub fn new(item: &Item, cause: &InventoryError) -> Self {
        Self {
            category: item.category().to_string(),
            days_remaining: item.days_remaining,
            quality: item.quality,
            cause: cause.to_string(),
        }
    }
}

/// Receives failure records from the engine.
pub trait DiagnosticSink: Send + Sync + core::fmt::Debug {
    fn record(&self, message: &str, details: &FailureRecord);
}

/// Sink that discards everything. Used when the caller supplies none.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _message: &str, _details: &FailureRecord) {}
}
