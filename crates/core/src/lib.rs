//! `rosestock-core` — inventory domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod diagnostics;
pub mod error;
pub mod item;

pub use diagnostics::{DiagnosticSink, FailureRecord, NoopSink};
pub use error::{InventoryError, InventoryResult, UNKNOWN};
pub use item::{Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
