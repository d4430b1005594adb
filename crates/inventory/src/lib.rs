//! Inventory engine.
//!
//! Advances stock items one simulated day at a time, dispatching each item to
//! the update rule registered for its category. Pure in-memory logic (no IO).

pub mod engine;
pub mod registry;
pub mod rules;

pub use engine::Inventory;
pub use registry::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, RuleRegistry, SULFURAS};
pub use rules::{
    AcceleratedDecay, Appreciating, EventTicket, Legendary, Ordinary, UpdateRule,
    decrease_days, decrease_quality, increase_quality,
};
