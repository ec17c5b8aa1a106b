//! emporium-core: Domain models and daily aging rules for shop inventory.
//!
//! This crate provides:
//! - `Item`: the mutable stock record (`name`, `sell_in`, `quality`)
//! - `UpdateRule`: per-category daily mutation policies, including the
//!   appreciating, event-ticket, fast-decaying, and legendary special cases
//! - `RuleRegistry`: exact-name rule lookup with an ordinary-stock fallback
//! - `Inventory`: the engine that advances every item by one day per `tick`
//!
//! The engine is a pure, synchronous, in-memory transformation: no I/O, no
//! persistence, no locking. Reporting and scheduling live in outer
//! collaborators that read item state back after each tick.

pub mod bounds;
pub mod engine;
pub mod error;
pub mod item;
pub mod registry;
pub mod rule;

pub use bounds::{MAX_QUALITY, MIN_QUALITY};
pub use engine::Inventory;
pub use error::{CoreError, Result};
pub use item::Item;
pub use registry::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, RuleRegistry, SULFURAS};
pub use rule::UpdateRule;
