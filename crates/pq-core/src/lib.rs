//! Core types for Progress Quest: the character state and everything it holds.
//!
//! This crate defines the data model the simulation engine mutates. It knows
//! nothing about randomness or content tables; the engine drives it and the
//! persistence layer round-trips it through serde.

/// Traits, enumerated stats, and equipment slots.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Inventory rows with Gold as the distinguished first entry.
pub mod inventory;
/// Position/target progress meters.
pub mod meter;
/// Roman numeral conversion for spell ranks and act numbers.
pub mod roman;
/// Spell book with roman-numeral proficiency ranks.
pub mod spells;
/// The full mutable character state.
pub mod state;
/// Active tasks, queued tasks, and monster descriptors.
pub mod task;

/// Re-export character record types.
pub use character::{EquipSlot, Equips, Stat, Stats, Traits};
/// Re-export error types.
pub use error::{PqError, PqResult};
/// Re-export inventory types.
pub use inventory::{GOLD, Inventory, InventoryItem};
/// Re-export the progress meter.
pub use meter::ProgressMeter;
/// Re-export spell book types.
pub use spells::{Spell, SpellBook};
/// Re-export state types.
pub use state::{BestCache, CharacterState, Meters, SCHEMA_VERSION};
/// Re-export task protocol types.
pub use task::{Loot, Monster, QueuedTask, Task};
