//! The content provider consumed by the Progress Quest engine.
//!
//! Pools of monsters, items, spells and titles live in [`ContentTables`].
//! The [`Content`] trait pairs them with the randomness primitives the
//! generators need, so the engine can run against a seeded RNG
//! ([`StdContent`]) or a fixed script of rolls ([`ScriptedContent`]).

pub mod entry;
pub mod error;
pub mod names;
pub mod provider;
pub mod scripted;
pub mod tables;

pub use entry::{field, field_int};
pub use error::{ContentError, ContentResult};
pub use provider::{Content, StdContent};
pub use scripted::ScriptedContent;
pub use tables::{ContentTables, Pool};
