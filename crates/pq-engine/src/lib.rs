//! The Progress Quest simulation engine.
//!
//! A character never needs input: an external driver calls
//! [`Simulation::advance`] with the time elapsed since the previous call, and
//! the engine fills the active task's meter. When a task completes the engine
//! resolves it (experience, quests, story, loot) and picks the next one from
//! the scripted queue or the task state machine. All randomness flows through
//! an injected [`pq_content::Content`] provider.

/// The progression clock and completion cascade.
pub mod clock;
/// Engine configuration.
pub mod config;
/// Mutable context shared by the cascade and the generators.
pub mod context;
/// Character creation and stat rolling.
pub mod create;
/// Task selection after a completion.
pub mod dequeue;
/// Error types for the engine crate.
pub mod error;
/// Engine event types and the event log.
pub mod event;
/// Monster, loot, quest, and story generators.
pub mod generators;
/// Load-time repair of saved states.
pub mod hydrate;
/// Level-ups and the experience curve.
pub mod leveling;
/// Top-level simulation driver.
pub mod simulation;

/// Re-export of [`config::EngineConfig`].
pub use config::EngineConfig;
/// Re-export of [`context::EngineContext`].
pub use context::EngineContext;
/// Re-exports of the character creation entry points.
pub use create::{create_initial_state, roll_stats};
/// Re-exports of [`error::EngineError`] and [`error::EngineResult`].
pub use error::{EngineError, EngineResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, SimEvent, SimEventKind};
/// Re-exports of the hydration entry points.
pub use hydrate::{hydrate, hydrate_in_place, hydrate_in_place_with};
/// Re-export of [`leveling::level_up_time`].
pub use leveling::level_up_time;
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
