use pq_content::Content;
use pq_core::CharacterState;

use crate::config::EngineConfig;
use crate::event::{EventLog, SimEvent, SimEventKind};

/// Mutable context passed through one task resolution.
pub struct EngineContext<'a, C: Content> {
    /// The character being simulated.
    pub state: &'a mut CharacterState,
    /// Randomness and content pools.
    pub content: &'a mut C,
    /// Engine settings.
    pub config: &'a EngineConfig,
    /// Where notable outcomes are recorded.
    pub events: &'a mut EventLog,
}

impl<C: Content> EngineContext<'_, C> {
    /// Record an event stamped with the current completed-task count.
    pub fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events
            .push(SimEvent::new(self.state.tasks, kind, description));
    }

    /// Current character level as a signed integer, never below 1.
    pub fn level(&self) -> i64 {
        i64::from(self.state.level()).max(1)
    }
}
