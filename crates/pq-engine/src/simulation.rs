use pq_content::{Content, StdContent};
use pq_core::{CharacterState, Stats, Traits};

use crate::clock;
use crate::config::EngineConfig;
use crate::context::EngineContext;
use crate::create::{create_initial_state, roll_stats};
use crate::error::EngineResult;
use crate::event::EventLog;
use crate::hydrate::hydrate_in_place_with;

/// The top-level simulation driver.
///
/// Owns the content provider, configuration, and event log. The character
/// state stays with the caller and is lent to [`Simulation::advance`] for the
/// duration of each call.
pub struct Simulation<C: Content> {
    content: C,
    config: EngineConfig,
    events: EventLog,
}

impl<C: Content> std::fmt::Debug for Simulation<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation<StdContent> {
    /// A simulation over the built-in tables, seeded from the configuration.
    pub fn seeded(config: EngineConfig) -> EngineResult<Self> {
        let content = StdContent::new(config.seed);
        Self::new(content, config)
    }
}

impl<C: Content> Simulation<C> {
    /// Create a simulation from a content provider and configuration.
    pub fn new(content: C, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        content.tables().validate()?;
        let events = EventLog::new(config.max_events);
        Ok(Self {
            content,
            config,
            events,
        })
    }

    /// Feed elapsed time to the character's active task. Returns true if a
    /// task completed during this call.
    pub fn advance(&mut self, state: &mut CharacterState, elapsed_ms: u64) -> bool {
        let mut ctx = EngineContext {
            state,
            content: &mut self.content,
            config: &self.config,
            events: &mut self.events,
        };
        clock::advance(&mut ctx, elapsed_ms)
    }

    /// Call [`Self::advance`] `ticks` times with `tick_ms` each. Returns the
    /// number of tasks completed.
    pub fn run(&mut self, state: &mut CharacterState, ticks: u64, tick_ms: u64) -> u64 {
        let mut completed = 0;
        for _ in 0..ticks {
            if self.advance(state, tick_ms) {
                completed += 1;
            }
        }
        completed
    }

    /// Roll primary stats with this simulation's content provider.
    pub fn roll_stats(&mut self) -> Stats {
        roll_stats(&mut self.content)
    }

    /// Create a new character with this simulation's content provider.
    pub fn create_character(&mut self, traits: Traits, stats: Stats) -> EngineResult<CharacterState> {
        create_initial_state(&mut self.content, traits, stats)
    }

    /// Repair a loaded state using this simulation's limits. Returns the
    /// names of the migration steps that changed it.
    pub fn hydrate(&self, state: &mut CharacterState) -> Vec<&'static str> {
        hydrate_in_place_with(state, &self.config)
    }

    /// The content provider.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// The content provider, for rolls outside a task (names, picks).
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// The configuration this simulation was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Events recorded since construction or the last [`Self::clear_events`].
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Drop all recorded events.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pq_content::{ContentTables, ScriptedContent};
    use pq_core::{Loot, Monster, Task};

    fn garg() -> Traits {
        Traits::new("Garg", "Half Orc", "Ur-Paladin")
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = Simulation::seeded(EngineConfig::default().with_seed(5)).unwrap();
        let mut b = Simulation::seeded(EngineConfig::default().with_seed(5)).unwrap();
        let stats = a.roll_stats();
        assert_eq!(stats, b.roll_stats());
        let mut sa = a.create_character(garg(), stats.clone()).unwrap();
        let mut sb = b.create_character(garg(), stats).unwrap();
        a.run(&mut sa, 500, 1000);
        b.run(&mut sb, 500, 1000);
        assert_eq!(sa, sb);
        assert_eq!(a.events().len(), b.events().len());
    }

    #[test]
    fn prologue_plays_out_in_order() {
        let mut sim = Simulation::new(ScriptedContent::new([]), EngineConfig::default()).unwrap();
        let mut state = sim
            .create_character(garg(), Stats::from_primes([10; 6]))
            .unwrap();
        assert!(sim.advance(&mut state, 2000));
        assert_eq!(
            state.caption,
            "Experiencing an enigmatic and foreboding night vision..."
        );
        assert_eq!(sim.run(&mut state, 26, 1000), 4);
        assert_eq!(state.caption, "Loading Act I...");
        assert_eq!(state.act, 1);
    }

    #[test]
    fn hydration_and_play_share_the_quest_limit() {
        let config = EngineConfig::default().with_quest_log_limit(3);
        let mut sim = Simulation::new(ScriptedContent::new([]), config).unwrap();
        let mut state = sim
            .create_character(garg(), Stats::from_primes([10; 6]))
            .unwrap();
        state.quests = (0..8).map(|i| format!("quest {i}")).collect();

        assert_eq!(sim.hydrate(&mut state), vec!["trim_quest_log"]);
        assert_eq!(state.quests, vec!["quest 5", "quest 6", "quest 7"]);

        state.queue.clear();
        state.act = 1;
        state.meters.plot.reset(100_000.0);
        state.meters.quest.reset(1.0);
        state.task = Task::Kill {
            monster: Monster::new("Goblin", 1, Loot::Drop("ear".into())),
        };
        state.meters.task.reset(1000.0);
        assert!(sim.advance(&mut state, 1000));
        assert_eq!(state.quests.len(), 3);
        assert_eq!(state.quests[0], "quest 6");
    }

    #[test]
    fn invalid_tables_are_rejected() {
        let tables = ContentTables {
            monsters: Vec::new(),
            ..ContentTables::default()
        };
        let err = Simulation::new(ScriptedContent::with_tables([], tables), EngineConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("monsters"));
    }

    #[test]
    fn event_log_respects_capacity() {
        let mut sim = Simulation::seeded(EngineConfig::default().with_max_events(10)).unwrap();
        let mut state = sim
            .create_character(garg(), Stats::from_primes([10; 6]))
            .unwrap();
        sim.run(&mut state, 200, 5000);
        assert_eq!(sim.events().len(), 10);
        sim.clear_events();
        assert!(sim.events().is_empty());
    }
}
