//! Load-time repair of saved characters.
//!
//! Serde already fills absent collections with empty values. The steps here
//! bring the rest of a loaded state back in line: each is named, returns
//! whether it changed anything, and is a no-op on a well-formed state.

use pq_core::{CharacterState, SCHEMA_VERSION, roman};
use tracing::warn;

use crate::config::EngineConfig;

/// One named repair.
#[derive(Clone, Copy)]
pub struct MigrationStep {
    /// Identifier reported when the step changes something.
    pub name: &'static str,
    /// Apply the repair under the given limits; true if the state changed.
    pub apply: fn(&mut CharacterState, &EngineConfig) -> bool,
}

impl std::fmt::Debug for MigrationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationStep")
            .field("name", &self.name)
            .finish()
    }
}

/// Every repair, in the order applied.
pub const MIGRATIONS: &[MigrationStep] = &[
    MigrationStep {
        name: "clamp_level",
        apply: clamp_level,
    },
    MigrationStep {
        name: "seed_gold",
        apply: seed_gold,
    },
    MigrationStep {
        name: "rebuild_plot_log",
        apply: rebuild_plot_log,
    },
    MigrationStep {
        name: "trim_quest_log",
        apply: trim_quest_log,
    },
    MigrationStep {
        name: "recount_encumbrance",
        apply: recount_encumbrance,
    },
    MigrationStep {
        name: "refresh_best_plot",
        apply: refresh_best_plot,
    },
    MigrationStep {
        name: "stamp_schema_version",
        apply: stamp_schema_version,
    },
];

/// Levels start at 1; encounter durations divide by the level.
fn clamp_level(state: &mut CharacterState, _: &EngineConfig) -> bool {
    if state.traits.level >= 1 {
        return false;
    }
    state.traits.level = 1;
    true
}

/// Gold must exist and sit first in the inventory.
fn seed_gold(state: &mut CharacterState, _: &EngineConfig) -> bool {
    state.inventory.ensure_gold()
}

/// The plot log holds "Prologue" plus one caption per completed act.
fn rebuild_plot_log(state: &mut CharacterState, _: &EngineConfig) -> bool {
    let expected = state.act as usize + 1;
    if state.plots.len() >= expected {
        return false;
    }
    state.plots = (0..=state.act)
        .map(|act| match act {
            0 => "Prologue".to_string(),
            n => format!("Act {}", roman::to_roman(i64::from(n))),
        })
        .collect();
    true
}

/// Oversize quest logs keep their newest `quest_log_limit` entries.
fn trim_quest_log(state: &mut CharacterState, config: &EngineConfig) -> bool {
    let limit = config.quest_log_limit;
    if state.quests.len() <= limit {
        return false;
    }
    let excess = state.quests.len() - limit;
    state.quests.drain(..excess);
    true
}

fn recount_encumbrance(state: &mut CharacterState, _: &EngineConfig) -> bool {
    let carried = state.inventory.encumbrance() as f64;
    if state.meters.encumbrance.position == carried {
        return false;
    }
    state.recount_encumbrance();
    true
}

fn refresh_best_plot(state: &mut CharacterState, _: &EngineConfig) -> bool {
    if !state.best.plot.is_empty() {
        return false;
    }
    match state.plots.last() {
        Some(last) => {
            state.best.plot = last.clone();
            true
        }
        None => false,
    }
}

fn stamp_schema_version(state: &mut CharacterState, _: &EngineConfig) -> bool {
    if state.schema_version == SCHEMA_VERSION {
        return false;
    }
    state.schema_version = SCHEMA_VERSION;
    true
}

/// Repair a loaded state in place under the default engine limits.
pub fn hydrate_in_place(state: &mut CharacterState) -> Vec<&'static str> {
    hydrate_in_place_with(state, &EngineConfig::default())
}

/// Repair a loaded state in place and return the names of the steps that
/// changed it. The transient inventory highlight is always cleared.
pub fn hydrate_in_place_with(
    state: &mut CharacterState,
    config: &EngineConfig,
) -> Vec<&'static str> {
    let mut applied = Vec::new();
    for step in MIGRATIONS {
        if (step.apply)(state, config) {
            warn!("repaired saved character: {}", step.name);
            applied.push(step.name);
        }
    }
    state.latest_inventory = None;
    applied
}

/// Repair a loaded state and hand it back.
pub fn hydrate(mut state: CharacterState) -> CharacterState {
    hydrate_in_place(&mut state);
    state
}
