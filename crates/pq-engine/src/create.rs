//! Character creation.

use pq_content::Content;
use pq_core::{CharacterState, EquipSlot, QueuedTask, Stat, Stats, Task, Traits};

use crate::error::EngineResult;
use crate::leveling::level_up_time;

/// Roll the six primary stats, each `3 + d6 + d6 + d6` counted from zero.
pub fn roll_stats<C: Content + ?Sized>(content: &mut C) -> Stats {
    let mut primes = [0; 6];
    for value in &mut primes {
        *value = 3 + content.random(6) + content.random(6) + content.random(6);
    }
    Stats::from_primes(primes)
}

/// The prologue every new character sits through before the first act.
pub fn bootstrap_queue() -> Vec<QueuedTask> {
    vec![
        QueuedTask::narrative(10, "Experiencing an enigmatic and foreboding night vision"),
        QueuedTask::narrative(
            6,
            "Much is revealed about that wise old bastard you'd underestimated",
        ),
        QueuedTask::narrative(
            6,
            "A shocking series of events leaves you alone and bewildered, but resolute",
        ),
        QueuedTask::narrative(
            4,
            "Drawing upon an unrealized reserve of determination, you set out on a long and dangerous journey",
        ),
        QueuedTask::Plot { seconds: 2 },
    ]
}

/// Build a level-1 character from validated traits and rolled primary stats.
///
/// Hit point and mana maxima are rolled here. The character starts with a
/// sharp rock and burlap armor, no Gold, the prologue queued, and a short
/// loading task running.
pub fn create_initial_state<C: Content + ?Sized>(
    content: &mut C,
    traits: Traits,
    rolled: Stats,
) -> EngineResult<CharacterState> {
    traits.validate()?;
    let mut traits = traits;
    traits.level = 1;

    let mut stats = Stats::new();
    for stat in Stat::PRIME {
        stats.set(stat, rolled.get(stat));
    }
    stats.set(Stat::HpMax, content.random(8) + stats.get(Stat::Con) / 6);
    stats.set(Stat::MpMax, content.random(8) + stats.get(Stat::Int) / 6);
    let strength = stats.get(Stat::Str);

    let mut state = CharacterState::new(traits, stats);
    state.equips.set(EquipSlot::Weapon, "Sharp Rock");
    state.equips.set(EquipSlot::Hauberk, "-3 Burlap");
    state.plots.push("Prologue".to_string());

    state.meters.experience.reset(level_up_time(1));
    state.meters.encumbrance.reset((strength + 10) as f64);
    state.meters.plot.reset(26.0);
    state.meters.quest.reset(1.0);
    state.meters.task.reset(2000.0);

    state.task = Task::Scripted;
    state.caption = "Loading...".to_string();
    state.best.plot = "Prologue".to_string();
    state.best.equip = "Sharp Rock".to_string();
    let (best, value) = state.stats.best_prime();
    state.best.stat = format!("{best} {value}");
    state.queue.extend(bootstrap_queue());
    Ok(state)
}
