use pq_content::Content;
use pq_core::Stat;
use tracing::info;

use crate::context::EngineContext;
use crate::event::SimEventKind;
use crate::generators::{win_spell, win_stat};

/// Seconds of fighting needed to leave `level`: `round((20 + 1.15^level) * 60)`.
pub fn level_up_time(level: u32) -> f64 {
    ((20.0 + 1.15_f64.powi(level as i32)) * 60.0).round()
}

/// Gain a level: more hit points and mana, two stat gains, one spell rank,
/// and a fresh experience meter sized for the new level.
pub fn level_up<C: Content>(ctx: &mut EngineContext<'_, C>) {
    ctx.state.traits.level += 1;
    let level = ctx.state.traits.level;

    let hp = ctx.state.stats.get(Stat::Con) / 3 + 1 + ctx.content.random(4);
    ctx.state.stats.add(Stat::HpMax, hp);
    let mp = ctx.state.stats.get(Stat::Int) / 3 + 1 + ctx.content.random(4);
    ctx.state.stats.add(Stat::MpMax, mp);

    win_stat(ctx);
    win_stat(ctx);
    win_spell(ctx);

    ctx.state.meters.experience.reset(level_up_time(level));
    info!("{} reached level {level}", ctx.state.traits.name);
    ctx.emit(
        SimEventKind::LevelUp { level },
        format!("Reached level {level}"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::event::EventLog;
    use pq_content::ScriptedContent;
    use pq_core::{CharacterState, Stats, Traits};

    #[test]
    fn curve_is_strictly_increasing() {
        assert_eq!(level_up_time(1), 1269.0);
        for level in 1..100 {
            assert!(level_up_time(level + 1) > level_up_time(level));
        }
    }

    #[test]
    fn level_up_grows_everything() {
        let mut state = CharacterState::new(
            Traits::new("Garg", "Half Orc", "Ur-Paladin"),
            Stats::from_primes([10, 12, 10, 9, 10, 10]),
        );
        state.meters.experience.reset(level_up_time(1));
        state.meters.experience.advance(level_up_time(1));
        let config = EngineConfig::default();
        let mut events = EventLog::new(0);
        // hp die 3, mp die 0, then stat/stat/spell rolls default to 0
        let mut content = ScriptedContent::new([3, 0]);
        let mut ctx = EngineContext {
            state: &mut state,
            content: &mut content,
            config: &config,
            events: &mut events,
        };
        level_up(&mut ctx);

        assert_eq!(state.level(), 2);
        assert_eq!(state.stats.get(Stat::HpMax), 12 / 3 + 1 + 3);
        assert_eq!(state.stats.get(Stat::MpMax), 9 / 3 + 1);
        assert_eq!(state.stats.get(Stat::Str), 12);
        assert_eq!(state.spells.len(), 1);
        assert_eq!(state.meters.experience.position, 0.0);
        assert_eq!(state.meters.experience.target, level_up_time(2));
        assert_eq!(events.events_labelled("level").len(), 1);
    }
}
