//! Rewards: items, equipment, spells, and stat gains.

use pq_content::{Content, Pool, field, field_int};
use pq_core::character::EquipCategory;
use pq_core::{EquipSlot, Stat};
use tracing::debug;

use crate::context::EngineContext;
use crate::event::SimEventKind;

/// A mundane item name.
pub fn boring_item<C: Content + ?Sized>(content: &mut C) -> String {
    field(&content.pick(Pool::BoringItems), 0).to_string()
}

/// "<attribute> <noun>", e.g. "Golden Diadem".
pub fn interesting_item<C: Content + ?Sized>(content: &mut C) -> String {
    let attrib = content.pick(Pool::ItemAttrib);
    let noun = content.pick(Pool::Specials);
    format!("{} {}", field(&attrib, 0), field(&noun, 0))
}

/// "<attribute> <noun> of <benefit>", e.g. "Golden Diadem of Torpor".
pub fn special_item<C: Content + ?Sized>(content: &mut C) -> String {
    let item = interesting_item(content);
    let benefit = content.pick(Pool::ItemOfs);
    format!("{item} of {}", field(&benefit, 0))
}

/// Add one item to the inventory and return its name.
///
/// Usually a freshly composed special item. Only once the inventory holds
/// more rows than `max(250, random(999))` does it repeat something already
/// carried.
pub fn win_item<C: Content>(ctx: &mut EngineContext<'_, C>) -> String {
    let threshold = ctx.content.random(999).max(250);
    let name = if usize::try_from(threshold).is_ok_and(|t| t < ctx.state.inventory.len()) {
        let carried: Vec<String> = ctx
            .state
            .inventory
            .sellable()
            .map(|item| item.name.clone())
            .collect();
        if carried.is_empty() {
            boring_item(ctx.content)
        } else {
            let idx = ctx.content.random(carried.len() as i64) as usize;
            carried[idx].clone()
        }
    } else {
        special_item(ctx.content)
    };

    ctx.state.add_item(&name, 1);
    ctx.emit(
        SimEventKind::LootWon { item: name.clone() },
        format!("Found {name}"),
    );
    name
}

/// Replace a random slot with a piece of equipment suited to the level.
///
/// The base item is the closest of five draws to the character's level. The
/// remaining difference is made up with up to two modifiers, favourable when
/// the character has outgrown the base item, and any leftover becomes a
/// numeric prefix ("+2 Polished Mace", "-1 Holey Burlap").
pub fn win_equip<C: Content>(ctx: &mut EngineContext<'_, C>) -> String {
    let posn = ctx.content.random(EquipSlot::ALL.len() as i64) as usize;
    let slot = EquipSlot::ALL
        .get(posn)
        .copied()
        .unwrap_or(EquipSlot::Weapon);
    let (stuff, better, worse) = match slot.category() {
        EquipCategory::Weapon => (Pool::Weapons, Pool::OffenseAttrib, Pool::OffenseBad),
        EquipCategory::Shield => (Pool::Shields, Pool::DefenseAttrib, Pool::DefenseBad),
        EquipCategory::Armor => (Pool::Armors, Pool::DefenseAttrib, Pool::DefenseBad),
    };

    let level = ctx.level();
    let base = ctx.content.pick_closest(stuff, level, 5);
    let mut name = field(&base, 0).to_string();
    let mut plus = level - field_int(&base, 1);
    let modifiers = if plus < 0 { worse } else { better };

    let mut count = 0;
    while count < 2 && plus != 0 {
        let modifier = ctx.content.pick(modifiers);
        let m_name = field(&modifier, 0);
        let m_qual = field_int(&modifier, 1);
        if name.contains(m_name) || plus.abs() < m_qual.abs() {
            break;
        }
        name = format!("{m_name} {name}");
        plus -= m_qual;
        count += 1;
    }
    if plus != 0 {
        name = format!("{plus:+} {name}");
    }

    ctx.state.equips.set(slot, name.clone());
    ctx.state.best.equip = name.clone();
    ctx.emit(
        SimEventKind::EquipmentGained {
            slot: slot.label().to_string(),
            item: name.clone(),
        },
        format!("Equipped {name} ({slot})"),
    );
    name
}

/// Learn a spell or raise its rank by one, then refresh the best-spell cache.
///
/// Only the first `WIS + level` spells of the pool are within reach.
pub fn win_spell<C: Content>(ctx: &mut EngineContext<'_, C>) -> String {
    let reach = (ctx.state.stats.get(Stat::Wis) + ctx.level()).max(1);
    let limit = usize::try_from(reach).unwrap_or(1);
    let entry = ctx.content.pick_within(Pool::Spells, limit);
    let name = field(&entry, 0).to_string();
    let rank = ctx.state.spells.add_rank(&name, 1);

    if let Some(best) = ctx.state.spells.best() {
        ctx.state.best.spell = format!("{} {}", best.name, best.rank);
    }
    let learned = format!("{name} {}", ctx.content.to_roman(rank));
    ctx.emit(
        SimEventKind::SpellLearned {
            spell: learned.clone(),
        },
        format!("Learned {learned}"),
    );
    name
}

/// Raise one primary stat by one and refresh the best-stat cache.
///
/// Half the time the stat is uniform; otherwise it is weighted by the square
/// of its current value, so strong stats tend to grow stronger.
pub fn win_stat<C: Content>(ctx: &mut EngineContext<'_, C>) -> Stat {
    let stat = if ctx.content.odds(1, 2) {
        let idx = ctx.content.random(Stat::PRIME.len() as i64) as usize;
        Stat::PRIME.get(idx).copied().unwrap_or(Stat::Str)
    } else {
        let stats = &ctx.state.stats;
        let total: i64 = Stat::PRIME.iter().map(|&s| stats.get(s).pow(2)).sum();
        let mut roll = ctx.content.random(total);
        let mut chosen = Stat::Str;
        for s in Stat::PRIME {
            let weight = stats.get(s).pow(2);
            if roll < weight {
                chosen = s;
                break;
            }
            roll -= weight;
        }
        chosen
    };

    let value = ctx.state.stats.add(stat, 1);
    let (best, best_value) = ctx.state.stats.best_prime();
    ctx.state.best.stat = format!("{best} {best_value}");
    debug!("{stat} raised to {value}");
    ctx.emit(
        SimEventKind::StatRaised {
            stat: format!("{stat} {value}"),
        },
        format!("{stat} rose to {value}"),
    );
    stat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::event::EventLog;
    use pq_content::{ContentTables, ScriptedContent};
    use pq_core::{CharacterState, Stats, Traits};

    fn hero(level: u32) -> CharacterState {
        let mut traits = Traits::new("Garg", "Half Orc", "Ur-Paladin");
        traits.level = level;
        CharacterState::new(traits, Stats::from_primes([10, 10, 10, 10, 3, 10]))
    }

    fn with_ctx<T>(
        state: &mut CharacterState,
        content: &mut ScriptedContent,
        f: impl FnOnce(&mut EngineContext<'_, ScriptedContent>) -> T,
    ) -> (T, EventLog) {
        let config = EngineConfig::default();
        let mut events = EventLog::new(0);
        let out = {
            let mut ctx = EngineContext {
                state,
                content,
                config: &config,
                events: &mut events,
            };
            f(&mut ctx)
        };
        (out, events)
    }

    #[test]
    fn small_inventory_wins_a_special_item() {
        let mut state = hero(1);
        // threshold 250, then attrib 0, noun 0, benefit 0
        let mut content = ScriptedContent::new([0, 0, 0, 0]);
        let (name, events) = with_ctx(&mut state, &mut content, win_item);
        assert_eq!(name, "Golden Diadem of Foreboding");
        assert_eq!(state.inventory.find(&name).unwrap().quantity, 1);
        assert_eq!(state.meters.encumbrance.position, 1.0);
        assert_eq!(events.events_labelled("loot").len(), 1);
    }

    #[test]
    fn exact_level_equipment_has_no_modifiers() {
        let tables = ContentTables {
            weapons: vec!["Mace|4".into()],
            ..ContentTables::default()
        };
        let mut state = hero(4);
        let mut content = ScriptedContent::with_tables([0], tables);
        let (name, _) = with_ctx(&mut state, &mut content, win_equip);
        assert_eq!(name, "Mace");
        assert_eq!(state.equips.get(EquipSlot::Weapon), "Mace");
        assert_eq!(state.best.equip, "Mace");
    }

    #[test]
    fn outgrown_equipment_gains_modifiers_and_remainder() {
        let tables = ContentTables {
            weapons: vec!["Stick|0".into()],
            offense_attrib: vec!["Polished|+1".into(), "Steely|+2".into()],
            ..ContentTables::default()
        };
        let mut state = hero(5);
        // slot 0, five base draws, modifier Steely (1), modifier Polished (0)
        let mut content = ScriptedContent::with_tables([0, 0, 0, 0, 0, 0, 1, 0], tables);
        let (name, _) = with_ctx(&mut state, &mut content, win_equip);
        assert_eq!(name, "+2 Polished Steely Stick");
    }

    #[test]
    fn underleveled_equipment_takes_bad_modifiers() {
        let tables = ContentTables {
            shields: vec!["Aegis|12".into()],
            defense_bad: vec!["Cursed|-5".into()],
            ..ContentTables::default()
        };
        let mut state = hero(1);
        // slot 1 (shield); gap -11: Cursed twice would repeat, so stop after one
        let mut content = ScriptedContent::with_tables([1, 0, 0, 0, 0, 0, 0, 0, 0], tables);
        let (name, _) = with_ctx(&mut state, &mut content, win_equip);
        assert_eq!(name, "-6 Cursed Aegis");
        assert_eq!(state.equips.get(EquipSlot::Shield), "-6 Cursed Aegis");
    }

    #[test]
    fn spells_are_gated_by_wisdom_and_level() {
        let mut state = hero(1);
        // WIS 3 + level 1 = first four spells; roll 7 wraps to index 3
        let mut content = ScriptedContent::new([7, 7]);
        let (name, _) = with_ctx(&mut state, &mut content, win_spell);
        assert_eq!(name, "Good Move");
        let (_, events) = with_ctx(&mut state, &mut content, win_spell);
        assert_eq!(state.spells.get("Good Move").unwrap().rank, "II");
        assert_eq!(state.best.spell, "Good Move II");
        assert_eq!(events.events()[0].description, "Learned Good Move II");
    }

    #[test]
    fn uniform_stat_gain() {
        let mut state = hero(1);
        // odds hit (0), stat index 4 = WIS
        let mut content = ScriptedContent::new([0, 4]);
        let (stat, _) = with_ctx(&mut state, &mut content, win_stat);
        assert_eq!(stat, Stat::Wis);
        assert_eq!(state.stats.get(Stat::Wis), 4);
        assert_eq!(state.best.stat, "STR 10");
    }

    #[test]
    fn weighted_stat_gain_follows_squares() {
        let mut state = hero(1);
        // odds miss (1); weights 100,100,100,100,9,100; roll 405 lands in WIS
        let mut content = ScriptedContent::new([1, 405]);
        let (stat, _) = with_ctx(&mut state, &mut content, win_stat);
        assert_eq!(stat, Stat::Wis);
        // roll 0 lands in STR
        let mut content = ScriptedContent::new([1, 0]);
        let (stat, _) = with_ctx(&mut state, &mut content, win_stat);
        assert_eq!(stat, Stat::Str);
        assert_eq!(state.best.stat, "STR 11");
    }
}
