//! Monster encounters sized to the character.

use pq_content::{Content, Pool, field, field_int};
use pq_core::{Loot, Monster};

use super::text::{big, definite, indefinite, plural, sick, special, young};

/// A generated fight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonsterEncounter {
    /// Caption text, e.g. "3 sick Goblins" or "Sir Brabbrab the Low Elf".
    pub description: String,
    /// Natural level times quantity; sizes the task duration.
    pub level: i64,
    /// The monster fought, as recorded on the kill task.
    pub monster: Monster,
}

/// Decode a `name|level|loot` pool entry.
pub fn monster_from_entry(entry: &str) -> Monster {
    Monster::new(
        field(entry, 0),
        field_int(entry, 1),
        Loot::from_code(field(entry, 2)),
    )
}

/// Generate an encounter near `level`.
///
/// The level wanders a little first. One encounter in 25 is a unique
/// humanoid; otherwise the quest's monster turns up one time in four, or the
/// closest of five draws from the monster pool is used. A much weaker monster
/// comes as a horde, and any remaining level gap shows up as qualifiers.
pub fn monster_task<C: Content + ?Sized>(
    content: &mut C,
    level: i64,
    quest_monster: Option<&Monster>,
) -> MonsterEncounter {
    let mut level = level;
    for _ in 0..level {
        if content.odds(2, 5) {
            level += content.random_sign();
        }
    }
    level = level.max(1);

    let mut named = false;
    let monster = if content.odds(1, 25) {
        let race = field(&content.pick(Pool::Races), 0).to_string();
        let name = if content.odds(1, 2) {
            let class = content.pick(Pool::Classes);
            format!("passing {race} {}", field(&class, 0))
        } else {
            named = true;
            let title = content.pick(Pool::Titles);
            format!("{} {} the {race}", field(&title, 0), content.generate_name())
        };
        Monster::new(name, level, Loot::Special)
    } else if let Some(target) = quest_monster.filter(|_| content.odds(1, 4)) {
        target.clone()
    } else {
        monster_from_entry(&content.pick_closest(Pool::Monsters, level, 5))
    };

    let lev = monster.level;
    let mut quantity = 1;
    if level - lev > 10 {
        let base = lev.max(1);
        quantity = ((level + content.random(base)) / base).max(1);
        level /= quantity;
    }

    let gap = level - lev;
    let name = monster.name.as_str();
    let qualified = if gap <= -10 {
        format!("imaginary {name}")
    } else if gap < -5 {
        let severity = 5 - content.random(10 + gap + 1);
        let youth = (lev - level) - (5 - content.random(10 + gap + 1));
        sick(severity, &young(youth, name))
    } else if gap < 0 && content.random(2) == 1 {
        sick(gap, name)
    } else if gap < 0 {
        young(gap, name)
    } else if gap >= 10 {
        format!("messianic {name}")
    } else if gap > 5 {
        let size = 5 - content.random(10 - gap + 1);
        let nature = gap - (5 - content.random(10 - gap + 1));
        big(size, &special(nature, name))
    } else if gap > 0 && content.random(2) == 1 {
        big(gap, name)
    } else if gap > 0 {
        special(gap, name)
    } else {
        name.to_string()
    };

    let description = if named {
        qualified
    } else {
        indefinite(&qualified, quantity)
    };
    MonsterEncounter {
        description,
        level: lev * quantity,
        monster,
    }
}

/// "<generated name> the <monster>", the monster being the closest of five
/// draws to `level`.
pub fn named_monster<C: Content + ?Sized>(content: &mut C, level: i64) -> String {
    let entry = content.pick_closest(Pool::Monsters, level, 5);
    format!("{} the {}", content.generate_name(), field(&entry, 0))
}

/// A grand personage: "the Queen of the Panda Men" or "Lord Zed of Brab".
pub fn impressive_guy<C: Content + ?Sized>(content: &mut C) -> String {
    if content.random(2) != 0 {
        let title = content.pick(Pool::ImpressiveTitles);
        let race = content.pick(Pool::Races);
        return format!("the {title} of the {}", plural(field(&race, 0)));
    }
    let title = content.pick(Pool::ImpressiveTitles);
    let first = content.generate_name();
    let second = content.generate_name();
    format!("{title} {first} of {second}")
}

/// Definite plural of a monster entry's name, as used in quest captions.
pub fn monster_plural(monster: &Monster) -> String {
    definite(&monster.name, 2)
}
