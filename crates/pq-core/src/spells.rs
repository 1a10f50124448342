use serde::{Deserialize, Serialize};

use crate::roman::{to_arabic_or_zero, to_roman};

/// A learned spell and its proficiency rank as a roman numeral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    /// Spell name.
    pub name: String,
    /// Proficiency rank, e.g. `"IV"`.
    pub rank: String,
}

impl Spell {
    /// Rank as an integer; unreadable ranks count as zero.
    pub fn rank_value(&self) -> i64 {
        to_arabic_or_zero(&self.rank)
    }
}

/// Ordered spell list, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellBook {
    spells: Vec<Spell>,
}

impl SpellBook {
    /// Create an empty spell book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a spell's rank by `delta`, learning it at rank `delta` if new.
    /// Returns the new rank value.
    pub fn add_rank(&mut self, name: &str, delta: i64) -> i64 {
        if let Some(spell) = self.spells.iter_mut().find(|s| s.name == name) {
            let value = spell.rank_value() + delta;
            spell.rank = to_roman(value);
            return value;
        }
        self.spells.push(Spell {
            name: name.to_string(),
            rank: to_roman(delta),
        });
        delta
    }

    /// Look up a spell by name.
    pub fn get(&self, name: &str) -> Option<&Spell> {
        self.spells.iter().find(|s| s.name == name)
    }

    /// The highest-ranked spell; the earliest learned wins ties.
    pub fn best(&self) -> Option<&Spell> {
        let mut best: Option<&Spell> = None;
        for spell in &self.spells {
            match best {
                Some(b) if spell.rank_value() <= b.rank_value() => {}
                _ => best = Some(spell),
            }
        }
        best
    }

    /// Spells in learning order.
    pub fn iter(&self) -> impl Iterator<Item = &Spell> {
        self.spells.iter()
    }

    /// Number of distinct spells.
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    /// True when no spell has been learned.
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}
