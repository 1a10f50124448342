use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PqError, PqResult};

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Who the character is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traits {
    /// Character name.
    pub name: String,
    /// Race name, as listed in the content tables.
    pub race: String,
    /// Class name, as listed in the content tables.
    pub class: String,
    /// Current level, never below 1.
    pub level: u32,
}

impl Traits {
    /// Create level-1 traits.
    pub fn new(name: impl Into<String>, race: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            race: race.into(),
            class: class.into(),
            level: 1,
        }
    }

    /// Reject blank names and a zero level.
    pub fn validate(&self) -> PqResult<()> {
        if self.name.trim().is_empty() {
            return Err(PqError::Validation("character name is empty".into()));
        }
        if self.race.trim().is_empty() {
            return Err(PqError::Validation("character race is empty".into()));
        }
        if self.class.trim().is_empty() {
            return Err(PqError::Validation("character class is empty".into()));
        }
        if self.level == 0 {
            return Err(PqError::Validation("character level must be at least 1".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// The fixed set of stat keys: six primary stats and two derived maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stat {
    /// Strength. Also sets the encumbrance limit at creation.
    #[serde(rename = "STR")]
    Str,
    /// Constitution. Feeds hit point growth.
    #[serde(rename = "CON")]
    Con,
    /// Dexterity.
    #[serde(rename = "DEX")]
    Dex,
    /// Intelligence. Feeds mana growth.
    #[serde(rename = "INT")]
    Int,
    /// Wisdom. Widens the spell pool.
    #[serde(rename = "WIS")]
    Wis,
    /// Charisma.
    #[serde(rename = "CHA")]
    Cha,
    /// Maximum hit points.
    #[serde(rename = "HP Max")]
    HpMax,
    /// Maximum mana points.
    #[serde(rename = "MP Max")]
    MpMax,
}

impl Stat {
    /// The six primary stats in display order.
    pub const PRIME: [Stat; 6] = [
        Stat::Str,
        Stat::Con,
        Stat::Dex,
        Stat::Int,
        Stat::Wis,
        Stat::Cha,
    ];

    /// Every stat key in display order.
    pub const ALL: [Stat; 8] = [
        Stat::Str,
        Stat::Con,
        Stat::Dex,
        Stat::Int,
        Stat::Wis,
        Stat::Cha,
        Stat::HpMax,
        Stat::MpMax,
    ];

    /// Display label, e.g. `"STR"` or `"HP Max"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Con => "CON",
            Self::Dex => "DEX",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
            Self::HpMax => "HP Max",
            Self::MpMax => "MP Max",
        }
    }

    /// True for the six primary stats.
    pub fn is_prime(self) -> bool {
        !matches!(self, Self::HpMax | Self::MpMax)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stat {
    type Err = PqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Stat::ALL
            .into_iter()
            .find(|stat| stat.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PqError::UnknownStat(s.to_string()))
    }
}

/// Stat values keyed by [`Stat`]. Missing keys read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats {
    values: BTreeMap<Stat, i64>,
}

impl Stats {
    /// Create an empty stat block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stat block from the six primary stats, in [`Stat::PRIME`] order.
    pub fn from_primes(primes: [i64; 6]) -> Self {
        let values = Stat::PRIME.into_iter().zip(primes).collect();
        Self { values }
    }

    /// Value of a stat, zero when absent.
    pub fn get(&self, stat: Stat) -> i64 {
        self.values.get(&stat).copied().unwrap_or(0)
    }

    /// Overwrite a stat.
    pub fn set(&mut self, stat: Stat, value: i64) {
        self.values.insert(stat, value);
    }

    /// Add `delta` to a stat and return the new value.
    pub fn add(&mut self, stat: Stat, delta: i64) -> i64 {
        let entry = self.values.entry(stat).or_insert(0);
        *entry += delta;
        *entry
    }

    /// The strongest primary stat. Ties keep the earlier stat, starting from STR.
    pub fn best_prime(&self) -> (Stat, i64) {
        let mut best = Stat::Str;
        for stat in Stat::PRIME {
            if self.get(stat) > self.get(best) {
                best = stat;
            }
        }
        (best, self.get(best))
    }

    /// Sum of the six primary stats.
    pub fn prime_total(&self) -> i64 {
        Stat::PRIME.into_iter().map(|s| self.get(s)).sum()
    }

    /// All stats in display order, including absent ones as zero.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i64)> + '_ {
        Stat::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// The broad kind of an equipment slot, which decides the item pool it draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipCategory {
    /// Weapons, improved by offensive modifiers.
    Weapon,
    /// Shields, improved by defensive modifiers.
    Shield,
    /// Body armor pieces, improved by defensive modifiers.
    Armor,
}

/// An equipment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    /// Main-hand weapon.
    Weapon,
    /// Off-hand shield.
    Shield,
    /// Head.
    Helm,
    /// Body mail.
    Hauberk,
    /// Upper arms.
    Brassairts,
    /// Forearms.
    Vambraces,
    /// Hands.
    Gauntlets,
    /// Padded undercoat.
    Gambeson,
    /// Thighs.
    Cuisses,
    /// Shins.
    Greaves,
    /// Feet.
    Sollerets,
}

impl EquipSlot {
    /// Every slot in display order. Index 0 is the weapon, index 1 the shield.
    pub const ALL: [EquipSlot; 11] = [
        EquipSlot::Weapon,
        EquipSlot::Shield,
        EquipSlot::Helm,
        EquipSlot::Hauberk,
        EquipSlot::Brassairts,
        EquipSlot::Vambraces,
        EquipSlot::Gauntlets,
        EquipSlot::Gambeson,
        EquipSlot::Cuisses,
        EquipSlot::Greaves,
        EquipSlot::Sollerets,
    ];

    /// Which item pool this slot draws from.
    pub fn category(self) -> EquipCategory {
        match self {
            Self::Weapon => EquipCategory::Weapon,
            Self::Shield => EquipCategory::Shield,
            _ => EquipCategory::Armor,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Shield => "Shield",
            Self::Helm => "Helm",
            Self::Hauberk => "Hauberk",
            Self::Brassairts => "Brassairts",
            Self::Vambraces => "Vambraces",
            Self::Gauntlets => "Gauntlets",
            Self::Gambeson => "Gambeson",
            Self::Cuisses => "Cuisses",
            Self::Greaves => "Greaves",
            Self::Sollerets => "Sollerets",
        }
    }
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EquipSlot {
    type Err = PqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EquipSlot::ALL
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PqError::UnknownSlot(s.to_string()))
    }
}

/// Equipped item names keyed by slot. An empty string means nothing equipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Equips {
    slots: BTreeMap<EquipSlot, String>,
}

impl Equips {
    /// Every slot present and empty.
    pub fn new() -> Self {
        let slots = EquipSlot::ALL
            .into_iter()
            .map(|s| (s, String::new()))
            .collect();
        Self { slots }
    }

    /// Name of the item in a slot, `""` when empty.
    pub fn get(&self, slot: EquipSlot) -> &str {
        self.slots.get(&slot).map(String::as_str).unwrap_or("")
    }

    /// Equip an item, replacing whatever was there.
    pub fn set(&mut self, slot: EquipSlot, name: impl Into<String>) {
        self.slots.insert(slot, name.into());
    }

    /// All slots in display order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, &str)> + '_ {
        EquipSlot::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

impl Default for Equips {
    fn default() -> Self {
        Self::new()
    }
}
