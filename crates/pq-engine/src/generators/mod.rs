//! Procedural generators. Every draw goes through the context's content provider.

/// Equipment, item, spell, and stat rewards.
pub mod loot;
/// Monster encounters and named foes.
pub mod monster;
/// Act completion and inter-act cinematics.
pub mod plot;
/// Quest completion and new quest captions.
pub mod quest;
/// English helpers: plurals, articles, qualifier prefixes.
pub mod text;

pub use loot::{win_equip, win_item, win_spell, win_stat};
pub use monster::{MonsterEncounter, monster_task};
pub use plot::{complete_act, interplot_cinematic};
pub use quest::complete_quest;
