use std::collections::VecDeque;

use serde::{Deserialize, Deserializer, Serialize};

use crate::character::{Equips, Stats, Traits};
use crate::inventory::{Inventory, InventoryItem};
use crate::meter::ProgressMeter;
use crate::spells::SpellBook;
use crate::task::{Monster, QueuedTask, Task};

/// Current save schema. Saves written before versioning deserialize as 0.
pub const SCHEMA_VERSION: u32 = 1;

/// Reads an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The five progress meters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meters {
    /// Experience in seconds of fighting; completing it levels up.
    pub experience: ProgressMeter,
    /// Carried non-Gold items against the carrying limit.
    pub encumbrance: ProgressMeter,
    /// Story progress in seconds; completing it queues an interlude.
    pub plot: ProgressMeter,
    /// Quest progress in seconds; completing it rolls a new quest.
    pub quest: ProgressMeter,
    /// The active task, in milliseconds.
    pub task: ProgressMeter,
}

/// Most-recent "best" strings shown on the character sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestCache {
    /// Latest act caption.
    pub plot: String,
    /// Latest quest caption.
    pub quest: String,
    /// Latest equipment acquired.
    pub equip: String,
    /// Highest-ranked spell with its rank.
    pub spell: String,
    /// Highest primary stat with its value.
    pub stat: String,
}

/// The whole simulation state of one character.
///
/// This is also the save-file schema. Collection fields default to empty so
/// older saves load; the engine's hydration step repairs them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    /// Save schema version this state was last hydrated to.
    #[serde(default)]
    pub schema_version: u32,
    /// Name, race, class, level.
    pub traits: Traits,
    /// Primary stats and derived maxima.
    pub stats: Stats,
    /// Equipped items by slot.
    #[serde(default)]
    pub equips: Equips,
    /// Learned spells.
    #[serde(default, deserialize_with = "null_as_default")]
    pub spells: SpellBook,
    /// Carried items, Gold first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventory: Inventory,
    /// Story captions: "Prologue", "Act I", ...
    #[serde(default, deserialize_with = "null_as_default")]
    pub plots: Vec<String>,
    /// Quest captions, most recent last.
    #[serde(default, deserialize_with = "null_as_default")]
    pub quests: Vec<String>,
    /// Experience, encumbrance, plot, quest, and task meters.
    #[serde(default)]
    pub meters: Meters,
    /// Kind of the active task.
    #[serde(default)]
    pub task: Task,
    /// Caption describing the active task.
    #[serde(default)]
    pub caption: String,
    /// Number of completed acts.
    #[serde(default)]
    pub act: u32,
    /// Cached display strings.
    #[serde(default)]
    pub best: BestCache,
    /// Monster the active quest asks the character to hunt.
    #[serde(default)]
    pub quest_monster: Option<Monster>,
    /// Completed task count.
    #[serde(default)]
    pub tasks: u64,
    /// Simulated seconds spent on completed tasks.
    #[serde(default)]
    pub elapsed: f64,
    /// Scripted tasks waiting to run, front first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub queue: VecDeque<QueuedTask>,
    /// Inventory row touched most recently, for highlighting.
    #[serde(skip)]
    pub latest_inventory: Option<usize>,
}

impl CharacterState {
    /// A blank level-1 state with unit meters, empty logs, and an empty queue.
    pub fn new(traits: Traits, stats: Stats) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            traits,
            stats,
            equips: Equips::new(),
            spells: SpellBook::new(),
            inventory: Inventory::new(),
            plots: Vec::new(),
            quests: Vec::new(),
            meters: Meters::default(),
            task: Task::Scripted,
            caption: String::new(),
            act: 0,
            best: BestCache::default(),
            quest_monster: None,
            tasks: 0,
            elapsed: 0.0,
            queue: VecDeque::new(),
            latest_inventory: None,
        }
    }

    /// Current level.
    pub fn level(&self) -> u32 {
        self.traits.level
    }

    /// Current Gold.
    pub fn gold(&self) -> i64 {
        self.inventory.gold()
    }

    /// Price of the next equipment upgrade: `5L² + 10L + 20`.
    pub fn equipment_price(&self) -> i64 {
        let level = i64::from(self.traits.level);
        5 * level * level + 10 * level + 20
    }

    /// Add items, highlight the row, and keep the encumbrance meter in step.
    pub fn add_item(&mut self, name: &str, quantity: i64) -> usize {
        let idx = self.inventory.add(name, quantity);
        self.latest_inventory = Some(idx);
        self.recount_encumbrance();
        idx
    }

    /// Remove the first non-Gold row and keep the encumbrance meter in step.
    pub fn take_first_sellable(&mut self) -> Option<InventoryItem> {
        let item = self.inventory.take_first_sellable()?;
        self.recount_encumbrance();
        Some(item)
    }

    /// Set the encumbrance position to the carried non-Gold quantity.
    pub fn recount_encumbrance(&mut self) {
        let carried = self.inventory.encumbrance() as f64;
        self.meters.encumbrance.set_position(carried);
    }
}
