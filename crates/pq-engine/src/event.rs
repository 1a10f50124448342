/// What kind of engine event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEventKind {
    // Tasks
    /// A new task became active.
    TaskStarted {
        /// The task caption.
        caption: String,
    },

    // Loot and trade
    /// An item was added to the inventory.
    LootWon {
        /// The item name.
        item: String,
    },
    /// An inventory row was sold.
    ItemSold {
        /// The item name.
        item: String,
        /// Gold received.
        gold: i64,
    },
    /// A piece of equipment replaced what was in its slot.
    EquipmentGained {
        /// The slot label.
        slot: String,
        /// The new item name.
        item: String,
    },

    // Growth
    /// The character reached a new level.
    LevelUp {
        /// The new level.
        level: u32,
    },
    /// A spell was learned or ranked up.
    SpellLearned {
        /// Spell name with its new rank.
        spell: String,
    },
    /// A primary stat increased.
    StatRaised {
        /// Stat label with its new value.
        stat: String,
    },

    // Story
    /// A quest was finished and a new one begun.
    QuestCompleted {
        /// Caption of the new quest.
        next: String,
    },
    /// An act was completed.
    ActCompleted {
        /// The act number now running.
        act: u32,
    },
    /// An interlude was queued.
    CinematicQueued {
        /// Number of queued entries, the trailing plot entry included.
        beats: usize,
    },
}

impl SimEventKind {
    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TaskStarted { .. } => "task",
            Self::LootWon { .. } => "loot",
            Self::ItemSold { .. } => "sold",
            Self::EquipmentGained { .. } => "equip",
            Self::LevelUp { .. } => "level",
            Self::SpellLearned { .. } => "spell",
            Self::StatRaised { .. } => "stat",
            Self::QuestCompleted { .. } => "quest",
            Self::ActCompleted { .. } => "act",
            Self::CinematicQueued { .. } => "story",
        }
    }
}

/// One logged outcome.
#[derive(Debug, Clone)]
pub struct SimEvent {
    /// Tasks completed when it happened.
    pub task_number: u64,
    /// What happened.
    pub kind: SimEventKind,
    /// Display line, e.g. "Sold a rat tail for 1 gold".
    pub description: String,
}

impl SimEvent {
    /// Build an event.
    pub fn new(task_number: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            task_number,
            kind,
            description: description.into(),
        }
    }
}

/// Bounded history of what happened to the character, oldest first.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    capacity: usize,
}

impl EventLog {
    /// A log keeping at most `capacity` events; 0 keeps everything.
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity,
        }
    }

    /// Record an event. Past capacity, the oldest entries fall off.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        let overflow = match self.capacity {
            0 => 0,
            cap => self.events.len().saturating_sub(cap),
        };
        if overflow > 0 {
            self.events.drain(..overflow);
        }
    }

    /// Everything still held, oldest first.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Events stamped with `task_number`.
    pub fn events_at_task(&self, task_number: u64) -> Vec<&SimEvent> {
        self.events
            .iter()
            .filter(|e| e.task_number == task_number)
            .collect()
    }

    /// Events whose kind carries `label` (see [`SimEventKind::label`]).
    pub fn events_labelled(&self, label: &str) -> Vec<&SimEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.label() == label)
            .collect()
    }

    /// Newest event, if any.
    pub fn last(&self) -> Option<&SimEvent> {
        self.events.last()
    }

    /// Number of events held.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing is held.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forget every event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
