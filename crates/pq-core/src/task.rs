//! The task protocol: what the character is doing now and what is queued next.

use serde::{Deserialize, Serialize};

/// What a slain monster leaves behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Loot {
    /// Nothing.
    #[default]
    None,
    /// A freshly generated special item.
    Special,
    /// One unit of `<monster name lowercased> <part>`.
    Drop(String),
}

impl Loot {
    /// Decode a pool entry's loot field: `*` is special, empty is nothing.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "" => Self::None,
            "*" => Self::Special,
            part => Self::Drop(part.to_string()),
        }
    }
}

/// A monster as drawn from the content tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Display name, e.g. `"Goblin"`.
    pub name: String,
    /// Natural level listed in the table.
    pub level: i64,
    /// What killing it yields.
    pub loot: Loot,
}

impl Monster {
    /// Create a monster descriptor.
    pub fn new(name: impl Into<String>, level: i64, loot: Loot) -> Self {
        Self {
            name: name.into(),
            level,
            loot,
        }
    }

    /// Name of the raw item this monster drops, if any.
    pub fn drop_name(&self) -> Option<String> {
        match &self.loot {
            Loot::Drop(part) => Some(format!("{} {}", self.name.to_lowercase(), part)),
            _ => None,
        }
    }
}

/// The kind of the active task. Decides what happens when it completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Task {
    /// A queued narrative or plot beat; completing it has no side effect.
    #[default]
    Scripted,
    /// Fighting a monster; completion grants experience and loot.
    Kill {
        /// The monster being fought.
        monster: Monster,
    },
    /// Walking out to find monsters.
    Heading,
    /// Haggling for an equipment upgrade; completion spends Gold.
    Buying,
    /// Walking to market with a full pack.
    Market,
    /// Selling one inventory row.
    Sell,
}

impl Task {
    /// True for monster fights.
    pub fn is_kill(&self) -> bool {
        matches!(self, Self::Kill { .. })
    }
}

/// A pre-scripted entry waiting in the task queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueuedTask {
    /// A cosmetic story beat.
    Narrative {
        /// Caption shown while it runs.
        caption: String,
        /// Duration in whole seconds.
        seconds: u32,
    },
    /// The end of an interlude; dequeuing it completes the current act.
    Plot {
        /// Duration in whole seconds.
        seconds: u32,
    },
}

impl QueuedTask {
    /// Shorthand for a narrative beat.
    pub fn narrative(seconds: u32, caption: impl Into<String>) -> Self {
        Self::Narrative {
            caption: caption.into(),
            seconds,
        }
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        let seconds = match self {
            Self::Narrative { seconds, .. } | Self::Plot { seconds } => *seconds,
        };
        u64::from(seconds) * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loot_codes() {
        assert_eq!(Loot::from_code(""), Loot::None);
        assert_eq!(Loot::from_code("*"), Loot::Special);
        assert_eq!(Loot::from_code("ear"), Loot::Drop("ear".into()));
    }

    #[test]
    fn drop_name_lowercases_monster() {
        let m = Monster::new("Black Pudding", 10, Loot::Drop("saliva".into()));
        assert_eq!(m.drop_name().as_deref(), Some("black pudding saliva"));
        let m = Monster::new("Orc", 1, Loot::Special);
        assert!(m.drop_name().is_none());
    }

    #[test]
    fn queued_durations() {
        assert_eq!(QueuedTask::narrative(6, "x").duration_ms(), 6000);
        assert_eq!(QueuedTask::Plot { seconds: 2 }.duration_ms(), 2000);
    }

    #[test]
    fn task_serializes_with_kind_tag() {
        let task = Task::Kill {
            monster: Monster::new("Goblin", 1, Loot::Drop("ear".into())),
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"kind\":\"kill\""));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
        assert!(back.is_kill());
        assert!(!Task::Sell.is_kill());
    }
}
