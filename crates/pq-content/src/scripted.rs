//! A content provider that replays a fixed script of rolls.

use std::collections::VecDeque;

use crate::provider::Content;
use crate::tables::ContentTables;

/// Deterministic [`Content`] for tests and reproducible demos.
///
/// Each call to [`Content::random`] consumes the next scripted roll, reduced
/// modulo the requested range. Once the script runs out every roll is 0.
/// Queued names, when present, are returned by [`Content::generate_name`]
/// before falling back to syllable generation from the rolls.
#[derive(Debug, Clone, Default)]
pub struct ScriptedContent {
    rolls: VecDeque<i64>,
    names: VecDeque<String>,
    tables: ContentTables,
    consumed: usize,
}

impl ScriptedContent {
    /// Script of rolls over the built-in tables.
    pub fn new(rolls: impl IntoIterator<Item = i64>) -> Self {
        Self::with_tables(rolls, ContentTables::default())
    }

    /// Script of rolls over custom tables.
    pub fn with_tables(rolls: impl IntoIterator<Item = i64>, tables: ContentTables) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            names: VecDeque::new(),
            tables,
            consumed: 0,
        }
    }

    /// Names to hand out, in order, from `generate_name`.
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Append more rolls to the script.
    pub fn push_rolls(&mut self, rolls: impl IntoIterator<Item = i64>) {
        self.rolls.extend(rolls);
    }

    /// Rolls still waiting in the script.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }

    /// Number of rolls requested so far, including those past the script.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl Content for ScriptedContent {
    fn random(&mut self, below: i64) -> i64 {
        self.consumed += 1;
        let roll = self.rolls.pop_front().unwrap_or(0);
        if below <= 0 {
            return 0;
        }
        roll.rem_euclid(below)
    }

    fn tables(&self) -> &ContentTables {
        &self.tables
    }

    fn generate_name(&mut self) -> String {
        match self.names.pop_front() {
            Some(name) => name,
            None => crate::names::generate_name(self),
        }
    }
}
