/// `pq new`: roll a character.
pub mod new;
/// `pq run`: advance a save.
pub mod run;
/// `pq show`: print the character sheet.
pub mod show;
/// `pq tables`: dump the built-in content tables.
pub mod tables;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pq_content::{ContentTables, StdContent};
use pq_core::CharacterState;
use pq_engine::{EngineConfig, Simulation, hydrate_in_place};

/// Save envelope version written by this build.
pub const SAVE_VERSION: u32 = 1;

/// On-disk save file: the character state plus bookkeeping.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveFile {
    /// Envelope version.
    pub version: u32,
    /// When the file was last written.
    pub saved_at: DateTime<Utc>,
    /// The full simulation state.
    pub character: CharacterState,
}

impl SaveFile {
    /// Wrap a state, stamped with the current time.
    pub fn new(character: CharacterState) -> Self {
        Self {
            version: SAVE_VERSION,
            saved_at: Utc::now(),
            character,
        }
    }
}

/// Read a save file and repair its character state.
pub fn load_save(path: &Path) -> Result<SaveFile, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let mut save: SaveFile = serde_json::from_str(&json)
        .map_err(|e| format!("{} is not a valid save file: {e}", path.display()))?;
    if save.version > SAVE_VERSION {
        return Err(format!(
            "{} has save version {}, newer than supported version {SAVE_VERSION}",
            path.display(),
            save.version
        ));
    }
    let repaired = hydrate_in_place(&mut save.character);
    if !repaired.is_empty() {
        tracing::info!("repaired save on load: {}", repaired.join(", "));
    }
    Ok(save)
}

/// Write a character state as a fresh save envelope.
pub fn write_save(path: &Path, character: CharacterState) -> Result<SaveFile, String> {
    let save = SaveFile::new(character);
    let json = serde_json::to_string_pretty(&save)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    Ok(save)
}

/// Content tables from a JSON file, or the built-in ones.
pub fn load_tables(path: Option<&Path>) -> Result<ContentTables, String> {
    match path {
        Some(path) => ContentTables::load(path).map_err(|e| format!("{}: {e}", path.display())),
        None => Ok(ContentTables::default()),
    }
}

/// A seeded simulation over the given tables.
pub fn build_simulation(
    seed: u64,
    content: Option<&Path>,
) -> Result<Simulation<StdContent>, String> {
    let tables = load_tables(content)?;
    let config = EngineConfig::default().with_seed(seed);
    Simulation::new(StdContent::with_tables(seed, tables), config)
        .map_err(|e| format!("engine setup failed: {e}"))
}
