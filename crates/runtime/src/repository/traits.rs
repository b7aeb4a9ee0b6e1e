//! Repository contract for saving and loading a game in progress.

use game_core::Player;
use serde::{Deserialize, Serialize};

use super::{RepositoryError, Result};

/// What a save slot holds: the whole player plus where they stood.
///
/// The room is stored by name so a save survives edits to the world file
/// that reorder rooms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub player: Player,
    pub room: String,
}

/// Repository for save games, one record per named slot.
pub trait SaveRepository: Send + Sync {
    /// Save a game under `slot`, replacing any previous record.
    fn save(&self, slot: &str, data: &SaveData) -> Result<()>;

    /// Load the game in `slot`, `None` if the slot is empty.
    fn load(&self, slot: &str) -> Result<Option<SaveData>>;

    /// Check if a slot holds a save
    fn exists(&self, slot: &str) -> bool;

    /// Delete a save. Deleting an empty slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all occupied slots
    fn list_slots(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}

/// Slot names become file names, so keep them to a safe alphabet.
pub(crate) fn validate_slot(slot: &str) -> Result<()> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidSlot(slot.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_names_are_restricted() {
        assert!(validate_slot("default").is_ok());
        assert!(validate_slot("hero_2-b").is_ok());
        assert!(validate_slot("").is_err());
        assert!(validate_slot("../etc").is_err());
        assert!(validate_slot("a b").is_err());
    }
}
