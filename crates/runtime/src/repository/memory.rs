//! In-memory SaveRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::validate_slot;
use super::{RepositoryError, Result, SaveData, SaveRepository};

/// In-memory implementation of SaveRepository.
#[derive(Default)]
pub struct InMemorySaveRepo {
    saves: RwLock<HashMap<String, SaveData>>,
}

impl InMemorySaveRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveRepository for InMemorySaveRepo {
    fn save(&self, slot: &str, data: &SaveData) -> Result<()> {
        validate_slot(slot)?;
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.insert(slot.to_owned(), data.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<SaveData>> {
        validate_slot(slot)?;
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.get(slot).cloned())
    }

    fn exists(&self, slot: &str) -> bool {
        self.saves
            .read()
            .map(|saves| saves.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        validate_slot(slot)?;
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.remove(slot);
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut slots: Vec<String> = saves.keys().cloned().collect();
        slots.sort_unstable();
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Player;

    #[test]
    fn slots_are_isolated_and_listed_in_order() {
        let repo = InMemorySaveRepo::new();
        let data = SaveData {
            player: Player::new("Aria"),
            room: "Entrance Hall".into(),
        };
        repo.save("b", &data).unwrap();
        repo.save("a", &data).unwrap();

        assert_eq!(repo.list_slots().unwrap(), vec!["a", "b"]);
        repo.delete("a").unwrap();
        assert!(!repo.exists("a"));
        assert_eq!(repo.load("b").unwrap(), Some(data));
    }

    #[test]
    fn every_operation_rejects_bad_slot_names() {
        let repo = InMemorySaveRepo::new();
        assert!(matches!(
            repo.load("../x"),
            Err(RepositoryError::InvalidSlot(_))
        ));
        assert!(matches!(
            repo.delete(""),
            Err(RepositoryError::InvalidSlot(_))
        ));
        assert!(matches!(
            repo.save(
                "a b",
                &SaveData {
                    player: Player::new("Aria"),
                    room: "Entrance Hall".into(),
                }
            ),
            Err(RepositoryError::InvalidSlot(_))
        ));
    }
}
