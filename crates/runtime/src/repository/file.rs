//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::traits::validate_slot;
use super::{RepositoryError, Result, SaveData, SaveRepository};

const SAVE_EXTENSION: &str = "sav";

/// File-based implementation of SaveRepository.
///
/// # File Format
///
/// Each slot is stored as `{slot}.sav` in bincode format. Writes go to a
/// temporary file that is renamed into place, so a crash mid-save leaves the
/// previous save intact.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    /// Create a new file-based save repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a save file.
    fn save_path(&self, slot: &str) -> PathBuf {
        self.base_dir.join(format!("{}.{}", slot, SAVE_EXTENSION))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, slot: &str, data: &SaveData) -> Result<()> {
        validate_slot(slot)?;
        let path = self.save_path(slot);
        let temp_path = path.with_extension("sav.tmp");

        let bytes =
            bincode::serialize(data).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved slot[{}] to {}", slot, path.display());

        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<SaveData>> {
        validate_slot(slot)?;
        let path = self.save_path(slot);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let data: SaveData = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded slot[{}] from {}", slot, path.display());

        Ok(Some(data))
    }

    fn exists(&self, slot: &str) -> bool {
        validate_slot(slot).is_ok() && self.save_path(slot).exists()
    }

    fn delete(&self, slot: &str) -> Result<()> {
        validate_slot(slot)?;
        let path = self.save_path(slot);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted slot[{}]", slot);
        }

        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let mut slots = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) == Some(SAVE_EXTENSION)
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                slots.push(stem.to_owned());
            }
        }

        slots.sort_unstable();
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Player;

    fn sample() -> SaveData {
        SaveData {
            player: Player::new("Aria").with_gold(120),
            room: "Quiet Village".into(),
        }
    }

    #[test]
    fn save_then_load_restores_everything() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();

        assert!(!repo.exists("default"));
        repo.save("default", &sample()).unwrap();

        assert!(repo.exists("default"));
        assert!(dir.path().join("default.sav").exists());
        assert!(!dir.path().join("default.sav.tmp").exists());
        assert_eq!(repo.load("default").unwrap(), Some(sample()));
    }

    #[test]
    fn empty_slot_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        assert_eq!(repo.load("nothing").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        fs::write(dir.path().join("broken.sav"), b"\x01\x02").unwrap();

        assert!(matches!(
            repo.load("broken"),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn list_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path().join("nested")).unwrap();
        repo.save("b", &sample()).unwrap();
        repo.save("a", &sample()).unwrap();

        assert_eq!(repo.list_slots().unwrap(), ["a", "b"]);
        repo.delete("a").unwrap();
        repo.delete("a").unwrap();
        assert_eq!(repo.list_slots().unwrap(), ["b"]);
    }

    #[test]
    fn path_like_slots_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        assert!(matches!(
            repo.save("../escape", &sample()),
            Err(RepositoryError::InvalidSlot(_))
        ));
        assert!(!repo.exists("../escape"));
    }
}
