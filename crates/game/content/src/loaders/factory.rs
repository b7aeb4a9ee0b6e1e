//! Content factory for loading game content from a data directory.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::loaders::{ConfigLoader, LoadResult, WorldLoader, WorldSpec};

pub const CONFIG_FILE: &str = "config.toml";
pub const WORLD_FILE: &str = "world.ron";

/// Content factory that loads all game content from an optional data
/// directory, falling back to the compiled-in content.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── world.ron
/// ```
///
/// Either file may be absent. A file that exists but fails to parse is an
/// error, never silently replaced.
#[derive(Debug, Clone, Default)]
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a factory that reads from `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Creates a factory that only serves the compiled-in content.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.existing(CONFIG_FILE) {
            Some(path) => ConfigLoader::load(&path),
            None => ConfigLoader::builtin(),
        }
    }

    /// Load the world layout from `world.ron`.
    pub fn load_world(&self) -> LoadResult<WorldSpec> {
        match self.existing(WORLD_FILE) {
            Some(path) => WorldLoader::load(&path),
            None => WorldLoader::builtin(),
        }
    }

    /// Returns the data directory path, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn existing(&self, file: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(file))
            .filter(|path| path.exists())
    }
}
